//! Gadget Targeting
//!
//! Eligibility rules for beam gadgets and the candidate selection used by the
//! controlled ship.
//!
//! # Validation order
//!
//! All checks are conjunctive; cheaper ones run first:
//! 1. Generic validity: not the owner, not destroyed, not cloaked
//! 2. Category: ships only (no asteroids, cargo, gates, nebulae, planets)
//! 3. Capability: the ship must carry a jump drive
//! 4. Facing: the target must sit inside the gadget's firing cone

use bevy::prelude::*;

use crate::common::components::{
    entity_type::*,
    flags::*,
    gadget::*,
    jump_drive::*,
};

/// What a gadget needs to know about a candidate, snapshotted from the world
#[derive(Clone, Copy, Debug)]
pub struct TargetInfo {
    pub ent: Entity,
    pub typ: EntityType,
    pub flags: Flags,
    pub position: Vec3,
    pub jump_drive: Option<JumpDrive>,
}

/// World-space pose of a gadget mount
#[derive(Clone, Copy, Debug)]
pub struct Mount {
    pub position: Vec3,
    pub rotation: Quat,
}

impl From<&GlobalTransform> for Mount {
    fn from(value: &GlobalTransform) -> Self {
        let (_, rotation, position) = value.to_scale_rotation_translation();
        Self { position, rotation }
    }
}

/// Generic checks every targetable entity must pass
pub fn is_valid_target(owner: Entity, info: &TargetInfo) -> bool {
    info.ent != owner && !info.flags.any_set([FLAG_DESTROYED, FLAG_CLOAKED])
}

/// Check if `target` lies inside the firing cone of a gadget mounted at `mount`
///
/// Mounted facings cover ±60° around their world direction; turrets cover
/// everything. A target exactly at the mount point is always in the cone.
pub fn is_in_firing_arc(facing: Facing, mount: Mount, target: Vec3) -> bool {
    let Some(local) = facing.local_direction() else { return true };

    let to_target = target - mount.position;
    if to_target.length_squared() <= f32::EPSILON {
        return true;
    }

    let forward = mount.rotation * local;
    let angle = forward.angle_between(to_target).to_degrees();
    angle <= Facing::HALF_ARC_DEGREES
}

/// Full eligibility check for a tachyon disruptor candidate
pub fn validate_target(gadget: &Gadget, mount: Mount, candidate: Option<&TargetInfo>) -> bool {
    let Some(info) = candidate else { return false };

    if !is_valid_target(gadget.owner, info) {
        return false;
    }

    // only ships can be targeted
    if !info.typ.is_ship() {
        return false;
    }

    // only ships carrying a jump drive can be disrupted
    if info.jump_drive.is_none() {
        return false;
    }

    is_in_firing_arc(gadget.facing, mount, info.position)
}

/// Select the nearest candidate the gadget could lock onto
///
/// Ties on distance keep the first candidate seen.
pub fn select_target<'a, I>(gadget: &Gadget, mount: Mount, candidates: I) -> Option<Entity>
where
    I: IntoIterator<Item = &'a TargetInfo>,
{
    candidates
        .into_iter()
        .filter(|info| validate_target(gadget, mount, Some(info)))
        .map(|info| (info.ent, mount.position.distance_squared(info.position)))
        .fold(None, |best: Option<(Entity, f32)>, (ent, dist)| match best {
            Some((_, best_dist)) if best_dist <= dist => best,
            _ => Some((ent, dist)),
        })
        .map(|(ent, _)| ent)
}
