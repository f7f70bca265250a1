use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::components::flags::*;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum GadgetType {
    TachyonDisruptor,
}

impl GadgetType {
    pub fn name(&self) -> &'static str {
        match self {
            GadgetType::TachyonDisruptor => "Tachyon Disruptor",
        }
    }

    pub fn hotkey(&self) -> char {
        match self {
            GadgetType::TachyonDisruptor => 'T',
        }
    }
}

/// Mount direction of a gadget on its ship
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Facing {
    #[default] Front,
    Right,
    Left,
    Back,
    /// Turret mount, covers every direction
    Full,
}

impl Facing {
    /// Half-width of a mounted firing cone (120° total)
    pub const HALF_ARC_DEGREES: f32 = 60.0;

    /// Mount direction in the ship's local frame, `None` for turrets
    pub fn local_direction(&self) -> Option<Vec3> {
        match self {
            Facing::Front => Some(Vec3::NEG_Z),
            Facing::Right => Some(Vec3::X),
            Facing::Left => Some(Vec3::NEG_X),
            Facing::Back => Some(Vec3::Z),
            Facing::Full => None,
        }
    }
}

/// Base data shared by every gadget
///
/// Gadgets are child entities of the ship that owns them, so their
/// GlobalTransform carries both the mount offset and the ship's rotation.
#[derive(Clone, Component, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Gadget {
    pub owner: Entity,
    pub kind: GadgetType,
    pub facing: Facing,
    /// Elapsed time of the last successful use
    pub last_use: Option<Duration>,
}

impl Gadget {
    pub fn new(owner: Entity, kind: GadgetType, facing: Facing) -> Self {
        Self { owner, kind, facing, last_use: None }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Generic usability shared by all gadgets
    ///
    /// The gadget must be intact and not cloaked, and its owner must exist,
    /// be intact and not cloaked.
    pub fn usable(&self, flags: &Flags, owner_flags: Option<&Flags>) -> bool {
        if flags.destroyed() || flags.cloaked() { return false; }
        let Some(owner_flags) = owner_flags else { return false };
        !owner_flags.any_set([FLAG_DESTROYED, FLAG_CLOAKED])
    }

    pub fn record_use(&mut self, when: Duration) {
        self.last_use = Some(when);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gadget() -> Gadget {
        let mut world = World::new();
        let owner = world.spawn_empty().id();
        Gadget::new(owner, GadgetType::TachyonDisruptor, Facing::Front)
    }

    #[test]
    fn test_tachyon_disruptor_identity() {
        let gadget = gadget();
        assert_eq!(gadget.name(), "Tachyon Disruptor");
        assert_eq!(gadget.kind.hotkey(), 'T');
    }

    #[test]
    fn test_usable_when_intact() {
        assert!(gadget().usable(&Flags::default(), Some(&Flags::default())));
    }

    #[test]
    fn test_unusable_when_destroyed_or_cloaked() {
        let gadget = gadget();
        assert!(!gadget.usable(&Flags::new(FLAG_DESTROYED), Some(&Flags::default())));
        assert!(!gadget.usable(&Flags::default(), Some(&Flags::new(FLAG_DESTROYED))));
        assert!(!gadget.usable(&Flags::default(), Some(&Flags::new(FLAG_CLOAKED))));
    }

    #[test]
    fn test_cloaked_gadget_unusable() {
        let gadget = gadget();
        assert!(!gadget.usable(&Flags::new(FLAG_CLOAKED), Some(&Flags::default())));
    }

    #[test]
    fn test_unusable_without_owner() {
        assert!(!gadget().usable(&Flags::default(), None));
    }

    #[test]
    fn test_jump_disabled_owner_can_still_use() {
        assert!(gadget().usable(&Flags::default(), Some(&Flags::new(FLAG_JUMP_DISABLED))));
    }

    #[test]
    fn test_facing_directions() {
        assert_eq!(Facing::Front.local_direction(), Some(Vec3::NEG_Z));
        assert_eq!(Facing::Back.local_direction(), Some(Vec3::Z));
        assert_eq!(Facing::Full.local_direction(), None);
    }
}
