use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Result of a toggle, reported back to the player
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Activity {
    Active,
    Inactive,
}

impl Activity {
    pub fn is_active(self) -> bool {
        matches!(self, Activity::Active)
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Activity::Active => write!(f, "Active"),
            Activity::Inactive => write!(f, "Inactive"),
        }
    }
}

/// Single-slot target lock for beam gadgets
///
/// Holds a non-owning handle to the locked entity. The world owns the target;
/// whoever dereferences the handle must treat a failed lookup as "lock broken".
///
/// Once acquired the lock is never revalidated: it persists until toggled off
/// or released, even if the target leaves the firing arc or loses its drive.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TargetLock {
    target: Option<Entity>,
}

impl TargetLock {
    pub fn new() -> Self {
        Self { target: None }
    }

    pub fn target(&self) -> Option<Entity> {
        self.target
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Check whether a use request may proceed
    ///
    /// A held lock is always usable so the beam can be turned off. Otherwise the
    /// device must pass its base usability check and the candidate must validate.
    /// `validate` is only evaluated when both earlier checks pass.
    pub fn usable<F>(&self, base_usable: bool, validate: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        if self.is_active() {
            return true;
        }
        base_usable && validate()
    }

    /// Acquire or release the lock
    ///
    /// - Unlocked with a candidate: lock on and call `disable` once with the target
    /// - Locked: release, whatever `candidate` is
    /// - Unlocked without a candidate: stays unlocked
    ///
    /// Releasing does not touch the target; the flag owner clears the effect.
    pub fn toggle<F>(&mut self, candidate: Option<Entity>, disable: F) -> Activity
    where
        F: FnOnce(Entity),
    {
        match (self.target, candidate) {
            (None, Some(ent)) => {
                self.target = Some(ent);
                debug!("target lock acquired on {ent}");
                disable(ent);
            }
            (Some(ent), _) => {
                self.target = None;
                debug!("target lock on {ent} released by toggle");
            }
            (None, None) => {}
        }
        self.activity()
    }

    /// Drop the lock without side effects on the (possibly despawned) target
    pub fn release(&mut self) {
        if let Some(ent) = self.target.take() {
            debug!("target lock on {ent} released");
        }
    }

    pub fn activity(&self) -> Activity {
        if self.is_active() { Activity::Active } else { Activity::Inactive }
    }
}
