use bevy::prelude::*;

/// Candidate selected for the controlled ship's gadgets
///
/// Updated every frame by the targeting system; consumed when a gadget is used.
#[derive(Clone, Component, Copy, Debug, Default)]
pub struct Target {
    /// The currently selected candidate
    pub entity: Option<Entity>,
    /// The last candidate (sticky for UI - persists even when no current target)
    pub last_target: Option<Entity>,
}

impl Target {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the candidate and update last_target
    pub fn set(&mut self, target: Entity) {
        self.entity = Some(target);
        self.last_target = Some(target);
    }

    /// Clear the current candidate (but keep last_target)
    pub fn clear(&mut self) {
        self.entity = None;
    }

    pub fn get(&self) -> Option<Entity> {
        self.entity
    }
}
