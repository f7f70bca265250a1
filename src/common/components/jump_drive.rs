use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::components::flags::*;

/// Capability component: a ship carrying one can jump, and can be disrupted
#[derive(Clone, Component, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct JumpDrive {
    /// Maximum jump distance in world units
    pub range: f32,
}

impl JumpDrive {
    pub fn new(range: f32) -> Self {
        Self { range }
    }

    /// A drive cannot engage while its ship is flagged jump-disabled
    pub fn can_engage(&self, flags: &Flags) -> bool {
        !flags.any_set([FLAG_JUMP_DISABLED, FLAG_DESTROYED])
    }
}
