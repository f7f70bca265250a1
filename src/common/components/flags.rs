use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub const FLAG_DESTROYED: u32 = 1 << 0;
pub const FLAG_CLOAKED: u32 = 1 << 1;
pub const FLAG_JUMP_DISABLED: u32 = 1 << 2;

/// Status flags carried by ships and gadgets
#[derive(Clone, Component, Copy, Default, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Flags {
    pub bits: u32,
}

impl Flags {
    pub fn new(bits: u32) -> Self {
        Self { bits }
    }

    pub fn is_set(&self, flag: u32) -> bool {
        self.bits & flag != 0
    }

    pub fn any_set<T>(&self, flags: T) -> bool
    where T : IntoIterator<Item = u32>, {
        flags.into_iter().any(|f| self.bits & f != 0)
    }

    pub fn set(&mut self, flags: u32) {
        self.bits |= flags;
    }

    pub fn clear(&mut self, flags: u32) {
        self.bits &= !flags;
    }

    pub fn destroyed(&self) -> bool {
        self.is_set(FLAG_DESTROYED)
    }

    pub fn cloaked(&self) -> bool {
        self.is_set(FLAG_CLOAKED)
    }
}
