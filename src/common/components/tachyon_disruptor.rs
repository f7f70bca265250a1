use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::{
    components::{flags::*, gadget::*, target_lock::*},
    resources::GadgetConfig,
    systems::targeting::*,
};

/// Beam gadget that pins a target ship's jump drive while locked on
#[derive(Clone, Component, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct TachyonDisruptor {
    pub lock: TargetLock,
    pub energy_cost: f32,
}

impl TachyonDisruptor {
    pub fn new(config: &GadgetConfig) -> Self {
        Self {
            lock: TargetLock::new(),
            energy_cost: config.tachyon_disruptor_energy_cost,
        }
    }

    /// Whether a use request against `candidate` may proceed
    pub fn usable(
        &self,
        gadget: &Gadget,
        flags: &Flags,
        owner_flags: Option<&Flags>,
        mount: Mount,
        candidate: Option<&TargetInfo>,
    ) -> bool {
        self.lock.usable(
            gadget.usable(flags, owner_flags),
            || validate_target(gadget, mount, candidate),
        )
    }

    /// Sustaining the beam draws nothing from the ship's reserve
    pub fn use_energy(&self, _tick: u32, energy: i32) -> i32 {
        energy
    }
}
