use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::components::target_lock::Activity;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub enum Event {
    /// Request to use a gadget against an optional candidate
    UseGadget { gadget: Entity, target: Option<Entity> },
    /// A gadget's lock changed state
    GadgetActivity { gadget: Entity, owner: Entity, activity: Activity },
}

#[derive(Clone, Copy, Debug, Deserialize, Event, Serialize)]
pub struct Do {
    pub event: Event
}

#[derive(Clone, Copy, Debug, Deserialize, Event, Serialize)]
pub struct Try {
    pub event: Event
}
