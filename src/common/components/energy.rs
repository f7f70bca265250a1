use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Ship energy reserve that gadgets draw from while sustained
#[derive(Clone, Component, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Energy {
    pub current: i32,
    pub max: i32,
}

impl Energy {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }
}
