pub mod body;
pub mod ship;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::components::entity_type::{
    body::*,
    ship::*,
};

#[derive(Clone, Component, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum EntityType {
    Ship(ShipImpl),
    Body(BodyImpl),
}

impl EntityType {
    /// Ships (including platforms) are the only category gadgets may lock onto
    pub fn is_ship(&self) -> bool {
        matches!(self, EntityType::Ship(_))
    }
}
