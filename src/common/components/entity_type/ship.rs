use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ShipImpl {
    pub hull: Hull,
}

impl ShipImpl {
    pub fn new(hull: Hull) -> Self {
        ShipImpl { hull }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Hull {
    Scout,
    Frigate,
    Destroyer,
    Cruiser,
    Dreadnought,
    Station,
    Platform, // stationary, never fitted with a jump drive
}

impl Hull {
    /// Rough bounding radius in world units
    pub fn radius(&self) -> f32 {
        match self {
            Hull::Scout => 1.0,
            Hull::Frigate => 1.5,
            Hull::Destroyer => 2.0,
            Hull::Cruiser => 3.0,
            Hull::Dreadnought => 4.5,
            Hull::Station => 6.0,
            Hull::Platform => 2.5,
        }
    }
}
