use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BodyImpl {
    pub kind: BodyKind,
}

impl BodyImpl {
    pub fn new(kind: BodyKind) -> Self {
        BodyImpl { kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum BodyKind {
    Asteroid,
    Cargo,
    JumpGate,
    Nebula,
    Planet,
}

impl BodyKind {
    /// Rough bounding radius in world units
    pub fn radius(&self) -> f32 {
        match self {
            BodyKind::Asteroid => 2.0,
            BodyKind::Cargo => 0.5,
            BodyKind::JumpGate => 5.0,
            BodyKind::Nebula => 20.0,
            BodyKind::Planet => 30.0,
        }
    }
}
