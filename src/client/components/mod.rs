use bevy::prelude::*;

/// Marks the ship the local player flies
#[derive(Clone, Component, Copy, Debug, Default)]
pub struct Controlled;
