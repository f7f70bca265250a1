use bevy::prelude::*;

/// Key bindings for the sandbox client
#[derive(Clone, Debug, Resource)]
pub struct InputConfig {
    /// Key to use the ship's gadgets (default: T)
    pub use_gadget_key: KeyCode,
    /// Keys to yaw the ship (default: A/D)
    pub yaw_left_key: KeyCode,
    pub yaw_right_key: KeyCode,
    /// Yaw rate in radians per second
    pub yaw_speed: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            use_gadget_key: KeyCode::KeyT,
            yaw_left_key: KeyCode::KeyA,
            yaw_right_key: KeyCode::KeyD,
            yaw_speed: 1.5,
        }
    }
}
