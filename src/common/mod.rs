pub mod beam;
pub mod components;
pub mod message;
pub mod plugins;
pub mod resources;
pub mod systems;
