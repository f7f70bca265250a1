pub mod beam;
pub mod camera;
pub mod hud;
pub mod input;
pub mod targeting;
pub mod world;
