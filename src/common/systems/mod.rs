pub mod gadget;
pub mod jump;
pub mod targeting;
