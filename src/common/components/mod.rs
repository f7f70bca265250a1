pub mod energy;
pub mod entity_type;
pub mod flags;
pub mod gadget;
pub mod jump_drive;
pub mod tachyon_disruptor;
pub mod target;
pub mod target_lock;
