pub mod broadcast;
pub mod memory;
pub mod mock;
