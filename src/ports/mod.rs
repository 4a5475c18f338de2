pub mod booking_ledger;
pub mod event_publisher;
pub mod inventory_store;

pub use booking_ledger::*;
pub use event_publisher::*;
pub use inventory_store::*;
