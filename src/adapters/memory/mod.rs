pub mod booking_ledger;
pub mod inventory_store;

pub use booking_ledger::BookingLedger as InMemoryBookingLedger;
pub use inventory_store::InventoryStore as InMemoryInventoryStore;
