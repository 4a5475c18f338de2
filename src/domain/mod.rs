pub mod booking;
pub mod catalog;
pub mod commands;
pub mod errors;
pub mod events;
pub mod seat;
pub mod value_objects;

pub use booking::*;
pub use catalog::*;
pub use errors::*;
pub use events::*;
pub use seat::*;
pub use value_objects::*;
