mod errors;
mod queries;
mod reservation_service;

pub use errors::{ReservationError, Result};
pub use queries::{available_seats, bookings_for, list_movies, list_theaters};
pub use reservation_service::{ReservationCoordinator, ServiceDependencies};
