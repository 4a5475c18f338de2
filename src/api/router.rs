use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, create_reservation, list_available_seats, list_bookings, list_movies, list_theaters,
};

/// Creates the API router with all booking endpoints
///
/// Query endpoints (Read operations):
/// - GET /movies - List movies
/// - GET /movies/:movie_id/theaters - List theaters showing a movie
/// - GET /theaters/:theater_id/movies/:movie_id/seats - List available seats
/// - GET /bookings?customer_id=... - List a customer's bookings
///
/// Command endpoints (Write operations):
/// - POST /reservations - Reserve seats
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Query endpoints
        .route("/movies", get(list_movies))
        .route("/movies/:movie_id/theaters", get(list_theaters))
        .route(
            "/theaters/:theater_id/movies/:movie_id/seats",
            get(list_available_seats),
        )
        .route("/bookings", get(list_bookings))
        // Command endpoints
        .route("/reservations", post(create_reservation))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
