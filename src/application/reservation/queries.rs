use crate::domain::{Booking, CustomerId, Movie, MovieId, Seat, Theater, TheaterId};

use super::reservation_service::ServiceDependencies;

/// 上映中の映画一覧
pub fn list_movies(deps: &ServiceDependencies) -> Vec<Movie> {
    deps.inventory.list_movies()
}

/// 映画を上映しているシアター一覧（現状は全シアター）
pub fn list_theaters(deps: &ServiceDependencies, movie_id: MovieId) -> Vec<Theater> {
    deps.inventory.list_theaters(movie_id)
}

/// 予約可能な座席一覧
pub fn available_seats(
    deps: &ServiceDependencies,
    theater_id: TheaterId,
    movie_id: MovieId,
) -> Vec<Seat> {
    deps.inventory.available_seats(theater_id, movie_id)
}

/// 顧客の予約履歴（コミット順）
pub fn bookings_for(deps: &ServiceDependencies, customer_id: &CustomerId) -> Vec<Booking> {
    deps.ledger.for_customer(customer_id)
}
