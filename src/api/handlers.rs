use crate::application::reservation::{
    ReservationCoordinator, available_seats, bookings_for, list_movies as query_movies,
    list_theaters as query_theaters,
};
use crate::domain::{CustomerId, MovieId, TheaterId};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{
        BookingResponse, ErrorResponse, ListBookingsQuery, MovieResponse, ReserveSeatsRequest,
        SeatResponse, TheaterResponse,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
pub struct AppState {
    pub coordinator: ReservationCoordinator,
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /reservations - 座席を予約
///
/// 強制されるビジネスルール:
/// - 座席リストが空でないこと
/// - シアターと上映が存在すること
/// - 指定した座席がすべて存在し、予約可能であること
///
/// 予約は全座席成功か全座席失敗のいずれか。
pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReserveSeatsRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let booking = state.coordinator.reserve(req.to_command())?;
    Ok((StatusCode::CREATED, Json(BookingResponse::from(booking))))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /movies - 上映中の映画一覧
pub async fn list_movies(State(state): State<Arc<AppState>>) -> Json<Vec<MovieResponse>> {
    let movies = query_movies(state.coordinator.dependencies());
    Json(movies.into_iter().map(MovieResponse::from).collect())
}

/// GET /movies/:movie_id/theaters - 映画を上映しているシアター一覧
pub async fn list_theaters(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<u32>,
) -> Json<Vec<TheaterResponse>> {
    let theaters = query_theaters(state.coordinator.dependencies(), MovieId::new(movie_id));
    Json(theaters.into_iter().map(TheaterResponse::from).collect())
}

/// GET /theaters/:theater_id/movies/:movie_id/seats - 予約可能な座席一覧
///
/// 存在しない組み合わせの場合は空の一覧を返す。
pub async fn list_available_seats(
    State(state): State<Arc<AppState>>,
    Path((theater_id, movie_id)): Path<(u32, u32)>,
) -> Json<Vec<SeatResponse>> {
    let seats = available_seats(
        state.coordinator.dependencies(),
        TheaterId::new(theater_id),
        MovieId::new(movie_id),
    );
    Json(seats.into_iter().map(SeatResponse::from).collect())
}

/// GET /bookings - 顧客の予約一覧
///
/// クエリパラメータ:
/// - customer_id: 顧客IDでフィルタリング（必須）
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<Vec<BookingResponse>>, QueryError> {
    let customer_id = query
        .customer_id
        .filter(|id| !id.trim().is_empty())
        .map(CustomerId::new)
        .ok_or_else(|| {
            QueryError::BadRequest("customer_id query parameter is required".to_string())
        })?;

    let bookings = bookings_for(state.coordinator.dependencies(), &customer_id);
    Ok(Json(
        bookings.into_iter().map(BookingResponse::from).collect(),
    ))
}

// ============================================================================
// Error types
// ============================================================================

/// クエリハンドラー用のエラー型
#[derive(Debug)]
pub enum QueryError {
    BadRequest(String),
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            QueryError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
