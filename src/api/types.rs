use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Booking, CustomerId, Movie, MovieId, Seat, TheaterId, Theater, commands::ReserveSeats,
};

/// 座席予約リクエスト（POST /reservations）
#[derive(Debug, Deserialize)]
pub struct ReserveSeatsRequest {
    pub theater_id: u32,
    pub movie_id: u32,
    pub seat_ids: Vec<String>,
    pub customer_id: String,
}

impl ReserveSeatsRequest {
    pub fn to_command(&self) -> ReserveSeats {
        ReserveSeats::new(
            TheaterId::new(self.theater_id),
            MovieId::new(self.movie_id),
            self.seat_ids.iter().map(|id| id.trim().to_string()),
            CustomerId::new(self.customer_id.clone()),
        )
    }
}

/// 予約一覧取得のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct ListBookingsQuery {
    /// 顧客IDでフィルタリング（必須）
    pub customer_id: Option<String>,
}

/// 映画レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct MovieResponse {
    pub id: u32,
    pub title: String,
    pub duration_minutes: u32,
    pub genre: String,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id.value(),
            title: movie.title,
            duration_minutes: movie.duration_minutes,
            genre: movie.genre,
        }
    }
}

/// シアターレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct TheaterResponse {
    pub id: u32,
    pub name: String,
    pub capacity: u32,
}

impl From<Theater> for TheaterResponse {
    fn from(theater: Theater) -> Self {
        Self {
            id: theater.id.value(),
            name: theater.name,
            capacity: theater.capacity,
        }
    }
}

/// 座席レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct SeatResponse {
    pub id: String,
    pub status: String,
}

impl From<Seat> for SeatResponse {
    fn from(seat: Seat) -> Self {
        Self {
            status: seat.status.as_str().to_string(),
            id: seat.id.to_string(),
        }
    }
}

/// 予約レスポンス（POST /reservations と GET /bookings）
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingResponse {
    pub booking_id: u64,
    pub customer_id: String,
    pub movie_id: u32,
    pub theater_id: u32,
    pub seat_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            booking_id: booking.id.value(),
            customer_id: booking.customer_id.to_string(),
            movie_id: booking.movie_id.value(),
            theater_id: booking.theater_id.value(),
            seat_ids: booking.seat_ids.iter().map(ToString::to_string).collect(),
            created_at: booking.created_at,
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
