use crate::application::reservation::ReservationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(ReservationError);

impl From<ReservationError> for ApiError {
    fn from(err: ReservationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        let (status, error_type) = match self.0 {
            // 400 Bad Request - リクエスト自体が不正
            ReservationError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),

            // 404 Not Found - 指定されたシアター・上映・座席が存在しない
            ReservationError::TheaterNotFound(_) => (StatusCode::NOT_FOUND, "THEATER_NOT_FOUND"),
            ReservationError::ShowNotFound { .. } => (StatusCode::NOT_FOUND, "SHOW_NOT_FOUND"),
            ReservationError::SeatNotFound(_) => (StatusCode::NOT_FOUND, "SEAT_NOT_FOUND"),

            // 409 Conflict - 座席が既に予約されている
            ReservationError::SeatUnavailable(_) => (StatusCode::CONFLICT, "SEAT_UNAVAILABLE"),
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
