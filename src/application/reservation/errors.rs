use crate::domain::{MovieId, ReserveSeatsError, SeatId, TheaterId};
use thiserror::Error;

/// 予約アプリケーション層のエラー
///
/// いずれの場合も座席・予約ID・台帳は変更されていない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    /// リクエストが不正（座席リストが空、顧客IDが空など）
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// シアターが存在しない
    #[error("Theater {0} not found")]
    TheaterNotFound(TheaterId),

    /// シアターでその映画が上映されていない
    #[error("Movie {movie_id} is not showing in theater {theater_id}")]
    ShowNotFound {
        theater_id: TheaterId,
        movie_id: MovieId,
    },

    /// 座席が存在しない
    #[error("Seat {0} not found")]
    SeatNotFound(SeatId),

    /// 座席が予約済み、または同一リクエスト内で重複している
    #[error("Seat {0} is not available")]
    SeatUnavailable(SeatId),
}

impl From<ReserveSeatsError> for ReservationError {
    fn from(err: ReserveSeatsError) -> Self {
        match err {
            ReserveSeatsError::TheaterNotFound(id) => ReservationError::TheaterNotFound(id),
            ReserveSeatsError::ShowNotFound {
                theater_id,
                movie_id,
            } => ReservationError::ShowNotFound {
                theater_id,
                movie_id,
            },
            ReserveSeatsError::SeatNotFound(id) => ReservationError::SeatNotFound(id),
            ReserveSeatsError::SeatUnavailable(id) => ReservationError::SeatUnavailable(id),
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, ReservationError>;
