use super::{MovieId, SeatId, TheaterId};

/// 座席選択のエラー（座席コレクション内での検証）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatSelectionError {
    /// 座席がコレクション内に存在しない
    SeatNotFound(SeatId),
    /// 座席が予約済み、または同一リクエスト内で重複指定された
    SeatUnavailable(SeatId),
}

/// 座席確保のエラー（在庫ストア側での解決と検証）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReserveSeatsError {
    /// シアターが存在しない
    TheaterNotFound(TheaterId),
    /// シアターにその映画の座席コレクションがない
    ShowNotFound {
        theater_id: TheaterId,
        movie_id: MovieId,
    },
    SeatNotFound(SeatId),
    SeatUnavailable(SeatId),
}

impl From<SeatSelectionError> for ReserveSeatsError {
    fn from(err: SeatSelectionError) -> Self {
        match err {
            SeatSelectionError::SeatNotFound(id) => ReserveSeatsError::SeatNotFound(id),
            SeatSelectionError::SeatUnavailable(id) => ReserveSeatsError::SeatUnavailable(id),
        }
    }
}
