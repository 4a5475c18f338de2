use serde::{Deserialize, Serialize};

use super::{Booking, MovieId, SeatId, TheaterId};

/// 予約に関する通知イベント
///
/// 外部の購読者（ログ、CLIなど）向けの観測用データ。
/// 購読者の有無や処理速度は予約の成否に影響しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ReservationEvent {
    /// 座席が予約された
    SeatsReserved {
        theater_id: TheaterId,
        movie_id: MovieId,
        seat_ids: Vec<SeatId>,
    },
    /// 予約が作成された
    BookingCreated { booking: Booking },
    /// 予約に失敗した
    ReservationFailed { reason: String },
}

impl ReservationEvent {
    /// ログ出力用のイベント名
    pub fn kind(&self) -> &'static str {
        match self {
            ReservationEvent::SeatsReserved { .. } => "seats_reserved",
            ReservationEvent::BookingCreated { .. } => "booking_created",
            ReservationEvent::ReservationFailed { .. } => "reservation_failed",
        }
    }
}
