use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookingId, CustomerId, MovieId, SeatId, TheaterId};

/// 予約 - 1回の予約コミットで確保された座席の記録
///
/// コミット成功時にのみ作成され、以後は変更・削除されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub customer_id: CustomerId,
    pub movie_id: MovieId,
    pub theater_id: TheaterId,
    /// リクエストで指定された順序を保持する
    pub seat_ids: Vec<SeatId>,
    pub created_at: DateTime<Utc>,
}
