use serde::{Deserialize, Serialize};

use super::{CustomerId, MovieId, SeatId, TheaterId};

/// コマンド：座席を予約する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveSeats {
    pub theater_id: TheaterId,
    pub movie_id: MovieId,
    pub seat_ids: Vec<SeatId>,
    pub customer_id: CustomerId,
}

impl ReserveSeats {
    pub fn new(
        theater_id: TheaterId,
        movie_id: MovieId,
        seat_ids: impl IntoIterator<Item = impl Into<SeatId>>,
        customer_id: impl Into<CustomerId>,
    ) -> Self {
        Self {
            theater_id,
            movie_id,
            seat_ids: seat_ids.into_iter().map(Into::into).collect(),
            customer_id: customer_id.into(),
        }
    }
}
