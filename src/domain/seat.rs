use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{SeatId, SeatSelectionError};

/// 座席ステータス
///
/// 遷移は Available → Reserved のみ。Reserved から戻ることはない。
/// Occupied は定義のみで、現在のどの操作からも到達しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// 予約可能
    Available,
    /// 予約済み
    Reserved,
    /// 着席済み（将来用）
    Occupied,
}

impl SeatStatus {
    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatStatus::Available => "available",
            SeatStatus::Reserved => "reserved",
            SeatStatus::Occupied => "occupied",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SeatStatus::Available)
    }
}

/// 座席
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub status: SeatStatus,
}

impl Seat {
    pub fn available(id: SeatId) -> Self {
        Self {
            id,
            status: SeatStatus::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }
}

/// 座席コレクション - 1つの（シアター, 映画）の組み合わせに属する座席の順序付き集合
///
/// 起動時にシアターの座席数ぶん作成され、以後サイズは変わらない。
/// 座席ステータスの変更はこの型を経由してのみ行われる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatCollection {
    seats: Vec<Seat>,
}

impl SeatCollection {
    /// A1..A{capacity} の座席をすべて予約可能状態で作成する
    pub fn with_capacity(capacity: u32) -> Self {
        let seats = (1..=capacity)
            .map(|number| Seat::available(SeatId::numbered(number)))
            .collect();
        Self { seats }
    }

    /// 予約可能な座席をコレクション順に返す
    pub fn available(&self) -> Vec<Seat> {
        self.seats
            .iter()
            .filter(|seat| seat.is_available())
            .cloned()
            .collect()
    }

    /// 純粋関数：予約対象の座席を検証し、位置を返す
    ///
    /// 指定順に検証し、最初に失敗した座席でエラーを返す。
    /// - 存在しない座席 → SeatNotFound
    /// - 予約可能でない座席 → SeatUnavailable
    /// - 同一リクエスト内で2回目に現れた座席 → SeatUnavailable
    ///
    /// 副作用なし。
    pub fn select(&self, seat_ids: &[SeatId]) -> Result<Vec<usize>, SeatSelectionError> {
        let mut selected = Vec::with_capacity(seat_ids.len());
        let mut seen = HashSet::with_capacity(seat_ids.len());

        for seat_id in seat_ids {
            let index = self
                .seats
                .iter()
                .position(|seat| &seat.id == seat_id)
                .ok_or_else(|| SeatSelectionError::SeatNotFound(seat_id.clone()))?;

            if !self.seats[index].is_available() || !seen.insert(index) {
                return Err(SeatSelectionError::SeatUnavailable(seat_id.clone()));
            }

            selected.push(index);
        }

        Ok(selected)
    }

    /// 座席を検証し、すべて成功した場合のみ Reserved に遷移させる
    ///
    /// 全件成功か全件不変か（部分的な予約は発生しない）。
    pub fn reserve(&mut self, seat_ids: &[SeatId]) -> Result<(), SeatSelectionError> {
        let selected = self.select(seat_ids)?;
        for index in selected {
            self.seats[index].status = SeatStatus::Reserved;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(labels: &[&str]) -> Vec<SeatId> {
        labels.iter().map(|label| SeatId::from(*label)).collect()
    }

    fn status_of(collection: &SeatCollection, label: &str) -> SeatStatus {
        collection
            .seats
            .iter()
            .find(|seat| seat.id.as_str() == label)
            .map(|seat| seat.status)
            .unwrap()
    }

    #[test]
    fn test_with_capacity_creates_available_seats_in_order() {
        let collection = SeatCollection::with_capacity(20);
        let available = collection.available();
        assert_eq!(available.len(), 20);
        assert_eq!(available[0].id.as_str(), "A1");
        assert_eq!(available[19].id.as_str(), "A20");
    }

    #[test]
    fn test_reserve_marks_all_seats() {
        let mut collection = SeatCollection::with_capacity(5);
        collection.reserve(&ids(&["A1", "A3"])).unwrap();

        assert_eq!(status_of(&collection, "A1"), SeatStatus::Reserved);
        assert_eq!(status_of(&collection, "A3"), SeatStatus::Reserved);
        assert_eq!(collection.available().len(), 3);
    }

    #[test]
    fn test_reserve_unknown_seat_changes_nothing() {
        let mut collection = SeatCollection::with_capacity(5);
        let result = collection.reserve(&ids(&["A1", "Z9"]));

        assert_eq!(
            result.unwrap_err(),
            SeatSelectionError::SeatNotFound("Z9".into())
        );
        assert_eq!(collection.available().len(), 5);
    }

    #[test]
    fn test_reserve_already_reserved_seat_changes_nothing() {
        let mut collection = SeatCollection::with_capacity(5);
        collection.reserve(&ids(&["A2"])).unwrap();

        let result = collection.reserve(&ids(&["A1", "A2", "A3"]));
        assert_eq!(
            result.unwrap_err(),
            SeatSelectionError::SeatUnavailable("A2".into())
        );
        assert_eq!(status_of(&collection, "A1"), SeatStatus::Available);
        assert_eq!(status_of(&collection, "A3"), SeatStatus::Available);
    }

    #[test]
    fn test_duplicate_seat_in_request_is_unavailable() {
        let mut collection = SeatCollection::with_capacity(5);
        let result = collection.reserve(&ids(&["A1", "A2", "A1"]));

        assert_eq!(
            result.unwrap_err(),
            SeatSelectionError::SeatUnavailable("A1".into())
        );
        assert_eq!(collection.available().len(), 5);
    }

    #[test]
    fn test_select_reports_first_failure_in_request_order() {
        let collection = SeatCollection::with_capacity(3);
        let result = collection.select(&ids(&["Q1", "A9"]));
        assert_eq!(
            result.unwrap_err(),
            SeatSelectionError::SeatNotFound("Q1".into())
        );
    }
}
