use crate::domain::{Booking, CustomerId};

/// 予約台帳ポート
///
/// コミット済みの予約を追記専用で記録する。
/// 追記は予約コーディネーターが座席コミットの後にのみ行う。
pub trait BookingLedger: Send + Sync {
    /// 予約を末尾に追加する
    fn append(&self, booking: Booking);

    /// 顧客の予約を追加順で返す
    fn for_customer(&self, customer_id: &CustomerId) -> Vec<Booking>;

    /// 記録済みの予約の総数
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
