use crate::domain::ReservationEvent;

/// イベント配信ポート
///
/// 予約の結果を外部の購読者に通知する。
/// 実装は呼び出し元をブロックしてはならず、配信失敗を呼び出し元に返さない。
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: ReservationEvent);
}
