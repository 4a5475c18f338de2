#![allow(dead_code)]

use cinema_booking::adapters::memory::{InMemoryBookingLedger, InMemoryInventoryStore};
use cinema_booking::adapters::mock;
use cinema_booking::application::reservation::{ReservationCoordinator, ServiceDependencies};
use cinema_booking::domain::{MovieId, TheaterId};
use std::sync::Arc;

/// テスト用の座席数（サンプルデータと同じ）
pub const CAPACITY: u32 = 20;

/// テスト用の予約コーディネーターとイベント記録
pub struct TestContext {
    pub coordinator: Arc<ReservationCoordinator>,
    pub events: Arc<mock::EventPublisher>,
}

/// サンプルデータ入りのインメモリ構成を作成
///
/// 各テストが独立したストアを持つため、テスト間で状態は共有されない。
pub fn setup() -> TestContext {
    let events = Arc::new(mock::EventPublisher::new());
    let deps = ServiceDependencies {
        inventory: Arc::new(InMemoryInventoryStore::with_sample_data(CAPACITY)),
        ledger: Arc::new(InMemoryBookingLedger::new()),
        events: events.clone(),
    };

    TestContext {
        coordinator: Arc::new(ReservationCoordinator::new(deps)),
        events,
    }
}

pub fn theater() -> TheaterId {
    TheaterId::new(1)
}

pub fn movie() -> MovieId {
    MovieId::new(1)
}
