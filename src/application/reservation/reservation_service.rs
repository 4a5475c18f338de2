use crate::domain::{Booking, BookingId, ReservationEvent, commands::ReserveSeats};
use crate::ports::*;
use chrono::Utc;
use std::sync::{Arc, Mutex, PoisonError};

use super::errors::{ReservationError, Result};

/// サービスの依存関係
///
/// すべての依存が明示的に渡される。
/// テストではモックのEventPublisherなどに差し替える。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub inventory: Arc<dyn InventoryStore>,
    pub ledger: Arc<dyn BookingLedger>,
    pub events: Arc<dyn EventPublisher>,
}

/// 予約コーディネーター
///
/// 予約リクエストの検証と座席ステータスのコミットを1つの原子的な単位として実行する。
///
/// # 一貫性保証
///
/// ストア全体で1つの予約ゲート（Mutex）により、
/// 検証 → コミット → 予約ID採番 → 台帳追記 の一連の処理を直列化する。
/// シアター単位・映画単位のロックは持たない。
///
/// - 同じ座席を2つの予約が確保することはない
/// - 予約IDは一意かつ厳密に増加し、台帳の順序と一致する
/// - 失敗時は座席・予約ID・台帳のいずれも変更されない
///
/// イベント配信はゲートを解放した後に行う。
pub struct ReservationCoordinator {
    deps: ServiceDependencies,
    /// 予約ゲート。次に採番する予約IDを保護する
    gate: Mutex<BookingId>,
}

impl ReservationCoordinator {
    pub fn new(deps: ServiceDependencies) -> Self {
        Self {
            deps,
            gate: Mutex::new(BookingId::first()),
        }
    }

    pub fn dependencies(&self) -> &ServiceDependencies {
        &self.deps
    }

    /// 座席を予約する
    ///
    /// ビジネスルール：
    /// - 座席リストが空でないこと
    /// - 顧客IDが空でないこと
    /// - シアターが存在し、その映画の座席コレクションがあること
    /// - 指定した座席がすべて存在し、予約可能であること（重複指定は不可）
    ///
    /// 全座席の検証が通った場合のみ、全座席を Reserved にする。
    /// 処理は同期的に完了まで実行され、内部でのリトライは行わない。
    ///
    /// # 戻り値
    /// 成功時は作成された予約
    pub fn reserve(&self, cmd: ReserveSeats) -> Result<Booking> {
        let outcome = self.commit(&cmd);

        // ゲート解放後に通知する
        match &outcome {
            Ok(booking) => {
                tracing::info!(
                    booking_id = booking.id.value(),
                    customer_id = %booking.customer_id,
                    theater_id = booking.theater_id.value(),
                    movie_id = booking.movie_id.value(),
                    seats = booking.seat_ids.len(),
                    "Booking created"
                );
                self.deps.events.publish(ReservationEvent::SeatsReserved {
                    theater_id: booking.theater_id,
                    movie_id: booking.movie_id,
                    seat_ids: booking.seat_ids.clone(),
                });
                self.deps.events.publish(ReservationEvent::BookingCreated {
                    booking: booking.clone(),
                });
            }
            Err(err) => {
                tracing::info!(
                    customer_id = %cmd.customer_id,
                    theater_id = cmd.theater_id.value(),
                    movie_id = cmd.movie_id.value(),
                    error = %err,
                    "Reservation rejected"
                );
                self.deps.events.publish(ReservationEvent::ReservationFailed {
                    reason: err.to_string(),
                });
            }
        }

        outcome
    }

    /// ゲートの内側で座席コミット、予約ID採番、台帳追記を行う
    fn commit(&self, cmd: &ReserveSeats) -> Result<Booking> {
        validate_request(cmd)?;

        // コミット中にパニックする経路はないため、ポイズン状態でもカウンタは一貫している
        let mut next_id = self.gate.lock().unwrap_or_else(PoisonError::into_inner);

        self.deps
            .inventory
            .commit_reservation(cmd.theater_id, cmd.movie_id, &cmd.seat_ids)?;

        let booking = Booking {
            id: *next_id,
            customer_id: cmd.customer_id.clone(),
            movie_id: cmd.movie_id,
            theater_id: cmd.theater_id,
            seat_ids: cmd.seat_ids.clone(),
            created_at: Utc::now(),
        };
        *next_id = next_id.next();

        self.deps.ledger.append(booking.clone());

        Ok(booking)
    }
}

/// 状態に依存しないリクエストの検証
fn validate_request(cmd: &ReserveSeats) -> Result<()> {
    if cmd.seat_ids.is_empty() {
        return Err(ReservationError::InvalidRequest(
            "at least one seat is required".to_string(),
        ));
    }
    if cmd.customer_id.is_blank() {
        return Err(ReservationError::InvalidRequest(
            "customer id must not be blank".to_string(),
        ));
    }
    Ok(())
}
