use crate::domain::{Booking, CustomerId};
use crate::ports::booking_ledger::BookingLedger as BookingLedgerTrait;
use std::sync::{PoisonError, RwLock};

/// BookingLedgerのインメモリ実装
///
/// 追加順を保持するVecに追記するだけ。更新・削除の操作は持たない。
#[derive(Default)]
pub struct BookingLedger {
    bookings: RwLock<Vec<Booking>>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingLedgerTrait for BookingLedger {
    fn append(&self, booking: Booking) {
        self.bookings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(booking);
    }

    fn for_customer(&self, customer_id: &CustomerId) -> Vec<Booking> {
        self.bookings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|booking| &booking.customer_id == customer_id)
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.bookings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
