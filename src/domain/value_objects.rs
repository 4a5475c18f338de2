use serde::{Deserialize, Serialize};
use std::fmt;

/// 座席ラベルの接頭辞（全座席が1列目 "A"）
pub const SEAT_ROW_PREFIX: &str = "A";

/// 映画ID - カタログ内の映画への参照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(u32);

impl MovieId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// シアターID - カタログ内のシアター（上映ホール）への参照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TheaterId(u32);

impl TheaterId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TheaterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 予約ID - コミット時に採番される単調増加の連番
///
/// 不変条件：ストアの生存期間中、一意かつ厳密に増加する。
/// 採番は予約ゲートの内側でのみ行われる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(u64);

impl BookingId {
    /// 最初に採番されるID
    pub fn first() -> Self {
        Self(1)
    }

    pub fn from_value(value: u64) -> Self {
        Self(value)
    }

    /// 次のIDを返す
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 座席ID - "A1" 形式のラベル
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(String);

impl SeatId {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// 座席番号（1始まり）からラベルを生成する
    pub fn numbered(number: u32) -> Self {
        Self(format!("{}{}", SEAT_ROW_PREFIX, number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeatId {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for SeatId {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// 顧客ID - 予約者の識別子（CLIでは入力された名前）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 空白のみ、または空文字か
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CustomerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_id_numbered() {
        assert_eq!(SeatId::numbered(1).as_str(), "A1");
        assert_eq!(SeatId::numbered(20).as_str(), "A20");
    }

    #[test]
    fn test_booking_id_next_is_strictly_greater() {
        let first = BookingId::first();
        assert_eq!(first.value(), 1);
        assert!(first.next() > first);
        assert_eq!(first.next().value(), 2);
    }

    #[test]
    fn test_customer_id_blank() {
        assert!(CustomerId::new("").is_blank());
        assert!(CustomerId::new("   ").is_blank());
        assert!(!CustomerId::new("Alice").is_blank());
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&SeatId::numbered(3)).unwrap();
        assert_eq!(json, "\"A3\"");

        let json = serde_json::to_string(&TheaterId::new(2)).unwrap();
        assert_eq!(json, "2");
    }
}
