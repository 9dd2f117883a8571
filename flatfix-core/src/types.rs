//! Support types for codec operations.
//!
//! This module provides:
//! - [`SeqNum`]: message sequence number wrapper
//! - [`Timestamp`]: UTC wall-clock with FIX millisecond formatting
//! - [`CompId`]: bounded component identifier (SenderCompID, TargetCompID)
//! - [`Side`], [`OrdType`], [`OrdStatus`], [`ExecType`]: char-valued domain
//!   enumerations

use arrayvec::ArrayString;
use chrono::{DateTime, Utc};
use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length for CompID strings in bytes.
pub const COMP_ID_MAX_LEN: usize = 32;

/// Message sequence number.
///
/// Sequence numbers start at 1 and increment per message sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct SeqNum(u64);

impl SeqNum {
    /// Creates a new sequence number.
    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw sequence number value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the next sequence number.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns true if this sequence number is valid (>= 1).
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= 1
    }
}

impl Default for SeqNum {
    fn default() -> Self {
        Self(1)
    }
}

impl From<u64> for SeqNum {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<SeqNum> for u64 {
    fn from(seq: SeqNum) -> Self {
        seq.0
    }
}

impl fmt::Display for SeqNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// UTC wall-clock timestamp with millisecond precision.
///
/// SendingTime (tag 52) and TransactTime (tag 60) carry this value formatted
/// as `YYYYMMDD-HH:MM:SS.mmm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    /// Milliseconds since Unix epoch (1970-01-01 00:00:00 UTC).
    millis_since_epoch: u64,
}

impl Timestamp {
    /// Creates a timestamp from milliseconds since Unix epoch.
    #[inline]
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self {
            millis_since_epoch: millis,
        }
    }

    /// Returns the current UTC timestamp.
    #[inline]
    #[must_use]
    pub fn now() -> Self {
        let dt = Utc::now();
        Self {
            millis_since_epoch: dt.timestamp_millis().max(0) as u64,
        }
    }

    /// Returns milliseconds since Unix epoch.
    #[inline]
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.millis_since_epoch
    }

    /// Converts to a chrono `DateTime<Utc>`.
    #[must_use]
    pub fn to_datetime(self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.millis_since_epoch as i64)
            .unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// Formats the timestamp as `YYYYMMDD-HH:MM:SS.mmm`.
    #[must_use]
    pub fn format_millis(self) -> ArrayString<21> {
        let dt = self.to_datetime();
        let mut buf = ArrayString::new();
        let _ = std::fmt::write(
            &mut buf,
            format_args!("{}", dt.format("%Y%m%d-%H:%M:%S%.3f")),
        );
        buf
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            millis_since_epoch: dt.timestamp_millis().max(0) as u64,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_millis())
    }
}

/// Component identifier for message routing.
///
/// Used for SenderCompID (tag 49) and TargetCompID (tag 56).
/// Maximum length is 32 bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct CompId(ArrayString<COMP_ID_MAX_LEN>);

impl CompId {
    /// Creates a new CompId from a string slice.
    ///
    /// Returns `None` when the string exceeds the maximum length.
    #[must_use]
    pub fn new(s: &str) -> Option<Self> {
        ArrayString::from(s).ok().map(Self)
    }

    /// Returns the CompId as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the length of the CompId in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the CompId is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for CompId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CompId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompId {
    type Err = arrayvec::CapacityError<()>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArrayString::try_from(s)
            .map(Self)
            .map_err(|_| arrayvec::CapacityError::new(()))
    }
}

/// Order side (tag 54).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order.
    Buy = b'1',
    /// Sell order.
    Sell = b'2',
}

impl Side {
    /// Creates a Side from its wire character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::Buy),
            '2' => Some(Self::Sell),
            _ => None,
        }
    }

    /// Returns the wire character for this side.
    #[must_use]
    pub const fn as_char(self) -> char {
        self as u8 as char
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Order type (tag 40).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrdType {
    /// Market order - no price.
    Market = b'1',
    /// Limit order - carries a limit price.
    Limit = b'2',
    /// Stop order.
    Stop = b'3',
}

impl OrdType {
    /// Creates an OrdType from its wire character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::Market),
            '2' => Some(Self::Limit),
            '3' => Some(Self::Stop),
            _ => None,
        }
    }

    /// Returns the wire character for this order type.
    #[must_use]
    pub const fn as_char(self) -> char {
        self as u8 as char
    }
}

impl fmt::Display for OrdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Order status (tag 39).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrdStatus {
    /// Order acknowledged, nothing filled.
    New = b'0',
    /// Part of the order has filled.
    PartiallyFilled = b'1',
    /// Order completely filled.
    Filled = b'2',
    /// Order done for the day.
    DoneForDay = b'3',
    /// Order canceled.
    Canceled = b'4',
    /// Order replaced.
    Replaced = b'5',
    /// Cancel request pending.
    PendingCancel = b'6',
    /// Order stopped.
    Stopped = b'7',
    /// Order rejected.
    Rejected = b'8',
}

impl OrdStatus {
    /// Creates an OrdStatus from its wire character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::New),
            '1' => Some(Self::PartiallyFilled),
            '2' => Some(Self::Filled),
            '3' => Some(Self::DoneForDay),
            '4' => Some(Self::Canceled),
            '5' => Some(Self::Replaced),
            '6' => Some(Self::PendingCancel),
            '7' => Some(Self::Stopped),
            '8' => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns the wire character for this status.
    #[must_use]
    pub const fn as_char(self) -> char {
        self as u8 as char
    }

    /// Returns true if the order can still trade.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::New | Self::PartiallyFilled | Self::PendingCancel)
    }
}

impl fmt::Display for OrdStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Execution report type (tag 150).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecType {
    /// Order accepted.
    New = b'0',
    /// Partial fill.
    PartialFill = b'1',
    /// Complete fill.
    Fill = b'2',
    /// Done for the day.
    DoneForDay = b'3',
    /// Cancel confirmed.
    Canceled = b'4',
    /// Replace confirmed.
    Replaced = b'5',
    /// Cancel pending.
    PendingCancel = b'6',
    /// Order rejected.
    Rejected = b'8',
    /// Trade execution.
    Trade = b'F',
}

impl ExecType {
    /// Creates an ExecType from its wire character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::New),
            '1' => Some(Self::PartialFill),
            '2' => Some(Self::Fill),
            '3' => Some(Self::DoneForDay),
            '4' => Some(Self::Canceled),
            '5' => Some(Self::Replaced),
            '6' => Some(Self::PendingCancel),
            '8' => Some(Self::Rejected),
            'F' => Some(Self::Trade),
            _ => None,
        }
    }

    /// Returns the wire character for this execution type.
    #[must_use]
    pub const fn as_char(self) -> char {
        self as u8 as char
    }
}

impl fmt::Display for ExecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_num_operations() {
        let seq = SeqNum::new(7);
        assert_eq!(seq.value(), 7);
        assert_eq!(seq.next().value(), 8);
        assert!(seq.is_valid());
        assert!(!SeqNum::new(0).is_valid());
        assert_eq!(SeqNum::default().value(), 1);
    }

    #[test]
    fn timestamp_format() {
        let ts = Timestamp::from_millis(0);
        assert_eq!(ts.format_millis().as_str(), "19700101-00:00:00.000");

        // 2025-01-20 10:30:00.123 UTC
        let ts = Timestamp::from_millis(1_737_368_200_123);
        let s = ts.format_millis();
        assert!(s.as_str().starts_with("20250120-"));
        assert!(s.as_str().ends_with(".123"));
        assert_eq!(s.len(), 21);
    }

    #[test]
    fn timestamp_roundtrip_millis() {
        let ts = Timestamp::from_millis(1_500);
        assert_eq!(ts.as_millis(), 1_500);
        assert_eq!(Timestamp::from(ts.to_datetime()), ts);
    }

    #[test]
    fn comp_id_bounds() {
        let id = CompId::new("CLIENT1").unwrap();
        assert_eq!(id.as_str(), "CLIENT1");
        assert_eq!(id.len(), 7);
        assert!(!id.is_empty());

        let long = "X".repeat(COMP_ID_MAX_LEN + 1);
        assert!(CompId::new(&long).is_none());
    }

    #[test]
    fn side_chars() {
        assert_eq!(Side::from_char('1'), Some(Side::Buy));
        assert_eq!(Side::from_char('2'), Some(Side::Sell));
        assert_eq!(Side::from_char('9'), None);
        assert_eq!(Side::Buy.as_char(), '1');
        assert_eq!(Side::Sell.to_string(), "2");
    }

    #[test]
    fn ord_type_chars() {
        assert_eq!(OrdType::from_char('1'), Some(OrdType::Market));
        assert_eq!(OrdType::from_char('2'), Some(OrdType::Limit));
        assert_eq!(OrdType::Stop.as_char(), '3');
        assert_eq!(OrdType::from_char('x'), None);
    }

    #[test]
    fn ord_status_chars() {
        for status in [
            OrdStatus::New,
            OrdStatus::PartiallyFilled,
            OrdStatus::Filled,
            OrdStatus::DoneForDay,
            OrdStatus::Canceled,
            OrdStatus::Replaced,
            OrdStatus::PendingCancel,
            OrdStatus::Stopped,
            OrdStatus::Rejected,
        ] {
            assert_eq!(OrdStatus::from_char(status.as_char()), Some(status));
        }
        assert!(OrdStatus::New.is_open());
        assert!(!OrdStatus::Filled.is_open());
    }

    #[test]
    fn exec_type_chars() {
        assert_eq!(ExecType::from_char('F'), Some(ExecType::Trade));
        assert_eq!(ExecType::from_char('7'), None);
        assert_eq!(ExecType::Rejected.as_char(), '8');
    }
}
