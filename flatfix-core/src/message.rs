//! Message view and message-type enumeration.
//!
//! This module provides:
//! - [`MsgType`]: the message types this codec's catalog works with
//! - [`ParsedMessage`]: the ordered field list produced by the reader
//! - [`SkippedSegment`]: diagnostic record for segments the permissive
//!   reader dropped

use crate::field::FieldRef;
use crate::tags;
use num_derive::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Message type (tag 35).
///
/// Covers the administrative and order-flow messages the catalog builds.
/// The writer's lenient build falls back to the default, [`MsgType::Heartbeat`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromPrimitive,
    ToPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MsgType {
    /// Heartbeat (0) - session level.
    #[default]
    Heartbeat = b'0',
    /// Test Request (1) - session level.
    TestRequest = b'1',
    /// Resend Request (2) - session level.
    ResendRequest = b'2',
    /// Reject (3) - session level.
    Reject = b'3',
    /// Sequence Reset (4) - session level.
    SequenceReset = b'4',
    /// Logout (5) - session level.
    Logout = b'5',
    /// Execution Report (8).
    ExecutionReport = b'8',
    /// Order Cancel Reject (9).
    OrderCancelReject = b'9',
    /// Logon (A) - session level.
    Logon = b'A',
    /// New Order Single (D).
    NewOrderSingle = b'D',
    /// Order Cancel Request (F).
    OrderCancelRequest = b'F',
    /// Order Cancel/Replace Request (G).
    OrderCancelReplaceRequest = b'G',
}

impl MsgType {
    /// Creates a MsgType from its wire character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Heartbeat),
            '1' => Some(Self::TestRequest),
            '2' => Some(Self::ResendRequest),
            '3' => Some(Self::Reject),
            '4' => Some(Self::SequenceReset),
            '5' => Some(Self::Logout),
            '8' => Some(Self::ExecutionReport),
            '9' => Some(Self::OrderCancelReject),
            'A' => Some(Self::Logon),
            'D' => Some(Self::NewOrderSingle),
            'F' => Some(Self::OrderCancelRequest),
            'G' => Some(Self::OrderCancelReplaceRequest),
            _ => None,
        }
    }

    /// Returns the wire character for this message type.
    #[must_use]
    pub const fn as_char(self) -> char {
        self as u8 as char
    }

    /// Returns true if this is an administrative message.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(
            self,
            Self::Heartbeat
                | Self::TestRequest
                | Self::ResendRequest
                | Self::Reject
                | Self::SequenceReset
                | Self::Logout
                | Self::Logon
        )
    }

    /// Returns true if this is an application message.
    #[must_use]
    pub const fn is_app(self) -> bool {
        !self.is_admin()
    }
}

impl fmt::Display for MsgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A segment the reader dropped because its tag prefix was not a valid
/// tag number.
///
/// Permissive decoding is deliberate, but silent data loss is not: every
/// dropped segment is recorded here so callers can choose strict or lenient
/// handling without losing information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedSegment<'a> {
    /// Byte offset of the segment within the raw buffer.
    pub offset: usize,
    /// The raw segment bytes, delimiter excluded.
    pub bytes: &'a [u8],
}

impl fmt::Display for SkippedSegment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "skipped {} bytes at offset {}",
            self.bytes.len(),
            self.offset
        )
    }
}

/// Inline capacity of the field list; messages beyond this spill to the heap.
pub const INLINE_FIELDS: usize = 32;

/// Ordered field list decoded from one message buffer.
///
/// Field order is stream order and semantically significant. Lookups return
/// the first occurrence of a tag; duplicate tags are legal on the wire and
/// silently shadow one another here.
#[derive(Debug, Clone)]
pub struct ParsedMessage<'a> {
    /// The complete raw buffer the fields borrow from.
    raw: &'a [u8],
    /// Decoded fields in stream order.
    fields: SmallVec<[FieldRef<'a>; INLINE_FIELDS]>,
    /// Segments dropped during permissive decoding.
    skipped: Vec<SkippedSegment<'a>>,
}

impl<'a> ParsedMessage<'a> {
    /// Creates a message view from decoded parts.
    #[must_use]
    pub fn new(
        raw: &'a [u8],
        fields: SmallVec<[FieldRef<'a>; INLINE_FIELDS]>,
        skipped: Vec<SkippedSegment<'a>>,
    ) -> Self {
        Self {
            raw,
            fields,
            skipped,
        }
    }

    /// Returns the raw message buffer.
    #[inline]
    #[must_use]
    pub const fn raw(&self) -> &'a [u8] {
        self.raw
    }

    /// Returns an iterator over all fields in stream order.
    #[inline]
    pub fn fields(&self) -> impl Iterator<Item = &FieldRef<'a>> {
        self.fields.iter()
    }

    /// Returns the number of decoded fields.
    #[inline]
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns the segments dropped during decoding.
    #[inline]
    #[must_use]
    pub fn skipped(&self) -> &[SkippedSegment<'a>] {
        &self.skipped
    }

    /// Finds the first field with the given tag.
    ///
    /// This is the only lookup that distinguishes a genuinely missing field
    /// from a present field holding a zero or empty value.
    #[must_use]
    pub fn find(&self, tag: u32) -> Option<&FieldRef<'a>> {
        self.fields.iter().find(|f| f.tag == tag)
    }

    /// Returns the first value for the tag as text, or the empty string.
    #[must_use]
    pub fn get(&self, tag: u32) -> &'a str {
        self.find(tag).map_or("", FieldRef::text)
    }

    /// Returns the first value for the tag as a signed integer, or 0.
    #[must_use]
    pub fn get_int(&self, tag: u32) -> i64 {
        self.find(tag).map_or(0, FieldRef::as_int)
    }

    /// Returns the first value for the tag as an unsigned integer, or 0.
    #[must_use]
    pub fn get_uint(&self, tag: u32) -> u64 {
        self.find(tag).map_or(0, FieldRef::as_uint)
    }

    /// Returns the first value for the tag as a float, or 0.0.
    #[must_use]
    pub fn get_float(&self, tag: u32) -> f64 {
        self.find(tag).map_or(0.0, FieldRef::as_float)
    }

    /// Returns the first value for the tag as a decimal, or zero.
    #[must_use]
    pub fn get_decimal(&self, tag: u32) -> Decimal {
        self.find(tag).map_or(Decimal::ZERO, |f| f.as_decimal())
    }

    /// Returns the first value for the tag as a character, or `'\0'`.
    #[must_use]
    pub fn get_char(&self, tag: u32) -> char {
        self.find(tag).map_or('\0', FieldRef::as_char)
    }

    /// Returns the message type character (tag 35), or `'\0'`.
    #[must_use]
    pub fn msg_type(&self) -> char {
        self.get_char(tags::MSG_TYPE)
    }
}
