//! Permissive tag=value message reader.
//!
//! The reader decodes one complete message's bytes into an ordered field
//! list without copying values. Boundary detection in a continuous stream is
//! the transport's job; each [`Reader::parse`] call processes exactly one
//! buffer and retains no state.
//!
//! Decoding is deliberately best-effort: a segment whose tag prefix is not a
//! valid tag number is dropped, recorded in the message's
//! [`SkippedSegment`] list, and logged at debug level. The whole decode
//! fails only when segmentation yields no fields at all or the trailer
//! checksum does not validate.

use crate::checksum;
use flatfix_core::error::DecodeError;
use flatfix_core::field::FieldRef;
use flatfix_core::message::{INLINE_FIELDS, ParsedMessage, SkippedSegment};
use flatfix_core::tags;
use memchr::{memchr, memmem};
use smallvec::SmallVec;
use tracing::debug;

/// SOH (Start of Header) delimiter terminating each field.
pub const SOH: u8 = 0x01;

/// Equals sign separating tag from value.
pub const EQUALS: u8 = b'=';

/// Key prefix of the checksum trailer field.
const TRAILER_KEY: &[u8] = b"10=";

/// Longest accepted tag prefix; anything longer cannot be a tag number.
const MAX_TAG_DIGITS: usize = 10;

/// Tag=value message reader over a single complete buffer.
#[derive(Debug, Clone, Copy)]
pub struct Reader<'a> {
    /// Input buffer holding exactly one message.
    input: &'a [u8],
    /// Whether the trailer checksum must validate.
    validate_checksum: bool,
}

impl<'a> Reader<'a> {
    /// Creates a reader for the given message bytes.
    #[inline]
    #[must_use]
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            validate_checksum: true,
        }
    }

    /// Sets whether the trailer checksum must validate.
    ///
    /// Disabling this turns the reader into a pure segmenter; the decoded
    /// fields of an unvalidated message are untrusted.
    #[inline]
    #[must_use]
    pub const fn with_checksum_validation(mut self, validate: bool) -> Self {
        self.validate_checksum = validate;
        self
    }

    /// Decodes the buffer into an ordered field list.
    ///
    /// # Errors
    /// Returns [`DecodeError::Empty`] when segmentation produces no fields,
    /// and a checksum error when validation is enabled and the trailer is
    /// missing, malformed, or does not match the received bytes.
    pub fn parse(&self) -> Result<ParsedMessage<'a>, DecodeError> {
        let mut fields: SmallVec<[FieldRef<'a>; INLINE_FIELDS]> = SmallVec::new();
        let mut skipped: Vec<SkippedSegment<'a>> = Vec::new();

        let mut pos = 0;
        while pos < self.input.len() {
            let rest = &self.input[pos..];
            let (segment, advance) = match memchr(SOH, rest) {
                Some(soh) => (&rest[..soh], soh + 1),
                // Trailing segment without a delimiter runs to end of input.
                None => (rest, rest.len()),
            };

            if !segment.is_empty() {
                match split_field(segment) {
                    Some(field) => fields.push(field),
                    None => {
                        debug!(offset = pos, len = segment.len(), "dropping segment");
                        skipped.push(SkippedSegment {
                            offset: pos,
                            bytes: segment,
                        });
                    }
                }
            }

            pos += advance;
        }

        if fields.is_empty() {
            return Err(DecodeError::Empty);
        }

        if self.validate_checksum {
            self.validate_trailer(&fields)?;
        }

        Ok(ParsedMessage::new(self.input, fields, skipped))
    }

    /// Checks the declared trailer checksum against the received bytes.
    fn validate_trailer(&self, fields: &[FieldRef<'a>]) -> Result<(), DecodeError> {
        let trailer = fields
            .iter()
            .find(|f| f.tag == tags::CHECK_SUM)
            .ok_or(DecodeError::ChecksumMissing)?;
        let declared = checksum::from_digits(trailer.value).ok_or(DecodeError::ChecksumFormat)?;

        // Sum everything before the last occurrence of the trailer key.
        let trailer_start =
            memmem::rfind(self.input, TRAILER_KEY).ok_or(DecodeError::ChecksumMissing)?;
        let calculated = checksum::compute(&self.input[..trailer_start]);

        if calculated == declared {
            Ok(())
        } else {
            Err(DecodeError::ChecksumMismatch {
                calculated,
                declared,
            })
        }
    }
}

/// Decodes one complete message with checksum validation.
///
/// Convenience wrapper over [`Reader::parse`].
///
/// # Errors
/// See [`Reader::parse`].
pub fn parse(input: &[u8]) -> Result<ParsedMessage<'_>, DecodeError> {
    Reader::new(input).parse()
}

/// Splits one segment into a field, or `None` when the tag prefix is not a
/// valid tag number (or there is no `=` at all).
fn split_field(segment: &[u8]) -> Option<FieldRef<'_>> {
    let eq = memchr(EQUALS, segment)?;
    let tag = parse_tag(&segment[..eq])?;
    Some(FieldRef::new(tag, &segment[eq + 1..]))
}

/// Parses a tag number from its ASCII prefix.
///
/// Tags are positive integers; an empty, overly long, non-digit, zero, or
/// overflowing prefix is rejected.
fn parse_tag(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() || bytes.len() > MAX_TAG_DIGITS {
        return None;
    }
    let tag = bytes.iter().try_fold(0u32, |acc, &b| {
        if b.is_ascii_digit() {
            acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
        } else {
            None
        }
    })?;
    (tag > 0).then_some(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::Writer;
    use flatfix_core::message::MsgType;
    use flatfix_core::types::CompId;

    /// Appends a correct checksum trailer to a message prefix.
    fn seal(prefix: &[u8]) -> Vec<u8> {
        let mut buf = prefix.to_vec();
        buf.extend_from_slice(b"10=");
        buf.extend_from_slice(&checksum::to_digits(checksum::compute(prefix)));
        buf.push(SOH);
        buf
    }

    #[test]
    fn parse_tag_accepts_digits_only() {
        assert_eq!(parse_tag(b"8"), Some(8));
        assert_eq!(parse_tag(b"35"), Some(35));
        assert_eq!(parse_tag(b"0038"), Some(38));
        assert_eq!(parse_tag(b""), None);
        assert_eq!(parse_tag(b"0"), None);
        assert_eq!(parse_tag(b"abc"), None);
        assert_eq!(parse_tag(b"12a"), None);
        assert_eq!(parse_tag(b"+12"), None);
        assert_eq!(parse_tag(b"99999999999"), None);
    }

    #[test]
    fn parse_well_formed_message() {
        let input = seal(b"8=FIX.4.4\x019=5\x0135=D\x01");
        let msg = parse(&input).unwrap();

        assert_eq!(msg.field_count(), 4);
        assert_eq!(msg.get(tags::BEGIN_STRING), "FIX.4.4");
        assert_eq!(msg.get_int(tags::BODY_LENGTH), 5);
        assert_eq!(msg.msg_type(), 'D');
        assert!(msg.skipped().is_empty());

        // Trailer is decoded as a regular field and stays last.
        let last = msg.fields().last().unwrap();
        assert_eq!(last.tag, tags::CHECK_SUM);
    }

    #[test]
    fn malformed_tag_is_dropped_not_fatal() {
        let input = seal(b"8=FIX.4.4\x01XX=1\x0135=D\x01");
        let msg = parse(&input).unwrap();

        assert!(msg.find(35).is_some());
        assert_eq!(msg.skipped().len(), 1);
        assert_eq!(msg.skipped()[0].bytes, b"XX=1");
        assert_eq!(msg.skipped()[0].offset, 10);
    }

    #[test]
    fn segment_without_equals_is_recorded() {
        let input = b"35=D\x01junk\x01";
        let msg = Reader::new(input)
            .with_checksum_validation(false)
            .parse()
            .unwrap();

        assert_eq!(msg.field_count(), 1);
        assert_eq!(msg.skipped().len(), 1);
        assert_eq!(msg.skipped()[0].bytes, b"junk");
    }

    #[test]
    fn trailing_field_without_delimiter() {
        let input = b"35=D\x0158=hello";
        let msg = Reader::new(input)
            .with_checksum_validation(false)
            .parse()
            .unwrap();

        assert_eq!(msg.field_count(), 2);
        assert_eq!(msg.get(58), "hello");
    }

    #[test]
    fn value_may_contain_equals() {
        let input = b"58=a=b\x01";
        let msg = Reader::new(input)
            .with_checksum_validation(false)
            .parse()
            .unwrap();
        assert_eq!(msg.get(58), "a=b");
    }

    #[test]
    fn duplicate_tags_shadow_on_lookup() {
        let input = b"55=AAPL\x0155=MSFT\x01";
        let msg = Reader::new(input)
            .with_checksum_validation(false)
            .parse()
            .unwrap();

        assert_eq!(msg.get(55), "AAPL");
        assert_eq!(msg.field_count(), 2);
    }

    #[test]
    fn empty_and_garbage_inputs_fail() {
        assert_eq!(parse(b"").unwrap_err(), DecodeError::Empty);
        assert_eq!(parse(b"\x01\x01").unwrap_err(), DecodeError::Empty);
        assert_eq!(parse(b"garbage").unwrap_err(), DecodeError::Empty);
    }

    #[test]
    fn missing_trailer_fails() {
        assert_eq!(parse(b"35=D\x01").unwrap_err(), DecodeError::ChecksumMissing);
    }

    #[test]
    fn malformed_trailer_value_fails() {
        assert_eq!(
            parse(b"35=D\x0110=abc\x01").unwrap_err(),
            DecodeError::ChecksumFormat
        );
        assert_eq!(
            parse(b"35=D\x0110=42\x01").unwrap_err(),
            DecodeError::ChecksumFormat
        );
    }

    #[test]
    fn wrong_checksum_fails_with_both_values() {
        let mut input = seal(b"35=D\x0155=AAPL\x01");
        // Tamper with the declared digits.
        let len = input.len();
        input[len - 2] = if input[len - 2] == b'0' { b'1' } else { b'0' };

        match parse(&input).unwrap_err() {
            DecodeError::ChecksumMismatch {
                calculated,
                declared,
            } => assert_ne!(calculated, declared),
            other => panic!("expected checksum mismatch, got {other:?}"),
        }
    }

    #[test]
    fn validation_can_be_disabled() {
        let input = b"35=D\x0110=999\x01";
        assert!(parse(input).is_err());
        assert!(
            Reader::new(input)
                .with_checksum_validation(false)
                .parse()
                .is_ok()
        );
    }

    #[test]
    fn single_byte_corruption_is_detected() {
        let sender = CompId::new("CLIENT1").unwrap();
        let target = CompId::new("BROKER1").unwrap();
        let mut writer = Writer::new("FIX.4.4");
        writer
            .set_msg_type(MsgType::NewOrderSingle)
            .set_sender(&sender)
            .set_target(&target)
            .put_str(tags::SYMBOL, "AAPL")
            .put_uint(tags::ORDER_QTY, 1000);
        let sealed = writer.finish();

        // Corrupt one byte inside the body, leaving the trailer alone.
        let trailer_start = memmem::rfind(&sealed, TRAILER_KEY).unwrap();
        let mut corrupted = sealed.to_vec();
        let victim = trailer_start - 4;
        corrupted[victim] = corrupted[victim].wrapping_add(1);
        // Keep the SOH delimiters intact for this test.
        assert_ne!(corrupted[victim], SOH);

        assert!(parse(&sealed).is_ok());
        assert!(matches!(
            parse(&corrupted).unwrap_err(),
            DecodeError::ChecksumMismatch { .. }
        ));
    }
}
