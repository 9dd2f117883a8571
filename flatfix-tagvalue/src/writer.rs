//! Tag=value message writer.
//!
//! The writer accumulates body fields in call order, then assembles the
//! canonical byte sequence on finalization: standard header fields first,
//! the computed BodyLength, the body, and the checksum trailer.
//!
//! Finalization consumes the writer. There is no hidden reset-on-build; a
//! fresh instance is required for the next message, which makes the
//! single-owner lifecycle explicit in the type system. The writer performs
//! no validation on its lenient path - [`Writer::finish`] happily emits a
//! message with a placeholder MsgType, empty routing identifiers, or
//! duplicate tags. [`Writer::try_finish`] is the validated alternative.

use crate::checksum;
use crate::reader::SOH;
use bytes::{BufMut, BytesMut};
use flatfix_core::error::EncodeError;
use flatfix_core::message::MsgType;
use flatfix_core::tags;
use flatfix_core::types::{CompId, SeqNum, Timestamp};
use rust_decimal::Decimal;

/// Builder for one outbound message.
///
/// Not safe for concurrent use; a writer is a single-owner object.
#[derive(Debug)]
pub struct Writer {
    /// Protocol version emitted as BeginString (tag 8).
    begin_string: &'static str,
    /// Message type (tag 35); lenient build falls back to Heartbeat.
    msg_type: Option<MsgType>,
    /// SenderCompID (tag 49); lenient build emits an empty value.
    sender: Option<CompId>,
    /// TargetCompID (tag 56); lenient build emits an empty value.
    target: Option<CompId>,
    /// MsgSeqNum (tag 34); defaults to 1.
    seq_num: SeqNum,
    /// SendingTime (tag 52) override; absent means now-at-finish.
    sending_time: Option<Timestamp>,
    /// Caller body fields in call order.
    body: BytesMut,
}

impl Writer {
    /// Creates a writer for the given protocol version.
    #[must_use]
    pub fn new(begin_string: &'static str) -> Self {
        Self::with_capacity(begin_string, 256)
    }

    /// Creates a writer with a pre-sized body buffer.
    #[must_use]
    pub fn with_capacity(begin_string: &'static str, capacity: usize) -> Self {
        Self {
            begin_string,
            msg_type: None,
            sender: None,
            target: None,
            seq_num: SeqNum::default(),
            sending_time: None,
            body: BytesMut::with_capacity(capacity),
        }
    }

    /// Sets the message type (tag 35).
    #[inline]
    pub fn set_msg_type(&mut self, msg_type: MsgType) -> &mut Self {
        self.msg_type = Some(msg_type);
        self
    }

    /// Sets the SenderCompID (tag 49).
    #[inline]
    pub fn set_sender(&mut self, sender: &CompId) -> &mut Self {
        self.sender = Some(sender.clone());
        self
    }

    /// Sets the TargetCompID (tag 56).
    #[inline]
    pub fn set_target(&mut self, target: &CompId) -> &mut Self {
        self.target = Some(target.clone());
        self
    }

    /// Sets the MsgSeqNum (tag 34).
    #[inline]
    pub fn set_seq_num(&mut self, seq_num: SeqNum) -> &mut Self {
        self.seq_num = seq_num;
        self
    }

    /// Pins the SendingTime (tag 52) instead of stamping now-at-finish.
    #[inline]
    pub fn set_sending_time(&mut self, sending_time: Timestamp) -> &mut Self {
        self.sending_time = Some(sending_time);
        self
    }

    /// Appends a field with raw value bytes.
    ///
    /// The value must not contain the SOH delimiter; data fields carrying
    /// arbitrary bytes are out of scope for this codec.
    pub fn put_raw(&mut self, tag: u32, value: &[u8]) -> &mut Self {
        push_field(&mut self.body, tag, value);
        self
    }

    /// Appends a field with a string value.
    #[inline]
    pub fn put_str(&mut self, tag: u32, value: &str) -> &mut Self {
        self.put_raw(tag, value.as_bytes())
    }

    /// Appends a field with a signed integer value.
    pub fn put_int(&mut self, tag: u32, value: i64) -> &mut Self {
        let mut buf = itoa::Buffer::new();
        self.put_raw(tag, buf.format(value).as_bytes())
    }

    /// Appends a field with an unsigned integer value.
    pub fn put_uint(&mut self, tag: u32, value: u64) -> &mut Self {
        let mut buf = itoa::Buffer::new();
        self.put_raw(tag, buf.format(value).as_bytes())
    }

    /// Appends a field with a single character value.
    pub fn put_char(&mut self, tag: u32, value: char) -> &mut Self {
        let mut buf = [0u8; 4];
        let s = value.encode_utf8(&mut buf);
        self.put_raw(tag, s.as_bytes())
    }

    /// Appends a field with a boolean value (Y/N).
    #[inline]
    pub fn put_bool(&mut self, tag: u32, value: bool) -> &mut Self {
        self.put_raw(tag, if value { b"Y" } else { b"N" })
    }

    /// Appends a field with a fixed-point decimal value.
    pub fn put_decimal(&mut self, tag: u32, value: Decimal) -> &mut Self {
        let s = value.to_string();
        self.put_raw(tag, s.as_bytes())
    }

    /// Appends a field with a float value at the given decimal precision.
    pub fn put_float(&mut self, tag: u32, value: f64, precision: usize) -> &mut Self {
        let s = format!("{value:.precision$}");
        self.put_raw(tag, s.as_bytes())
    }

    /// Returns the accumulated caller-body length in bytes.
    ///
    /// Synthesized header fields are not included; the emitted BodyLength
    /// value will be larger.
    #[inline]
    #[must_use]
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// Assembles the canonical message bytes, consuming the writer.
    ///
    /// Lenient: a missing MsgType falls back to the Heartbeat placeholder
    /// and missing routing identifiers encode as empty values. Nothing else
    /// is checked.
    #[must_use]
    pub fn finish(self) -> BytesMut {
        let msg_type = self.msg_type.unwrap_or_default();
        self.assemble(msg_type)
    }

    /// Assembles the canonical message bytes after checking required fields,
    /// consuming the writer.
    ///
    /// # Errors
    /// Returns [`EncodeError::MissingRequiredField`] when MsgType (35),
    /// SenderCompID (49), or TargetCompID (56) was never set.
    pub fn try_finish(self) -> Result<BytesMut, EncodeError> {
        let Some(msg_type) = self.msg_type else {
            return Err(EncodeError::MissingRequiredField {
                tag: tags::MSG_TYPE,
            });
        };
        if self.sender.is_none() {
            return Err(EncodeError::MissingRequiredField {
                tag: tags::SENDER_COMP_ID,
            });
        }
        if self.target.is_none() {
            return Err(EncodeError::MissingRequiredField {
                tag: tags::TARGET_COMP_ID,
            });
        }
        Ok(self.assemble(msg_type))
    }

    /// Header synthesis, length computation, and trailer emission.
    fn assemble(self, msg_type: MsgType) -> BytesMut {
        let sending_time = self.sending_time.unwrap_or_else(Timestamp::now);
        let sender = self.sender.as_ref().map_or("", CompId::as_str);
        let target = self.target.as_ref().map_or("", CompId::as_str);

        // Standard header-adjacent fields in fixed order, then caller fields.
        let mut full_body = BytesMut::with_capacity(self.body.len() + 96);
        push_field(&mut full_body, tags::MSG_TYPE, &[msg_type as u8]);
        push_field(&mut full_body, tags::SENDER_COMP_ID, sender.as_bytes());
        push_field(&mut full_body, tags::TARGET_COMP_ID, target.as_bytes());
        let mut seq_buf = itoa::Buffer::new();
        push_field(
            &mut full_body,
            tags::MSG_SEQ_NUM,
            seq_buf.format(self.seq_num.value()).as_bytes(),
        );
        push_field(
            &mut full_body,
            tags::SENDING_TIME,
            sending_time.format_millis().as_bytes(),
        );
        full_body.put_slice(&self.body);

        // BodyLength counts everything after its own delimiter and before
        // the trailer.
        let mut message = BytesMut::with_capacity(full_body.len() + 40);
        message.put_slice(b"8=");
        message.put_slice(self.begin_string.as_bytes());
        message.put_u8(SOH);
        let mut len_buf = itoa::Buffer::new();
        push_field(
            &mut message,
            tags::BODY_LENGTH,
            len_buf.format(full_body.len()).as_bytes(),
        );
        message.put_slice(&full_body);

        let digits = checksum::to_digits(checksum::compute(&message));
        message.put_slice(b"10=");
        message.put_slice(&digits);
        message.put_u8(SOH);

        message
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new("FIX.4.4")
    }
}

/// Appends one `tag=value` field, SOH-terminated, to a buffer.
fn push_field(buf: &mut BytesMut, tag: u32, value: &[u8]) {
    let mut tag_buf = itoa::Buffer::new();
    buf.put_slice(tag_buf.format(tag).as_bytes());
    buf.put_u8(b'=');
    buf.put_slice(value);
    buf.put_u8(SOH);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::parse;
    use flatfix_core::types::Side;
    use memchr::{memchr, memmem};

    fn comp(s: &str) -> CompId {
        CompId::new(s).unwrap()
    }

    #[test]
    fn message_layout() {
        let mut writer = Writer::new("FIX.4.4");
        writer
            .set_msg_type(MsgType::NewOrderSingle)
            .set_sender(&comp("CLIENT1"))
            .set_target(&comp("BROKER1"))
            .set_seq_num(SeqNum::new(2))
            .set_sending_time(Timestamp::from_millis(0))
            .put_str(tags::CL_ORD_ID, "ORD-001");
        let bytes = writer.finish();
        let text = String::from_utf8(bytes.to_vec()).unwrap();

        assert!(text.starts_with("8=FIX.4.4\x019="));
        assert!(text.contains("35=D\x0149=CLIENT1\x0156=BROKER1\x0134=2\x01"));
        assert!(text.contains("52=19700101-00:00:00.000\x01"));
        // Caller fields come after the synthesized header fields.
        assert!(text.find("52=").unwrap() < text.find("11=ORD-001").unwrap());
        assert!(text.ends_with("\x01"));
        assert!(text[..text.len() - 1].rfind("10=").is_some());
    }

    #[test]
    fn checksum_law() {
        let mut writer = Writer::new("FIX.4.4");
        writer
            .set_msg_type(MsgType::Logon)
            .set_sender(&comp("A"))
            .set_target(&comp("B"))
            .put_int(tags::ENCRYPT_METHOD, 0)
            .put_int(tags::HEART_BT_INT, 30);
        let bytes = writer.finish();

        let trailer_start = memmem::rfind(&bytes, b"10=").unwrap();
        let expected = checksum::compute(&bytes[..trailer_start]);
        let declared = &bytes[trailer_start + 3..trailer_start + 6];
        assert_eq!(declared, checksum::to_digits(expected).as_slice());
        // Trailer is exactly "10=" + 3 digits + SOH, and it ends the message.
        assert_eq!(trailer_start + 7, bytes.len());
    }

    #[test]
    fn body_length_law() {
        let mut writer = Writer::new("FIX.4.4");
        writer
            .set_msg_type(MsgType::ExecutionReport)
            .set_sender(&comp("BROKER"))
            .set_target(&comp("CLIENT"))
            .put_str(tags::ORDER_ID, "EXCH-12345")
            .put_float(tags::AVG_PX, 150.225, 4);
        let bytes = writer.finish();

        // Body runs from just after the BodyLength delimiter to the trailer.
        let first_soh = memchr(SOH, &bytes).unwrap();
        let second_soh = first_soh + 1 + memchr(SOH, &bytes[first_soh + 1..]).unwrap();
        let trailer_start = memmem::rfind(&bytes, b"10=").unwrap();
        let measured = trailer_start - (second_soh + 1);

        let msg = parse(&bytes).unwrap();
        assert_eq!(msg.get_int(tags::BODY_LENGTH), measured as i64);
    }

    #[test]
    fn lenient_build_uses_placeholders() {
        let bytes = Writer::new("FIX.4.4").finish();
        let msg = parse(&bytes).unwrap();

        assert_eq!(msg.msg_type(), '0');
        assert_eq!(msg.get(tags::SENDER_COMP_ID), "");
        assert_eq!(msg.get_int(tags::MSG_SEQ_NUM), 1);
    }

    #[test]
    fn validated_build_requires_routing_fields() {
        let writer = Writer::new("FIX.4.4");
        assert_eq!(
            writer.try_finish().unwrap_err(),
            EncodeError::MissingRequiredField {
                tag: tags::MSG_TYPE
            }
        );

        let mut writer = Writer::new("FIX.4.4");
        writer.set_msg_type(MsgType::Heartbeat);
        assert_eq!(
            writer.try_finish().unwrap_err(),
            EncodeError::MissingRequiredField {
                tag: tags::SENDER_COMP_ID
            }
        );

        let mut writer = Writer::new("FIX.4.4");
        writer
            .set_msg_type(MsgType::Heartbeat)
            .set_sender(&comp("A"));
        assert_eq!(
            writer.try_finish().unwrap_err(),
            EncodeError::MissingRequiredField {
                tag: tags::TARGET_COMP_ID
            }
        );

        let mut writer = Writer::new("FIX.4.4");
        writer
            .set_msg_type(MsgType::Heartbeat)
            .set_sender(&comp("A"))
            .set_target(&comp("B"));
        assert!(writer.try_finish().is_ok());
    }

    #[test]
    fn typed_field_setters() {
        let mut writer = Writer::new("FIX.4.2");
        writer
            .set_msg_type(MsgType::NewOrderSingle)
            .set_sender(&comp("S"))
            .set_target(&comp("T"))
            .put_char(tags::SIDE, Side::Buy.as_char())
            .put_bool(141, true)
            .put_decimal(tags::PRICE, Decimal::new(15025, 2))
            .put_float(tags::AVG_PX, 150.2, 4)
            .put_int(tags::CUM_QTY, -1)
            .put_uint(tags::ORDER_QTY, 1000);
        let bytes = writer.finish();
        let text = String::from_utf8(bytes.to_vec()).unwrap();

        assert!(text.starts_with("8=FIX.4.2\x01"));
        assert!(text.contains("54=1\x01"));
        assert!(text.contains("141=Y\x01"));
        assert!(text.contains("44=150.25\x01"));
        assert!(text.contains("6=150.2000\x01"));
        assert!(text.contains("14=-1\x01"));
        assert!(text.contains("38=1000\x01"));
    }

    #[test]
    fn duplicate_tags_are_not_rejected() {
        let mut writer = Writer::new("FIX.4.4");
        writer
            .set_msg_type(MsgType::NewOrderSingle)
            .put_str(tags::SYMBOL, "AAPL")
            .put_str(tags::SYMBOL, "MSFT");
        assert!(writer.body_len() > 0);
        let bytes = writer.finish();

        let msg = parse(&bytes).unwrap();
        assert_eq!(msg.get(tags::SYMBOL), "AAPL");
        assert_eq!(
            msg.fields().filter(|f| f.tag == tags::SYMBOL).count(),
            2
        );
    }

    #[test]
    fn round_trip_preserves_caller_fields() {
        let mut writer = Writer::new("FIX.4.4");
        writer
            .set_msg_type(MsgType::NewOrderSingle)
            .set_sender(&comp("CLIENT1"))
            .set_target(&comp("BROKER1"))
            .set_seq_num(SeqNum::new(2))
            .put_str(tags::CL_ORD_ID, "ORD-001")
            .put_char(tags::HANDL_INST, '1')
            .put_str(tags::SYMBOL, "AAPL")
            .put_char(tags::SIDE, Side::Buy.as_char())
            .put_uint(tags::ORDER_QTY, 1000)
            .put_decimal(tags::PRICE, Decimal::new(15025, 2));
        let bytes = writer.finish();

        let msg = parse(&bytes).unwrap();
        assert_eq!(msg.get(tags::CL_ORD_ID), "ORD-001");
        assert_eq!(msg.get(tags::SYMBOL), "AAPL");
        assert_eq!(msg.get_char(tags::SIDE), '1');
        assert_eq!(msg.get_uint(tags::ORDER_QTY), 1000);
        assert_eq!(msg.get_float(tags::PRICE), 150.25);
        assert_eq!(msg.get(tags::SENDER_COMP_ID), "CLIENT1");
        assert_eq!(msg.get_int(tags::MSG_SEQ_NUM), 2);
        assert!(msg.skipped().is_empty());

        // Exactly one trailer field, in last position.
        assert_eq!(
            msg.fields().filter(|f| f.tag == tags::CHECK_SUM).count(),
            1
        );
        assert_eq!(msg.fields().last().unwrap().tag, tags::CHECK_SUM);
    }
}
