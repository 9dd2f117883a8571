//! Administrative message constructors.

use crate::FIX_VERSION;
use bytes::BytesMut;
use flatfix_core::message::MsgType;
use flatfix_core::tags;
use flatfix_core::types::{CompId, SeqNum};
use flatfix_tagvalue::Writer;

/// Builds a Logon (A) message.
///
/// Carries EncryptMethod 0 (no encryption) and the proposed heartbeat
/// interval in seconds.
#[must_use]
pub fn logon(sender: &CompId, target: &CompId, seq_num: SeqNum, heartbeat_secs: u32) -> BytesMut {
    let mut writer = Writer::new(FIX_VERSION);
    writer
        .set_msg_type(MsgType::Logon)
        .set_sender(sender)
        .set_target(target)
        .set_seq_num(seq_num)
        .put_int(tags::ENCRYPT_METHOD, 0)
        .put_uint(tags::HEART_BT_INT, u64::from(heartbeat_secs));
    writer.finish()
}

/// Builds a Logout (5) message, optionally carrying a reason text.
#[must_use]
pub fn logout(
    sender: &CompId,
    target: &CompId,
    seq_num: SeqNum,
    reason: Option<&str>,
) -> BytesMut {
    let mut writer = Writer::new(FIX_VERSION);
    writer
        .set_msg_type(MsgType::Logout)
        .set_sender(sender)
        .set_target(target)
        .set_seq_num(seq_num);
    if let Some(reason) = reason {
        writer.put_str(tags::TEXT, reason);
    }
    writer.finish()
}
