//! Well-known FIX tag numbers.
//!
//! Read-only, process-wide metadata: every constant here maps a domain name
//! to its wire tag. Lookup code should reference these constants rather than
//! scattering numeric literals through call sites.

/// AvgPx (6) - average fill price.
pub const AVG_PX: u32 = 6;
/// BeginString (8) - protocol version, first field of every message.
pub const BEGIN_STRING: u32 = 8;
/// BodyLength (9) - byte count of the message body.
pub const BODY_LENGTH: u32 = 9;
/// CheckSum (10) - modulo-256 additive checksum, always the last field.
pub const CHECK_SUM: u32 = 10;
/// ClOrdID (11) - client-assigned order identifier.
pub const CL_ORD_ID: u32 = 11;
/// CumQty (14) - cumulative filled quantity.
pub const CUM_QTY: u32 = 14;
/// ExecID (17) - execution identifier.
pub const EXEC_ID: u32 = 17;
/// HandlInst (21) - order handling instruction.
pub const HANDL_INST: u32 = 21;
/// LastPx (31) - price of the most recent fill.
pub const LAST_PX: u32 = 31;
/// LastQty (32) - quantity of the most recent fill.
pub const LAST_QTY: u32 = 32;
/// MsgSeqNum (34) - message sequence number.
pub const MSG_SEQ_NUM: u32 = 34;
/// MsgType (35) - message type discriminator.
pub const MSG_TYPE: u32 = 35;
/// OrderID (37) - venue-assigned order identifier.
pub const ORDER_ID: u32 = 37;
/// OrderQty (38) - ordered quantity.
pub const ORDER_QTY: u32 = 38;
/// OrdStatus (39) - current order status.
pub const ORD_STATUS: u32 = 39;
/// OrdType (40) - order type.
pub const ORD_TYPE: u32 = 40;
/// OrigClOrdID (41) - ClOrdID of the order being amended or canceled.
pub const ORIG_CL_ORD_ID: u32 = 41;
/// Price (44) - limit price.
pub const PRICE: u32 = 44;
/// SenderCompID (49) - message originator.
pub const SENDER_COMP_ID: u32 = 49;
/// SendingTime (52) - UTC transmission timestamp.
pub const SENDING_TIME: u32 = 52;
/// Side (54) - order side.
pub const SIDE: u32 = 54;
/// Symbol (55) - instrument symbol.
pub const SYMBOL: u32 = 55;
/// TargetCompID (56) - message recipient.
pub const TARGET_COMP_ID: u32 = 56;
/// Text (58) - free-form text.
pub const TEXT: u32 = 58;
/// TimeInForce (59) - order lifetime qualifier.
pub const TIME_IN_FORCE: u32 = 59;
/// TransactTime (60) - business transaction timestamp.
pub const TRANSACT_TIME: u32 = 60;
/// EncryptMethod (98) - encryption scheme, 0 for none.
pub const ENCRYPT_METHOD: u32 = 98;
/// HeartBtInt (108) - heartbeat interval in seconds.
pub const HEART_BT_INT: u32 = 108;
/// ExecType (150) - execution report type.
pub const EXEC_TYPE: u32 = 150;
/// LeavesQty (151) - open quantity remaining.
pub const LEAVES_QTY: u32 = 151;
