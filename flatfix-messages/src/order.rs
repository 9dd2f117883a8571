//! Order-flow message constructors.
//!
//! Thin compositions over [`Writer`]: each constructor fixes the tags its
//! message type conventionally carries and nothing more. Validation policy
//! is the writer's, not the catalog's.

use crate::FIX_VERSION;
use bytes::BytesMut;
use flatfix_core::message::MsgType;
use flatfix_core::tags;
use flatfix_core::types::{CompId, ExecType, OrdStatus, OrdType, SeqNum, Side, Timestamp};
use flatfix_tagvalue::Writer;
use rust_decimal::Decimal;

/// Parameters for a New Order Single (D).
#[derive(Debug, Clone)]
pub struct NewOrder<'a> {
    /// Client-assigned order identifier (tag 11).
    pub cl_ord_id: &'a str,
    /// Instrument symbol (tag 55).
    pub symbol: &'a str,
    /// Order side (tag 54).
    pub side: Side,
    /// Ordered quantity (tag 38).
    pub quantity: u64,
    /// Order type (tag 40).
    pub ord_type: OrdType,
    /// Limit price (tag 44); omitted from the wire when `None`.
    pub price: Option<Decimal>,
}

/// The most recent fill on an execution report.
#[derive(Debug, Clone, Copy)]
pub struct Fill {
    /// Quantity of the fill (tag 32).
    pub quantity: u64,
    /// Price of the fill (tag 31).
    pub price: f64,
}

/// Parameters for an Execution Report (8).
#[derive(Debug, Clone)]
pub struct Execution<'a> {
    /// Venue-assigned order identifier (tag 37).
    pub order_id: &'a str,
    /// Execution identifier (tag 17).
    pub exec_id: &'a str,
    /// Client order identifier being reported on (tag 11).
    pub cl_ord_id: &'a str,
    /// Instrument symbol (tag 55).
    pub symbol: &'a str,
    /// Order side (tag 54).
    pub side: Side,
    /// Current order status (tag 39).
    pub ord_status: OrdStatus,
    /// What this report communicates (tag 150).
    pub exec_type: ExecType,
    /// Ordered quantity (tag 38).
    pub order_qty: u64,
    /// Cumulative filled quantity (tag 14).
    pub cum_qty: u64,
    /// Open quantity remaining (tag 151).
    pub leaves_qty: u64,
    /// Average fill price (tag 6), emitted at 4-digit precision.
    pub avg_px: f64,
    /// Most recent fill (tags 32/31); omitted from the wire when `None`.
    pub last_fill: Option<Fill>,
}

/// Parameters for an Order Cancel Request (F).
#[derive(Debug, Clone)]
pub struct CancelRequest<'a> {
    /// ClOrdID of the order to cancel (tag 41).
    pub orig_cl_ord_id: &'a str,
    /// Identifier of this cancel request (tag 11).
    pub cl_ord_id: &'a str,
    /// Instrument symbol (tag 55).
    pub symbol: &'a str,
    /// Order side (tag 54).
    pub side: Side,
}

/// Builds a New Order Single (D) message.
#[must_use]
pub fn new_order_single(
    sender: &CompId,
    target: &CompId,
    seq_num: SeqNum,
    order: &NewOrder<'_>,
) -> BytesMut {
    let mut writer = Writer::new(FIX_VERSION);
    writer
        .set_msg_type(MsgType::NewOrderSingle)
        .set_sender(sender)
        .set_target(target)
        .set_seq_num(seq_num)
        .put_str(tags::CL_ORD_ID, order.cl_ord_id)
        // Automated execution, no broker intervention.
        .put_char(tags::HANDL_INST, '1')
        .put_str(tags::SYMBOL, order.symbol)
        .put_char(tags::SIDE, order.side.as_char())
        .put_str(
            tags::TRANSACT_TIME,
            Timestamp::now().format_millis().as_str(),
        )
        .put_uint(tags::ORDER_QTY, order.quantity)
        .put_char(tags::ORD_TYPE, order.ord_type.as_char());
    if let Some(price) = order.price {
        writer.put_decimal(tags::PRICE, price);
    }
    writer.finish()
}

/// Builds an Execution Report (8) message.
#[must_use]
pub fn execution_report(
    sender: &CompId,
    target: &CompId,
    seq_num: SeqNum,
    execution: &Execution<'_>,
) -> BytesMut {
    let mut writer = Writer::new(FIX_VERSION);
    writer
        .set_msg_type(MsgType::ExecutionReport)
        .set_sender(sender)
        .set_target(target)
        .set_seq_num(seq_num)
        .put_str(tags::ORDER_ID, execution.order_id)
        .put_str(tags::EXEC_ID, execution.exec_id)
        .put_str(tags::CL_ORD_ID, execution.cl_ord_id)
        .put_char(tags::EXEC_TYPE, execution.exec_type.as_char())
        .put_char(tags::ORD_STATUS, execution.ord_status.as_char())
        .put_str(tags::SYMBOL, execution.symbol)
        .put_char(tags::SIDE, execution.side.as_char())
        .put_uint(tags::ORDER_QTY, execution.order_qty)
        .put_uint(tags::CUM_QTY, execution.cum_qty)
        .put_uint(tags::LEAVES_QTY, execution.leaves_qty)
        .put_float(tags::AVG_PX, execution.avg_px, 4);
    if let Some(fill) = execution.last_fill {
        writer
            .put_uint(tags::LAST_QTY, fill.quantity)
            .put_float(tags::LAST_PX, fill.price, 4);
    }
    writer.finish()
}

/// Builds an Order Cancel Request (F) message.
#[must_use]
pub fn order_cancel_request(
    sender: &CompId,
    target: &CompId,
    seq_num: SeqNum,
    cancel: &CancelRequest<'_>,
) -> BytesMut {
    let mut writer = Writer::new(FIX_VERSION);
    writer
        .set_msg_type(MsgType::OrderCancelRequest)
        .set_sender(sender)
        .set_target(target)
        .set_seq_num(seq_num)
        .put_str(tags::ORIG_CL_ORD_ID, cancel.orig_cl_ord_id)
        .put_str(tags::CL_ORD_ID, cancel.cl_ord_id)
        .put_str(tags::SYMBOL, cancel.symbol)
        .put_char(tags::SIDE, cancel.side.as_char())
        .put_str(
            tags::TRANSACT_TIME,
            Timestamp::now().format_millis().as_str(),
        );
    writer.finish()
}
