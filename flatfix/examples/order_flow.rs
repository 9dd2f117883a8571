//! End-to-end order flow through the codec: logon, new order, acknowledge,
//! partial fill, full fill, cancel request.
//!
//! Run with `cargo run --example order_flow`.

use flatfix::prelude::*;
use rust_decimal::Decimal;
use tracing::info;

/// Renders a wire message with SOH shown as `|`.
fn render(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b == SOH { '|' } else { b as char })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let client = CompId::new("CLIENT1").expect("comp id fits");
    let broker = CompId::new("BROKER1").expect("comp id fits");

    // 1. Client logs on.
    let bytes = logon(&client, &broker, SeqNum::new(1), 30);
    info!("client -> broker: {}", render(&bytes));
    let msg = parse(&bytes)?;
    info!(
        "parsed logon: sender={} target={} heartbeat={}s",
        msg.get(tags::SENDER_COMP_ID),
        msg.get(tags::TARGET_COMP_ID),
        msg.get_int(tags::HEART_BT_INT),
    );

    // 2. Client submits a limit order: buy 1000 AAPL @ 150.25.
    let order = NewOrder {
        cl_ord_id: "ORD-001",
        symbol: "AAPL",
        side: Side::Buy,
        quantity: 1000,
        ord_type: OrdType::Limit,
        price: Some(Decimal::new(15025, 2)),
    };
    let bytes = new_order_single(&client, &broker, SeqNum::new(2), &order);
    info!("client -> broker: {}", render(&bytes));
    let msg = parse(&bytes)?;
    info!(
        "parsed order: id={} {} x{} @ {}",
        msg.get(tags::CL_ORD_ID),
        msg.get(tags::SYMBOL),
        msg.get_int(tags::ORDER_QTY),
        msg.get_float(tags::PRICE),
    );

    // 3. Broker acknowledges.
    let ack = Execution {
        order_id: "EXCH-12345",
        exec_id: "EXEC-001",
        cl_ord_id: "ORD-001",
        symbol: "AAPL",
        side: Side::Buy,
        ord_status: OrdStatus::New,
        exec_type: ExecType::New,
        order_qty: 1000,
        cum_qty: 0,
        leaves_qty: 1000,
        avg_px: 0.0,
        last_fill: None,
    };
    let bytes = execution_report(&broker, &client, SeqNum::new(2), &ack);
    info!("broker -> client: {}", render(&bytes));

    // 4. Partial fill: 500 @ 150.20.
    let partial = Execution {
        exec_id: "EXEC-002",
        ord_status: OrdStatus::PartiallyFilled,
        exec_type: ExecType::Trade,
        cum_qty: 500,
        leaves_qty: 500,
        avg_px: 150.20,
        last_fill: Some(Fill {
            quantity: 500,
            price: 150.20,
        }),
        ..ack.clone()
    };
    let bytes = execution_report(&broker, &client, SeqNum::new(3), &partial);
    info!("broker -> client: {}", render(&bytes));
    let msg = parse(&bytes)?;
    info!(
        "parsed execution: filled={} remaining={} last {} @ {}",
        msg.get_int(tags::CUM_QTY),
        msg.get_int(tags::LEAVES_QTY),
        msg.get_int(tags::LAST_QTY),
        msg.get_float(tags::LAST_PX),
    );

    // 5. Full fill: remaining 500 @ 150.25.
    let filled = Execution {
        exec_id: "EXEC-003",
        ord_status: OrdStatus::Filled,
        exec_type: ExecType::Trade,
        cum_qty: 1000,
        leaves_qty: 0,
        avg_px: 150.225,
        last_fill: Some(Fill {
            quantity: 500,
            price: 150.25,
        }),
        ..ack.clone()
    };
    let bytes = execution_report(&broker, &client, SeqNum::new(4), &filled);
    info!("broker -> client: {}", render(&bytes));
    let msg = parse(&bytes)?;
    info!(
        "order complete: total={} avg={}",
        msg.get_int(tags::CUM_QTY),
        msg.get(tags::AVG_PX),
    );

    // 6. A cancel request for good measure.
    let cancel = CancelRequest {
        orig_cl_ord_id: "ORD-001",
        cl_ord_id: "CANCEL-001",
        symbol: "AAPL",
        side: Side::Buy,
    };
    let bytes = order_cancel_request(&client, &broker, SeqNum::new(5), &cancel);
    info!("client -> broker: {}", render(&bytes));

    Ok(())
}
