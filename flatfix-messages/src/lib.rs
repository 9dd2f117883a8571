//! # FlatFix Messages
//!
//! Domain message constructors over the FlatFix writer.
//!
//! Each constructor is a thin composition: it fixes which tags a message
//! type conventionally carries and returns the built bytes. No independent
//! state, no validation beyond the writer's own policy.

mod admin;
mod order;

pub use admin::{logon, logout};
pub use order::{
    CancelRequest, Execution, Fill, NewOrder, execution_report, new_order_single,
    order_cancel_request,
};

/// Protocol version stamped into every catalog message.
pub const FIX_VERSION: &str = "FIX.4.4";
