//! # FlatFix
//!
//! A flat tag=value FIX message codec for Rust.
//!
//! FlatFix decodes one complete message's bytes into typed, queryable fields
//! with integrity checking, and assembles header, body, and trailer into a
//! canonical byte-exact message. Transport framing and session behavior are
//! deliberately out of scope: the codec is handed one message at a time and
//! hands back one message at a time.
//!
//! ## Quick Start
//!
//! ```rust
//! use flatfix::prelude::*;
//!
//! let sender = CompId::new("CLIENT1").unwrap();
//! let target = CompId::new("BROKER1").unwrap();
//!
//! let mut writer = Writer::new("FIX.4.4");
//! writer
//!     .set_msg_type(MsgType::NewOrderSingle)
//!     .set_sender(&sender)
//!     .set_target(&target)
//!     .put_str(tags::SYMBOL, "AAPL")
//!     .put_uint(tags::ORDER_QTY, 1000);
//! let bytes = writer.finish();
//!
//! let msg = parse(&bytes).unwrap();
//! assert_eq!(msg.get(tags::SYMBOL), "AAPL");
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: field model, tag table, domain types, error taxonomy
//! - [`tagvalue`]: the reader, the writer, and the checksum arithmetic
//! - [`messages`]: domain message constructors over the writer

pub mod core {
    //! Field model, tag table, domain types, and error taxonomy.
    pub use flatfix_core::*;
}

pub mod tagvalue {
    //! Tag=value reader, writer, and checksum arithmetic.
    pub use flatfix_tagvalue::*;
}

pub mod messages {
    //! Domain message constructors.
    pub use flatfix_messages::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use flatfix_core::{
        CompId, DecodeError, EncodeError, Error, ExecType, FieldRef, MsgType, OrdStatus, OrdType,
        ParsedMessage, Result, SeqNum, Side, SkippedSegment, Timestamp, tags,
    };

    pub use flatfix_tagvalue::{Reader, SOH, Writer, parse};

    pub use flatfix_messages::{
        CancelRequest, Execution, Fill, NewOrder, execution_report, logon, logout,
        new_order_single, order_cancel_request,
    };
}
