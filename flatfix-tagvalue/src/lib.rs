//! # FlatFix Tag-Value
//!
//! Tag=value message reader and writer for the FlatFix codec.
//!
//! The wire format is a flat sequence of `tag=value` pairs, each terminated
//! by the SOH (0x01) delimiter: `8=<version>` then `9=<body length>` then
//! body fields then `10=<checksum>`. The codec works on one complete
//! message's bytes at a time; framing and boundary detection belong to the
//! transport layer.
//!
//! ## Components
//!
//! - [`Reader`]: permissive decoder with checksum validation and skip
//!   diagnostics
//! - [`Writer`]: consuming builder that synthesizes header, BodyLength, and
//!   trailer
//! - [`checksum`]: the trailer arithmetic both sides share

pub mod checksum;
pub mod reader;
pub mod writer;

pub use reader::{EQUALS, Reader, SOH, parse};
pub use writer::Writer;
