//! # FlatFix Core
//!
//! Core types for the FlatFix flat tag-value codec.
//!
//! This crate provides the building blocks the codec crates share:
//! - **Error types**: typed error taxonomy with `thiserror`
//! - **Field model**: zero-copy [`FieldRef`] with defensive typed views
//! - **Message view**: [`ParsedMessage`] with first-match lookups and
//!   skip diagnostics
//! - **Tag table**: well-known tag numbers as constants
//! - **Domain types**: [`SeqNum`], [`Timestamp`], [`CompId`] and the
//!   char-valued enumerations
//!
//! The field model is flat by design: repeating groups are out of scope and
//! first-match lookup silently returns the first occurrence of a duplicated
//! tag.

pub mod error;
pub mod field;
pub mod message;
pub mod tags;
pub mod types;

pub use error::{DecodeError, EncodeError, Error, Result};
pub use field::FieldRef;
pub use message::{MsgType, ParsedMessage, SkippedSegment};
pub use types::{CompId, ExecType, OrdStatus, OrdType, SeqNum, Side, Timestamp};
