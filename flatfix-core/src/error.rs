//! Error types for the FlatFix codec.
//!
//! Decode failures are reported as values, never as panics: the reader hands
//! back a [`DecodeError`] and the caller decides what to do with the rejected
//! buffer. The writer is lenient by default and only produces an
//! [`EncodeError`] from its validated build path.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type covering both codec directions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error during message decoding.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error during message encoding.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}

/// Errors that make a decoded buffer unusable.
///
/// A malformed tag prefix inside the buffer is *not* an error: the reader
/// drops the segment and records it as a diagnostic instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Segmentation produced no fields at all.
    #[error("no fields in message")]
    Empty,

    /// No checksum trailer was found in the buffer.
    #[error("missing checksum field (tag 10)")]
    ChecksumMissing,

    /// The checksum field value is not a zero-padded 3-digit decimal.
    #[error("checksum value is not a 3-digit decimal")]
    ChecksumFormat,

    /// Calculated and declared checksums disagree.
    ///
    /// The field list behind this error may be non-empty but must be treated
    /// as untrusted.
    #[error("checksum mismatch: calculated {calculated}, declared {declared}")]
    ChecksumMismatch {
        /// Checksum computed over the received bytes.
        calculated: u8,
        /// Checksum carried in the trailer field.
        declared: u8,
    },
}

/// Errors from the validated build path of the writer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// A field the validated build requires was never set.
    #[error("missing required field: tag {tag}")]
    MissingRequiredField {
        /// The tag number of the missing field.
        tag: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_display() {
        let err = DecodeError::ChecksumMismatch {
            calculated: 17,
            declared: 171,
        };
        assert_eq!(
            err.to_string(),
            "checksum mismatch: calculated 17, declared 171"
        );
        assert_eq!(DecodeError::Empty.to_string(), "no fields in message");
    }

    #[test]
    fn encode_error_display() {
        let err = EncodeError::MissingRequiredField { tag: 35 };
        assert_eq!(err.to_string(), "missing required field: tag 35");
    }

    #[test]
    fn error_from_parts() {
        let err: Error = DecodeError::ChecksumMissing.into();
        assert!(matches!(err, Error::Decode(DecodeError::ChecksumMissing)));

        let err: Error = EncodeError::MissingRequiredField { tag: 49 }.into();
        assert!(matches!(err, Error::Encode(_)));
    }
}
