//! Error types for ASN.1 parsing and encoding.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur during ASN.1 parsing and encoding operations.
#[derive(Debug, Error)]
pub enum Error {
    // Integer errors
    #[error("INTEGER: no data")]
    IntegerNoData,

    #[error("INTEGER: value out of range for i64")]
    IntegerOutOfRangeI64,

    #[error("INTEGER: value out of range for u64")]
    IntegerOutOfRangeU64,

    #[error("parse int error: {0}")]
    ParseInt(ParseIntError),

    // ObjectIdentifier errors
    #[error("OBJECT IDENTIFIER: no data")]
    ObjectIdentifierNoData,

    #[error("OBJECT IDENTIFIER: incomplete encoding")]
    ObjectIdentifierIncompleteEncoding,

    #[error("OBJECT IDENTIFIER: too few components (need at least 2)")]
    ObjectIdentifierTooFewComponents,

    // BitString errors
    #[error("BIT STRING: no data")]
    BitStringNoData,

    #[error("BIT STRING: unused bits {0} out of range (must be 0-7)")]
    BitStringUnusedBitsOutOfRange(u8),

    // NULL errors
    #[error("NULL: contents must be empty")]
    NullWithData,

    // Context-specific errors
    #[error("invalid context-specific value: {slot}, {msg}")]
    InvalidContextSpecific { slot: u8, msg: String },

    // DER errors
    #[error("invalid DER encoding: {0}")]
    FailedToDecodeDer(#[source] der::error::Error),

    // Element errors
    #[error("element: cannot encode {0}")]
    ElementCannotEncode(&'static str),
}
