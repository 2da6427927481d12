use base64::DecodeError;
use thiserror::Error;

/// Errors that can occur when scanning or decoding PEM data.
///
/// Armor handling follows RFC 7468, relaxed to accept bodies that share a
/// line with the boundary markers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No `-----BEGIN ...-----` boundary found
    #[error("missing a pre encapsulation boundary")]
    MissingPreEncapsulationBoundary,

    /// A `-----BEGIN ...-----` boundary without its matching END
    #[error("missing a post encapsulation boundary")]
    MissingPostEncapsulationBoundary,

    /// No data found between boundary markers
    #[error("missing PEM data")]
    MissingData,

    /// The label in the boundary marker is not recognized
    #[error("invalid label")]
    InvalidLabel,

    /// The BEGIN and END labels do not match
    #[error("label doesn't match")]
    LabelMissMatch,

    /// Malformed boundary marker
    #[error("invalid encapsulation boundary")]
    InvalidEncapsulationBoundary,

    /// Failed to decode base64 data
    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),
}
