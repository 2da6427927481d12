use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("ASN.1 error: {0}")]
    Asn1(#[from] asn1::error::Error),

    #[error("Invalid PEM: {0}")]
    InvalidPem(#[from] pem::error::Error),

    #[error("Invalid DER: {0}")]
    InvalidDer(#[from] der::error::Error),

    #[error("expected SEQUENCE for {0}")]
    ExpectedSequence(&'static str),

    #[error("expected {expected} elements, got {actual}")]
    InvalidElementCount {
        expected: &'static str,
        actual: usize,
    },

    #[error("expected INTEGER for {field}")]
    ExpectedInteger { field: &'static str },

    #[error("Invalid version: {0}")]
    InvalidVersion(i64),

    /// otherPrimeInfos is never parsed; version 1 keys are refused rather
    /// than silently truncated to two primes
    #[error("multi-prime RSA keys are not supported")]
    MultiPrimeUnsupported,

    #[error("empty ASN1Object")]
    EmptyAsn1Object,

    #[error("trailing data after key structure")]
    TrailingData,
}

pub type Result<T> = std::result::Result<T, Error>;
