use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("ASN.1 error: {0}")]
    Asn1(#[from] asn1::error::Error),

    #[error("Invalid PEM: {0}")]
    InvalidPem(#[from] pem::error::Error),

    #[error("Invalid DER: {0}")]
    InvalidDer(#[from] der::error::Error),

    #[error("Invalid version: {0}")]
    InvalidVersion(i64),

    #[error("expected SEQUENCE for OneAsymmetricKey")]
    ExpectedSequence,

    #[error("OneAsymmetricKey must have at least 3 elements, got {0}")]
    InvalidElementCount(usize),

    #[error("expected INTEGER for version")]
    ExpectedVersionInteger,

    #[error("privateKey must be OCTET STRING")]
    ExpectedOctetString,

    #[error("invalid algorithm identifier: {0}")]
    Algorithm(#[from] crate::algorithm::Error),

    /// The wrapped privateKey payload failed to parse as PKCS#1
    #[error("inner key structure: {0}")]
    Pkcs1(#[from] crate::pkcs1::Error),

    #[error("empty ASN1Object")]
    EmptyAsn1Object,

    #[error("trailing data after key structure")]
    TrailingData,
}
