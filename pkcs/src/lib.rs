//! Private-key structure schemas.
//!
//! Two encodings are recognized, matching the PEM labels they travel under:
//! PKCS#1 `RSAPrivateKey` (RFC 8017, label `RSA PRIVATE KEY`) and PKCS#8
//! `OneAsymmetricKey` (RFC 5958, label `PRIVATE KEY`). PKCS#8 is a wrapper,
//! not a distinct key schema: its privateKey OCTET STRING is re-parsed as
//! PKCS#1 for RSA material.

pub mod algorithm;
pub mod pkcs1;
pub mod pkcs8;

pub use algorithm::AlgorithmIdentifier;
