//! PKCS#8: Private-Key Information Syntax Specification
//!
//! Implements the unencrypted [RFC 5958](https://datatracker.ietf.org/doc/html/rfc5958)
//! (Asymmetric Key Packages) structure, which obsoletes RFC 5208 (PKCS#8
//! v1.2). The wrapper tags the algorithm and carries the actual key as an
//! opaque OCTET STRING; for RSA that payload is a PKCS#1 RSAPrivateKey.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{OneAsymmetricKey, PrivateKeyInfo, Version};
