//! # kagi
//!
//! Core traits for the kagi key-loading toolkit.
//!
//! Every step of the loading pipeline is a typed conversion:
//!
//! ```text
//! &str → Pem → Vec<u8> → Der → ASN1Object → RSAPrivateKey
//! ```
//!
//! Each arrow is an implementation of the [`decoder::Decoder`] trait, and
//! the reverse direction (re-armoring a key) uses [`encoder::Encoder`].
//! The marker traits `DecodableFrom`/`EncodableTo` pin down which
//! conversions exist, so an invalid step is a compile error rather than a
//! runtime surprise.

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
