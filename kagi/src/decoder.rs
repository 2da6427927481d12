//! Decoder trait for type-safe conversions.
//!
//! A source type `T` implements `Decoder<T, D>` for each destination type
//! `D` it can be decoded into; `D` declares the pairing by implementing the
//! empty marker trait `DecodableFrom<T>`. The pattern keeps every step of
//! the PEM → DER → ASN.1 → key pipeline an explicit, checked conversion.
//!
//! ```no_run
//! use kagi::decoder::{DecodableFrom, Decoder};
//!
//! struct Armored(String);
//! struct Raw(Vec<u8>);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! impl DecodableFrom<Armored> for Raw {}
//!
//! impl Decoder<Armored, Raw> for Armored {
//!     type Error = MyError;
//!
//!     fn decode(&self) -> Result<Raw, Self::Error> {
//!         Ok(Raw(self.0.as_bytes().to_vec()))
//!     }
//! }
//! ```

/// Converts `self` (of type `T`) into a `D`.
///
/// The destination must be marked [`DecodableFrom<T>`], which constrains
/// the set of valid conversions at compile time.
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait: type `D` can be decoded from type `T`.
///
/// Has no methods; implementing it for a `(T, D)` pair is what permits the
/// corresponding [`Decoder`] implementation to exist.
pub trait DecodableFrom<T> {}
