//! Encoder trait, the reverse direction of [`crate::decoder`].
//!
//! Used when re-serializing parsed key material: ASN.1 elements back to DER
//! TLVs, DER back to raw bytes, raw bytes back into PEM armor.

/// Converts `self` (of type `T`) into an `E`.
pub trait Encoder<T, E: EncodableTo<T>> {
    /// The error type returned when encoding fails.
    type Error;

    /// Encodes `self` into type `E`.
    fn encode(&self) -> Result<E, Self::Error>;
}

/// Marker trait: type `T` can be encoded into type `E`.
pub trait EncodableTo<T> {}
