use asn1::{Element, ObjectIdentifier};
use kagi::decoder::{DecodableFrom, Decoder};
use kagi::encoder::{EncodableTo, Encoder};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("AlgorithmIdentifier must be a SEQUENCE")]
    ExpectedSequence,

    #[error("AlgorithmIdentifier must have 1 or 2 elements, got {0}")]
    InvalidElementCount(usize),

    #[error("algorithm must be an OBJECT IDENTIFIER")]
    ExpectedObjectIdentifier,
}

/*
RFC 5280:

AlgorithmIdentifier ::= SEQUENCE {
    algorithm   OBJECT IDENTIFIER,
    parameters  ANY DEFINED BY algorithm OPTIONAL
}
*/

/// Algorithm tag carried by a PKCS#8 wrapper.
///
/// The identifier is required to be present and well-formed; which
/// algorithm it names is not enforced here, matching the scope of the key
/// loader (the caller can compare against [`OID_RSA_ENCRYPTION`] if it
/// cares).
///
/// [`OID_RSA_ENCRYPTION`]: AlgorithmIdentifier::OID_RSA_ENCRYPTION
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmIdentifier {
    pub algorithm: ObjectIdentifier,
    pub parameters: Option<Element>,
}

impl AlgorithmIdentifier {
    pub const OID_RSA_ENCRYPTION: &'static str = "1.2.840.113549.1.1.1";

    pub fn new(algorithm: ObjectIdentifier) -> Self {
        AlgorithmIdentifier {
            algorithm,
            parameters: None,
        }
    }

    pub fn new_with_params(algorithm: ObjectIdentifier, parameters: Element) -> Self {
        AlgorithmIdentifier {
            algorithm,
            parameters: Some(parameters),
        }
    }
}

impl DecodableFrom<Element> for AlgorithmIdentifier {}

impl Decoder<Element, AlgorithmIdentifier> for Element {
    type Error = Error;

    fn decode(&self) -> Result<AlgorithmIdentifier, Self::Error> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence);
        };
        let (oid_element, parameters) = match elements.as_slice() {
            [oid] => (oid, None),
            [oid, params] => (oid, Some(params.clone())),
            _ => return Err(Error::InvalidElementCount(elements.len())),
        };
        let Element::ObjectIdentifier(algorithm) = oid_element else {
            return Err(Error::ExpectedObjectIdentifier);
        };
        Ok(AlgorithmIdentifier {
            algorithm: algorithm.clone(),
            parameters,
        })
    }
}

impl EncodableTo<AlgorithmIdentifier> for Element {}

impl Encoder<AlgorithmIdentifier, Element> for AlgorithmIdentifier {
    type Error = Error;

    fn encode(&self) -> Result<Element, Self::Error> {
        let mut elements = vec![Element::ObjectIdentifier(self.algorithm.clone())];
        if let Some(params) = &self.parameters {
            elements.push(params.clone());
        }
        Ok(Element::Sequence(elements))
    }
}
