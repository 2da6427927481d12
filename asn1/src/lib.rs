use std::{fmt::Display, str::FromStr};

use der::{Der, Tag, Tlv, UniversalTag};
use error::Error;
use kagi::decoder::{DecodableFrom, Decoder};
use kagi::encoder::{EncodableTo, Encoder};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ASN1Object {
    elements: Vec<Element>,
}

impl ASN1Object {
    pub fn new(elements: Vec<Element>) -> Self {
        ASN1Object { elements }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

impl DecodableFrom<Der> for ASN1Object {}

impl Decoder<Der, ASN1Object> for Der {
    type Error = Error;

    fn decode(&self) -> Result<ASN1Object, Error> {
        let mut elements = Vec::new();
        for tlv in self.elements() {
            elements.push(Element::try_from(tlv)?);
        }
        Ok(ASN1Object { elements })
    }
}

impl EncodableTo<ASN1Object> for Der {}

impl Encoder<ASN1Object, Der> for ASN1Object {
    type Error = Error;

    fn encode(&self) -> Result<Der, Self::Error> {
        let mut tlvs = Vec::new();
        for element in &self.elements {
            tlvs.push(element.encode()?);
        }
        Ok(Der::new(tlvs))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Integer(Integer),
    BitString(BitString),
    OctetString(OctetString),
    Null,
    ObjectIdentifier(ObjectIdentifier),
    Sequence(Vec<Element>),
    Set(Vec<Element>),
    ContextSpecific {
        slot: u8,
        constructed: bool,
        element: Box<Element>,
    },
}

impl TryFrom<&Tlv> for Element {
    type Error = Error;

    fn try_from(tlv: &Tlv) -> Result<Self, Self::Error> {
        match tlv.tag() {
            Tag::Universal(tag) => match tag {
                UniversalTag::Integer => match tlv.data() {
                    Some([]) | None => Err(Error::IntegerNoData),
                    Some(data) => Ok(Element::Integer(Integer::from(data))),
                },
                UniversalTag::BitString => {
                    let data = tlv.data().ok_or(Error::BitStringNoData)?;
                    Ok(Element::BitString(BitString::try_from(data)?))
                }
                UniversalTag::OctetString => {
                    let data = tlv.data().unwrap_or(&[]);
                    Ok(Element::OctetString(OctetString::from(data)))
                }
                UniversalTag::Null => match tlv.data() {
                    Some([]) | None => Ok(Element::Null),
                    Some(_) => Err(Error::NullWithData),
                },
                UniversalTag::ObjectIdentifier => {
                    let data = tlv.data().ok_or(Error::ObjectIdentifierNoData)?;
                    Ok(Element::ObjectIdentifier(ObjectIdentifier::try_from(data)?))
                }
                UniversalTag::Sequence => {
                    let mut elements = Vec::new();
                    for sub in tlv.children().unwrap_or(&[]) {
                        elements.push(Element::try_from(sub)?);
                    }
                    Ok(Element::Sequence(elements))
                }
                UniversalTag::Set => {
                    let mut elements = Vec::new();
                    for sub in tlv.children().unwrap_or(&[]) {
                        elements.push(Element::try_from(sub)?);
                    }
                    Ok(Element::Set(elements))
                }
            },
            Tag::ContextSpecific { slot, constructed } => {
                if constructed {
                    // EXPLICIT tagging: exactly one nested TLV
                    let children = tlv.children().ok_or(Error::InvalidContextSpecific {
                        slot,
                        msg: "context-specific constructed has no tlvs".to_string(),
                    })?;
                    let [child] = children else {
                        return Err(Error::InvalidContextSpecific {
                            slot,
                            msg: "context-specific constructed must have exactly one sub-tlv"
                                .to_string(),
                        });
                    };
                    Ok(Element::ContextSpecific {
                        slot,
                        constructed: true,
                        element: Box::new(Element::try_from(child)?),
                    })
                } else {
                    // IMPLICIT tagging: keep the raw data, the schema layer
                    // interprets it
                    let data = tlv.data().ok_or(Error::InvalidContextSpecific {
                        slot,
                        msg: "context-specific primitive has no data".to_string(),
                    })?;
                    Ok(Element::ContextSpecific {
                        slot,
                        constructed: false,
                        element: Box::new(Element::OctetString(OctetString::from(data))),
                    })
                }
            }
        }
    }
}

impl TryFrom<&Element> for Tlv {
    type Error = Error;

    fn try_from(element: &Element) -> Result<Self, Self::Error> {
        match element {
            Element::Integer(i) => Ok(Tlv::new_primitive(
                Tag::Universal(UniversalTag::Integer),
                i.as_bigint().to_signed_bytes_be(),
            )),
            Element::BitString(bs) => {
                let mut data = Vec::with_capacity(bs.as_bytes().len() + 1);
                data.push(bs.unused_bits());
                data.extend_from_slice(bs.as_bytes());
                Ok(Tlv::new_primitive(
                    Tag::Universal(UniversalTag::BitString),
                    data,
                ))
            }
            Element::OctetString(os) => Ok(Tlv::new_primitive(
                Tag::Universal(UniversalTag::OctetString),
                os.as_bytes().to_vec(),
            )),
            Element::Null => Ok(Tlv::new_primitive(Tag::Universal(UniversalTag::Null), vec![])),
            Element::ObjectIdentifier(oid) => Ok(Tlv::new_primitive(
                Tag::Universal(UniversalTag::ObjectIdentifier),
                Vec::try_from(oid.clone())?,
            )),
            Element::Sequence(elements) => {
                let tlvs = elements
                    .iter()
                    .map(Tlv::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Tlv::new_constructed(
                    Tag::Universal(UniversalTag::Sequence),
                    tlvs,
                ))
            }
            Element::Set(elements) => {
                let tlvs = elements
                    .iter()
                    .map(Tlv::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Tlv::new_constructed(Tag::Universal(UniversalTag::Set), tlvs))
            }
            Element::ContextSpecific {
                slot,
                constructed,
                element,
            } => {
                let tag = Tag::ContextSpecific {
                    slot: *slot,
                    constructed: *constructed,
                };
                if *constructed {
                    // EXPLICIT tagging: wrap the inner element
                    let inner = Tlv::try_from(element.as_ref())?;
                    Ok(Tlv::new_constructed(tag, vec![inner]))
                } else {
                    // IMPLICIT tagging: emit the inner element's raw contents
                    let inner = Tlv::try_from(element.as_ref())?;
                    match inner.data() {
                        Some(data) => Ok(Tlv::new_primitive(tag, data.to_vec())),
                        None => Err(Error::ElementCannotEncode(
                            "IMPLICIT tagging requires a primitive inner element",
                        )),
                    }
                }
            }
        }
    }
}

impl EncodableTo<Element> for Tlv {}

impl Encoder<Element, Tlv> for Element {
    type Error = Error;

    fn encode(&self) -> Result<Tlv, Self::Error> {
        Tlv::try_from(self)
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Integer(i) => write!(f, "Integer({})", i),
            Element::BitString(bs) => write!(f, "BitString({})", bs),
            Element::OctetString(os) => write!(f, "OctetString({})", os),
            Element::Null => write!(f, "Null"),
            Element::ObjectIdentifier(oid) => write!(f, "ObjectIdentifier({})", oid),
            Element::Sequence(seq) => write!(f, "Sequence({:?})", seq),
            Element::Set(set) => write!(f, "Set({:?})", set),
            Element::ContextSpecific {
                slot,
                constructed,
                element,
            } => write!(
                f,
                "ContextSpecific(slot: {}, constructed: {}, element: {})",
                slot, constructed, element
            ),
        }
    }
}

// ASN.1 INTEGER is a signed, arbitrary-precision value. The inner BigInt
// preserves the exact integer; no precision is ever lost between decode
// and re-encode.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Integer {
    inner: BigInt,
}

impl Integer {
    /// Returns a reference to the inner BigInt
    pub fn as_bigint(&self) -> &BigInt {
        &self.inner
    }

    /// Bit length of the magnitude (e.g. 1024 for a 1024-bit RSA modulus)
    pub fn bits(&self) -> u64 {
        self.inner.bits()
    }

    /// Converts the Integer to i64 if it fits in the range
    pub fn to_i64(&self) -> Option<i64> {
        self.inner.to_i64()
    }

    /// Converts the Integer to u64 if it fits in the range
    pub fn to_u64(&self) -> Option<u64> {
        self.inner.to_u64()
    }
}

impl Serialize for Integer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.inner.to_string())
    }
}

impl<'de> Deserialize<'de> for Integer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let inner = s.parse::<BigInt>().map_err(serde::de::Error::custom)?;
        Ok(Integer { inner })
    }
}

impl From<&[u8]> for Integer {
    fn from(value: &[u8]) -> Self {
        Integer {
            inner: BigInt::from_signed_bytes_be(value),
        }
    }
}

impl From<Vec<u8>> for Integer {
    fn from(value: Vec<u8>) -> Self {
        Integer::from(value.as_slice())
    }
}

impl From<BigInt> for Integer {
    fn from(inner: BigInt) -> Self {
        Integer { inner }
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Integer {
            inner: BigInt::from(value),
        }
    }
}

impl TryFrom<&Integer> for i64 {
    type Error = Error;

    fn try_from(value: &Integer) -> Result<Self, Self::Error> {
        value.inner.to_i64().ok_or(Error::IntegerOutOfRangeI64)
    }
}

impl TryFrom<&Integer> for u64 {
    type Error = Error;

    fn try_from(value: &Integer) -> Result<Self, Self::Error> {
        value.inner.to_u64().ok_or(Error::IntegerOutOfRangeU64)
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectIdentifier {
    inner: Vec<u64>,
}

impl TryFrom<&[u8]> for ObjectIdentifier {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(Error::ObjectIdentifierNoData);
        }

        let mut values = Vec::new();
        let first = value[0] as u64;
        values.push(first / 40);
        values.push(first % 40);

        let mut val = 0u64;
        for v in value[1..].iter() {
            val = (val << 7) | (*v as u64 & 0x7f);
            if *v & 0x80 == 0 {
                // continuation bit unset: this value is complete
                values.push(val);
                val = 0;
            }
        }
        if val != 0 {
            // leftover bits mean the last component never terminated
            return Err(Error::ObjectIdentifierIncompleteEncoding);
        }

        Ok(ObjectIdentifier { inner: values })
    }
}

impl TryFrom<Vec<u8>> for ObjectIdentifier {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl TryFrom<ObjectIdentifier> for Vec<u8> {
    type Error = Error;

    fn try_from(oid: ObjectIdentifier) -> Result<Self, Self::Error> {
        if oid.inner.len() < 2 {
            return Err(Error::ObjectIdentifierTooFewComponents);
        }

        let mut result = Vec::new();
        result.push((oid.inner[0] * 40 + oid.inner[1]) as u8);

        for v in oid.inner[2..].iter() {
            let mut encoded = Vec::new();
            let mut value = *v;
            while value > 0 {
                encoded.push(value as u8 & 0x7f);
                value >>= 7;
            }
            if encoded.is_empty() {
                encoded.push(0);
            }
            while let Some(b) = encoded.pop() {
                if !encoded.is_empty() {
                    result.push(b | 0x80);
                } else {
                    result.push(b);
                }
            }
        }

        Ok(result)
    }
}

impl FromStr for ObjectIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split('.')
            .map(|s| s.parse::<u64>().map_err(Error::ParseInt))
            .collect::<Result<Vec<u64>, Error>>()?;
        Ok(ObjectIdentifier { inner: values })
    }
}

impl Display for ObjectIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self.inner.first() {
            Some(n) => self.inner[1..]
                .iter()
                .fold(n.to_string(), |s, n| s + "." + &n.to_string()),
            None => String::new(),
        };
        write!(f, "{}", s)
    }
}

impl PartialEq<&str> for ObjectIdentifier {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl Serialize for ObjectIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ObjectIdentifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ObjectIdentifier::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// BIT STRING: the first content octet of the DER form carries the number
/// of unused bits in the final byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitString {
    unused: u8,
    data: Vec<u8>,
}

impl BitString {
    pub fn new(unused: u8, data: Vec<u8>) -> Self {
        BitString { unused, data }
    }

    pub fn unused_bits(&self) -> u8 {
        self.unused
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Total number of bits, excluding unused trailing bits
    pub fn bit_len(&self) -> usize {
        if self.data.is_empty() {
            0
        } else {
            self.data.len() * 8 - self.unused as usize
        }
    }
}

impl TryFrom<&[u8]> for BitString {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        match value.first() {
            Some(&unused) if unused <= 7 => Ok(BitString {
                unused,
                data: value[1..].to_vec(),
            }),
            Some(&unused) => Err(Error::BitStringUnusedBitsOutOfRange(unused)),
            None => Err(Error::BitStringNoData),
        }
    }
}

impl Display for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self
            .data
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<String>();
        write!(f, "{}({} bits)", s, self.bit_len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OctetString {
    inner: Vec<u8>,
}

impl OctetString {
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.inner
    }
}

impl Serialize for OctetString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let hex = self
            .inner
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<String>();
        serializer.serialize_str(&hex)
    }
}

impl<'de> Deserialize<'de> for OctetString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        if hex.len() % 2 != 0 {
            return Err(serde::de::Error::custom("hex string must have even length"));
        }
        let mut inner = Vec::with_capacity(hex.len() / 2);
        for i in (0..hex.len()).step_by(2) {
            let byte = u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| serde::de::Error::custom(format!("invalid hex string: {}", e)))?;
            inner.push(byte);
        }
        Ok(OctetString { inner })
    }
}

impl AsRef<[u8]> for OctetString {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<Vec<u8>> for OctetString {
    fn from(value: Vec<u8>) -> Self {
        OctetString { inner: value }
    }
}

impl From<&[u8]> for OctetString {
    fn from(value: &[u8]) -> Self {
        OctetString {
            inner: value.to_vec(),
        }
    }
}

/// Re-parse the contents of an OCTET STRING as a nested DER structure.
///
/// This is how PKCS#8 embeds a PKCS#1 key: the wrapper's privateKey field
/// is an opaque OCTET STRING whose payload is itself DER.
impl TryFrom<&OctetString> for ASN1Object {
    type Error = Error;

    fn try_from(value: &OctetString) -> Result<Self, Self::Error> {
        let der: Der = value.as_ref().decode().map_err(Error::FailedToDecodeDer)?;
        der.decode()
    }
}

impl Display for OctetString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self
            .inner
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<String>();
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::str::FromStr;

    use kagi::decoder::Decoder;
    use kagi::encoder::Encoder;

    use crate::{ASN1Object, BitString, Element, Integer, ObjectIdentifier, OctetString};
    use der::Der;
    use num_bigint::BigInt;

    #[rstest(
        input,
        expected,
        case(vec![0x01], "1"),
        case(vec![0x7f], "127"),
        // high bit set without padding: negative two's complement
        case(vec![0xff], "-1"),
        // leading 0x00 marks the same bits as positive
        case(vec![0x00, 0xff], "255"),
        case(vec![0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01], "9223372036854775809"),
        case(vec![0x03, 0xd4, 0x15, 0x31, 0x8e, 0x2c, 0x57, 0x1d, 0x29, 0x05, 0xfc, 0x3e, 0x05, 0x27, 0x68, 0x9d, 0x0d, 0x09], "333504890676592408951587385614406537514249")
    )]
    fn test_integer_from_signed_bytes(input: Vec<u8>, expected: &str) {
        let expected = Integer::from(BigInt::from_str(expected).unwrap());
        assert_eq!(expected, Integer::from(input));
    }

    #[rstest(
        value,
        expected_bits,
        case(0, 0),
        case(1, 1),
        case(255, 8),
        case(256, 9)
    )]
    fn test_integer_bits(value: i64, expected_bits: u64) {
        assert_eq!(expected_bits, Integer::from(value).bits());
    }

    #[rstest(
        input,
        expected_json,
        case(Integer::from(0), r#""0""#),
        case(Integer::from(255), r#""255""#),
        case(Integer::from(-1), r#""-1""#),
        case(
            Integer::from(BigInt::from_str("333504890676592408951587385614406537514249").unwrap()),
            r#""333504890676592408951587385614406537514249""#
        )
    )]
    fn test_integer_serde(input: Integer, expected_json: &str) {
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(expected_json, json);
        let back: Integer = serde_json::from_str(&json).unwrap();
        assert_eq!(input, back);
    }

    #[rstest(
        input,
        expected,
        // rsaEncryption
        case(vec![0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01], "1.2.840.113549.1.1.1"),
        // sha256WithRSAEncryption
        case(vec![0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0b], "1.2.840.113549.1.1.11"),
        case(vec![0x55, 0x04, 0x03], "2.5.4.3")
    )]
    fn test_oid_decode_encode(input: Vec<u8>, expected: &str) {
        let oid = ObjectIdentifier::try_from(input.as_slice()).unwrap();
        assert_eq!(oid, expected);
        assert_eq!(oid, ObjectIdentifier::from_str(expected).unwrap());

        let encoded = Vec::try_from(oid).unwrap();
        assert_eq!(input, encoded);
    }

    #[test]
    fn test_oid_incomplete_encoding() {
        // continuation bit set on the final byte
        let result = ObjectIdentifier::try_from(&[0x2a, 0x86][..]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bit_string() {
        let bs = BitString::try_from(&[0x06, 0x6e, 0x5d, 0xc0][..]).unwrap();
        assert_eq!(6, bs.unused_bits());
        assert_eq!(&[0x6e, 0x5d, 0xc0], bs.as_bytes());
        assert_eq!(18, bs.bit_len());

        assert!(BitString::try_from(&[][..]).is_err());
        assert!(BitString::try_from(&[0x08, 0x00][..]).is_err());
    }

    #[test]
    fn test_decode_sequence_of_integers() {
        let bytes: Vec<u8> = vec![
            0x30, 0x09, 0x02, 0x01, 0x07, 0x02, 0x01, 0x08, 0x02, 0x01, 0x09,
        ];
        let der: Der = bytes.decode().unwrap();
        let obj: ASN1Object = der.decode().unwrap();

        let [Element::Sequence(elements)] = obj.elements() else {
            panic!("expected a single Sequence element");
        };
        assert_eq!(3, elements.len());
        assert_eq!(Element::Integer(Integer::from(7)), elements[0]);
        assert_eq!(Element::Integer(Integer::from(8)), elements[1]);
        assert_eq!(Element::Integer(Integer::from(9)), elements[2]);
    }

    #[test]
    fn test_decode_rejects_empty_integer() {
        let bytes: Vec<u8> = vec![0x02, 0x00];
        let der: Der = bytes.decode().unwrap();
        let result: Result<ASN1Object, _> = der.decode();
        assert!(result.is_err());
    }

    #[test]
    fn test_element_roundtrip_through_der() {
        let element = Element::Sequence(vec![
            Element::Integer(Integer::from(0)),
            Element::Sequence(vec![
                Element::ObjectIdentifier(
                    ObjectIdentifier::from_str("1.2.840.113549.1.1.1").unwrap(),
                ),
                Element::Null,
            ]),
            Element::OctetString(OctetString::from(vec![0x30, 0x03, 0x02, 0x01, 0x2a])),
        ]);

        let obj = ASN1Object::new(vec![element.clone()]);
        let der: Der = obj.encode().unwrap();
        let bytes: Vec<u8> = der.encode().unwrap();

        let reparsed_der: Der = bytes.decode().unwrap();
        let reparsed: ASN1Object = reparsed_der.decode().unwrap();
        assert_eq!(obj, reparsed);
    }

    #[test]
    fn test_octet_string_nested_reparse() {
        // OCTET STRING payload is itself a SEQUENCE { INTEGER 42 }
        let os = OctetString::from(vec![0x30, 0x03, 0x02, 0x01, 0x2a]);
        let obj = ASN1Object::try_from(&os).unwrap();
        let [Element::Sequence(elements)] = obj.elements() else {
            panic!("expected a single Sequence element");
        };
        assert_eq!(vec![Element::Integer(Integer::from(42))], *elements);

        // garbage payload fails the nested parse
        let os = OctetString::from(vec![0xde, 0xad]);
        assert!(ASN1Object::try_from(&os).is_err());
    }

    #[test]
    fn test_context_specific_explicit_roundtrip() {
        let element = Element::ContextSpecific {
            slot: 0,
            constructed: true,
            element: Box::new(Element::Integer(Integer::from(5))),
        };
        let obj = ASN1Object::new(vec![element]);
        let der: Der = obj.encode().unwrap();
        let bytes: Vec<u8> = der.encode().unwrap();
        assert_eq!(vec![0xa0, 0x03, 0x02, 0x01, 0x05], bytes);

        let reparsed_der: Der = bytes.decode().unwrap();
        let reparsed: ASN1Object = reparsed_der.decode().unwrap();
        assert_eq!(obj, reparsed);
    }

    #[test]
    fn test_octet_string_serde_hex() {
        let os = OctetString::from(vec![0xde, 0xad, 0xbe, 0xef]);
        let json = serde_json::to_string(&os).unwrap();
        assert_eq!(r#""deadbeef""#, json);
        let back: OctetString = serde_json::from_str(&json).unwrap();
        assert_eq!(os, back);
    }
}
