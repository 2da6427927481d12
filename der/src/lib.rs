use kagi::decoder::{DecodableFrom, Decoder};
use kagi::encoder::{EncodableTo, Encoder};
use nom::{IResult, Parser};

pub mod error;

pub use error::Error;

pub const TAG_CONSTRUCTED: u8 = 0x20;

const CLASS_MASK: u8 = 0xc0;
const CLASS_CONTEXT_SPECIFIC: u8 = 0x80;
const TAG_NUMBER_MASK: u8 = 0x1f;

/// Universal-class tags understood by this reader.
///
/// This is deliberately the minimum needed to walk private-key structures.
/// Anything else is a parse failure, not a lossy passthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniversalTag {
    Integer,
    BitString,
    OctetString,
    Null,
    ObjectIdentifier,
    Sequence,
    Set,
}

impl UniversalTag {
    pub fn number(&self) -> u8 {
        match self {
            UniversalTag::Integer => 0x02,
            UniversalTag::BitString => 0x03,
            UniversalTag::OctetString => 0x04,
            UniversalTag::Null => 0x05,
            UniversalTag::ObjectIdentifier => 0x06,
            UniversalTag::Sequence => 0x10,
            UniversalTag::Set => 0x11,
        }
    }

    fn from_number(n: u8) -> Option<UniversalTag> {
        match n {
            0x02 => Some(UniversalTag::Integer),
            0x03 => Some(UniversalTag::BitString),
            0x04 => Some(UniversalTag::OctetString),
            0x05 => Some(UniversalTag::Null),
            0x06 => Some(UniversalTag::ObjectIdentifier),
            0x10 => Some(UniversalTag::Sequence),
            0x11 => Some(UniversalTag::Set),
            _ => None,
        }
    }

    /// SEQUENCE and SET are always constructed in DER; the rest are
    /// always primitive.
    pub fn constructed(&self) -> bool {
        matches!(self, UniversalTag::Sequence | UniversalTag::Set)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Universal(UniversalTag),
    ContextSpecific { slot: u8, constructed: bool },
}

impl TryFrom<u8> for Tag {
    type Error = Error;

    fn try_from(b: u8) -> Result<Self, Self::Error> {
        match b & CLASS_MASK {
            0x00 => {
                let Some(tag) = UniversalTag::from_number(b & TAG_NUMBER_MASK) else {
                    return Err(Error::UnsupportedTag(b));
                };
                if (b & TAG_CONSTRUCTED != 0) != tag.constructed() {
                    return Err(Error::WrongEncodingForm(b));
                }
                Ok(Tag::Universal(tag))
            }
            CLASS_CONTEXT_SPECIFIC => Ok(Tag::ContextSpecific {
                slot: b & TAG_NUMBER_MASK,
                constructed: b & TAG_CONSTRUCTED != 0,
            }),
            // application and private classes never appear in the key
            // structures this crate walks
            _ => Err(Error::UnsupportedTag(b)),
        }
    }
}

impl Tag {
    pub fn is_constructed(&self) -> bool {
        match self {
            Tag::Universal(t) => t.constructed(),
            Tag::ContextSpecific { constructed, .. } => *constructed,
        }
    }

    fn byte(&self) -> u8 {
        match self {
            Tag::Universal(t) => {
                t.number()
                    | if t.constructed() {
                        TAG_CONSTRUCTED
                    } else {
                        0x00
                    }
            }
            Tag::ContextSpecific { slot, constructed } => {
                CLASS_CONTEXT_SPECIFIC
                    | (slot & TAG_NUMBER_MASK)
                    | if *constructed { TAG_CONSTRUCTED } else { 0x00 }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tlv {
    tag: Tag,
    length: u64,
    value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Constructed(Vec<Tlv>),
    Primitive(Vec<u8>),
}

impl Tlv {
    pub fn new_primitive(tag: Tag, data: Vec<u8>) -> Self {
        Tlv {
            tag,
            length: data.len() as u64,
            value: Value::Primitive(data),
        }
    }

    pub fn new_constructed(tag: Tag, children: Vec<Tlv>) -> Self {
        let length = children.iter().map(Tlv::encoded_len).sum();
        Tlv {
            tag,
            length,
            value: Value::Constructed(children),
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    /// Contents of a primitive TLV.
    pub fn data(&self) -> Option<&[u8]> {
        match &self.value {
            Value::Primitive(data) => Some(data),
            Value::Constructed(_) => None,
        }
    }

    /// Children of a constructed TLV.
    pub fn children(&self) -> Option<&[Tlv]> {
        match &self.value {
            Value::Constructed(children) => Some(children),
            Value::Primitive(_) => None,
        }
    }

    pub fn parse(input: &[u8]) -> Result<(&[u8], Tlv), Error> {
        let (input, tag_byte) = parse_u8(input).map_err(nom_err)?;
        let tag = Tag::try_from(tag_byte)?;
        let (input, length) = parse_length(input)?;
        let (input, contents) = parse_take(input, length).map_err(nom_err)?;

        if tag.is_constructed() {
            let mut children = Vec::new();
            let mut rest = contents;
            while !rest.is_empty() {
                let (next, child) = Self::parse(rest)?;
                rest = next;
                children.push(child);
            }
            Ok((
                input,
                Tlv {
                    tag,
                    length,
                    value: Value::Constructed(children),
                },
            ))
        } else {
            Ok((
                input,
                Tlv {
                    tag,
                    length,
                    value: Value::Primitive(contents.to_vec()),
                },
            ))
        }
    }

    fn content_len(&self) -> u64 {
        match &self.value {
            Value::Primitive(data) => data.len() as u64,
            Value::Constructed(children) => children.iter().map(Tlv::encoded_len).sum(),
        }
    }

    fn encoded_len(&self) -> u64 {
        let content = self.content_len();
        1 + length_octets(content) + content
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        out.push(self.tag.byte());
        match &self.value {
            Value::Primitive(data) => {
                write_length(out, data.len() as u64);
                out.extend_from_slice(data);
            }
            Value::Constructed(children) => {
                write_length(out, self.content_len());
                for child in children {
                    child.write_into(out);
                }
            }
        }
    }
}

fn parse_u8(input: &[u8]) -> IResult<&[u8], u8> {
    nom::number::be_u8().parse(input)
}

fn parse_take(input: &[u8], count: u64) -> IResult<&[u8], &[u8]> {
    nom::bytes::complete::take(count).parse(input)
}

fn parse_length(input: &[u8]) -> Result<(&[u8], u64), Error> {
    let (input, n) = parse_u8(input).map_err(nom_err)?;
    if n & 0x80 == 0x80 {
        // long form
        // First 1 bit is a marker for long form.
        // Other bits represent bytes length of the length field.
        let count = n & 0x7f;
        if count == 0 {
            return Err(Error::IndefiniteLength);
        }
        if count as usize > size_of::<u64>() {
            return Err(Error::LengthTooLong(count));
        }
        let (input, bs) = parse_take(input, count as u64).map_err(nom_err)?;
        let length = bs.iter().fold(0u64, |n, &b| (n << 8) | b as u64);
        return Ok((input, length));
    }
    // short form: 0-127
    Ok((input, n as u64))
}

fn length_octets(len: u64) -> u64 {
    if len < 0x80 {
        1
    } else {
        1 + (8 - (len.leading_zeros() as u64 / 8))
    }
}

fn write_length(out: &mut Vec<u8>, len: u64) {
    if len < 0x80 {
        out.push(len as u8);
        return;
    }
    let bytes = len.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0x00).count();
    let significant = &bytes[skip..];
    out.push(0x80 | significant.len() as u8);
    out.extend_from_slice(significant);
}

fn nom_err(e: nom::Err<nom::error::Error<&[u8]>>) -> Error {
    match e {
        nom::Err::Incomplete(n) => Error::ParserIncomplete(n),
        nom::Err::Error(e) | nom::Err::Failure(e) => Error::Parser(e.code),
    }
}

/// An ordered list of top-level TLVs decoded from (or encodable to) one
/// DER byte string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Der {
    tlvs: Vec<Tlv>,
}

impl Der {
    pub fn new(tlvs: Vec<Tlv>) -> Self {
        Der { tlvs }
    }

    pub fn elements(&self) -> &[Tlv] {
        &self.tlvs
    }
}

fn parse_all(mut input: &[u8]) -> Result<Der, Error> {
    if input.is_empty() {
        return Err(Error::Empty);
    }
    let mut tlvs = Vec::new();
    while !input.is_empty() {
        let (rest, tlv) = Tlv::parse(input)?;
        input = rest;
        tlvs.push(tlv);
    }
    Ok(Der::new(tlvs))
}

impl DecodableFrom<Vec<u8>> for Der {}

impl Decoder<Vec<u8>, Der> for Vec<u8> {
    type Error = Error;

    fn decode(&self) -> Result<Der, Self::Error> {
        parse_all(self)
    }
}

impl<'a> DecodableFrom<&'a [u8]> for Der {}

impl<'a> Decoder<&'a [u8], Der> for &'a [u8] {
    type Error = Error;

    fn decode(&self) -> Result<Der, Self::Error> {
        parse_all(self)
    }
}

impl DecodableFrom<pem::Pem> for Der {}

impl Decoder<pem::Pem, Der> for pem::Pem {
    type Error = Error;

    fn decode(&self) -> Result<Der, Self::Error> {
        let raw: Vec<u8> = Decoder::<pem::Pem, Vec<u8>>::decode(self).map_err(Error::Pem)?;
        parse_all(&raw)
    }
}

impl EncodableTo<Der> for Vec<u8> {}

impl Encoder<Der, Vec<u8>> for Der {
    type Error = Error;

    fn encode(&self) -> Result<Vec<u8>, Self::Error> {
        let mut out = Vec::new();
        for tlv in &self.tlvs {
            tlv.write_into(&mut out);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use kagi::decoder::Decoder;
    use kagi::encoder::Encoder;

    use crate::{Der, Error, Tag, Tlv, UniversalTag, Value, parse_length};

    #[rstest(input, expected,
        case(0x02, Tag::Universal(UniversalTag::Integer)),
        case(0x04, Tag::Universal(UniversalTag::OctetString)),
        case(0x05, Tag::Universal(UniversalTag::Null)),
        case(0x06, Tag::Universal(UniversalTag::ObjectIdentifier)),
        case(0x30, Tag::Universal(UniversalTag::Sequence)),
        case(0x31, Tag::Universal(UniversalTag::Set)),
        case(0xa0, Tag::ContextSpecific { slot: 0, constructed: true }),
        case(0x81, Tag::ContextSpecific { slot: 1, constructed: false }),
    )]
    fn test_tag_try_from(input: u8, expected: Tag) {
        assert_eq!(expected, Tag::try_from(input).unwrap());
    }

    #[rstest(input, expected,
        // UTF8String, UTCTime, GeneralizedTime: outside the key subset
        case(0x0c, Error::UnsupportedTag(0x0c)),
        case(0x17, Error::UnsupportedTag(0x17)),
        case(0x18, Error::UnsupportedTag(0x18)),
        // application class
        case(0x41, Error::UnsupportedTag(0x41)),
        // SEQUENCE without the constructed bit, constructed INTEGER
        case(0x10, Error::WrongEncodingForm(0x10)),
        case(0x22, Error::WrongEncodingForm(0x22)),
    )]
    fn test_tag_try_from_with_error(input: u8, expected: Error) {
        assert_eq!(expected, Tag::try_from(input).unwrap_err());
    }

    #[rstest(input, expected,
        case(vec![0x02], 0x02),
        case(vec![0x7f], 0x7f),
        case(vec![0x82, 0x02, 0x10], 256 * 0x02 + 0x10),
        case(vec![0x83, 0x01, 0x00, 0x00], 256 * 256),
        case(vec![0x82, 0xff, 0xff], 256 * 0xff + 0xff),
    )]
    fn test_parse_length(input: Vec<u8>, expected: u64) {
        let (_, actual) = parse_length(&input).unwrap();
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_parse_length_indefinite() {
        assert_eq!(Err(Error::IndefiniteLength), parse_length(&[0x80]));
    }

    #[rstest(input, expected,
        case(vec![0x02, 0x01, 0x01], Tlv::new_primitive(Tag::Universal(UniversalTag::Integer), vec![0x01])),
        case(
            vec![0x02, 0x09, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01],
            Tlv::new_primitive(Tag::Universal(UniversalTag::Integer), vec![0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]),
        ),
        case(vec![0x05, 0x00], Tlv::new_primitive(Tag::Universal(UniversalTag::Null), vec![])),
        case(
            vec![0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01],
            Tlv::new_primitive(Tag::Universal(UniversalTag::ObjectIdentifier), vec![0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01]),
        ),
        case(
            vec![0x04, 0x04, 0x03, 0x02, 0x06, 0xa0],
            Tlv::new_primitive(Tag::Universal(UniversalTag::OctetString), vec![0x03, 0x02, 0x06, 0xa0]),
        ),
        case(
            vec![0x03, 0x04, 0x06, 0x6e, 0x5d, 0xc0],
            Tlv::new_primitive(Tag::Universal(UniversalTag::BitString), vec![0x06, 0x6e, 0x5d, 0xc0]),
        ),
    )]
    fn test_tlv_parse_primitive(input: Vec<u8>, expected: Tlv) {
        let (rest, actual) = Tlv::parse(&input).unwrap();
        assert!(rest.is_empty());
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_tlv_parse_structured() {
        let input = vec![
            0x30, 0x09, 0x02, 0x01, 0x07, 0x02, 0x01, 0x08, 0x02, 0x01, 0x09,
        ];
        let (rest, actual) = Tlv::parse(&input).unwrap();
        assert!(rest.is_empty());
        assert_eq!(Tag::Universal(UniversalTag::Sequence), actual.tag());
        assert_eq!(9, actual.length());
        let children = actual.children().unwrap();
        assert_eq!(3, children.len());
        for (child, expected) in children.iter().zip([0x07u8, 0x08, 0x09]) {
            assert_eq!(Some(&[expected][..]), child.data());
        }
    }

    #[test]
    fn test_tlv_parse_context_specific() {
        // [1] primitive carrying two bytes
        let input = vec![0x81, 0x02, 0xca, 0xfe];
        let (_, actual) = Tlv::parse(&input).unwrap();
        assert_eq!(
            Tag::ContextSpecific {
                slot: 1,
                constructed: false
            },
            actual.tag()
        );
        assert_eq!(Some(&[0xca, 0xfe][..]), actual.data());

        // [0] constructed wrapping a NULL
        let input = vec![0xa0, 0x02, 0x05, 0x00];
        let (_, actual) = Tlv::parse(&input).unwrap();
        assert_eq!(1, actual.children().unwrap().len());
    }

    #[rstest(input,
        // declared length runs past the end of input
        case(vec![0x02, 0x05, 0x01, 0x02]),
        // nested child truncated inside a SEQUENCE
        case(vec![0x30, 0x03, 0x02, 0x04, 0x01]),
        // indefinite length
        case(vec![0x30, 0x80, 0x02, 0x01, 0x01, 0x00, 0x00]),
        // unsupported tag
        case(vec![0x0c, 0x02, 0x68, 0x69]),
        // bare tag, no length octet
        case(vec![0x02]),
    )]
    fn test_tlv_parse_with_error(input: Vec<u8>) {
        assert!(Tlv::parse(&input).is_err());
    }

    #[test]
    fn test_der_decode_consumes_all_input() {
        // one INTEGER followed by a garbage byte: the trailing byte is not
        // a valid TLV, so the whole decode fails
        let input = vec![0x02, 0x01, 0x2a, 0x00];
        let result: Result<Der, Error> = input.decode();
        assert!(result.is_err());
    }

    #[test]
    fn test_der_decode_empty() {
        let input: Vec<u8> = vec![];
        let result: Result<Der, Error> = input.decode();
        assert_eq!(Err(Error::Empty), result);
    }

    #[rstest(input,
        case(vec![0x02, 0x01, 0x2a]),
        case(vec![0x30, 0x09, 0x02, 0x01, 0x07, 0x02, 0x01, 0x08, 0x02, 0x01, 0x09]),
        case(vec![0xa0, 0x02, 0x05, 0x00]),
        case(vec![0x04, 0x03, 0x02, 0x01, 0x07]),
    )]
    fn test_der_roundtrip(input: Vec<u8>) {
        let der: Der = input.decode().unwrap();
        let encoded: Vec<u8> = der.encode().unwrap();
        assert_eq!(input, encoded);
    }

    #[test]
    fn test_der_encode_long_form_length() {
        // 200 content bytes forces the 0x81 long-form length octet
        let tlv = Tlv::new_primitive(Tag::Universal(UniversalTag::OctetString), vec![0xaa; 200]);
        let der = Der::new(vec![tlv]);
        let encoded: Vec<u8> = der.encode().unwrap();
        assert_eq!(&[0x04, 0x81, 0xc8], &encoded[..3]);
        assert_eq!(203, encoded.len());

        let reparsed: Der = encoded.decode().unwrap();
        assert_eq!(der, reparsed);
    }

    #[test]
    fn test_value_accessors() {
        let prim = Tlv::new_primitive(Tag::Universal(UniversalTag::Integer), vec![0x01]);
        assert!(prim.children().is_none());
        assert!(matches!(&prim.value, Value::Primitive(_)));

        let cons = Tlv::new_constructed(Tag::Universal(UniversalTag::Sequence), vec![prim]);
        assert!(cons.data().is_none());
        assert_eq!(3, cons.length());
    }
}
