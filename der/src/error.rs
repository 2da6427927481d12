use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("parser error {0:?}")]
    Parser(nom::error::ErrorKind),

    #[error("parser incomplete: {0:?}")]
    ParserIncomplete(nom::Needed),

    #[error("empty DER input")]
    Empty,

    /// Tag class or number outside the subset this reader understands
    #[error("unsupported tag 0x{0:02x}")]
    UnsupportedTag(u8),

    /// Primitive tag encoded as constructed, or the other way round
    #[error("tag 0x{0:02x} uses the wrong primitive/constructed form")]
    WrongEncodingForm(u8),

    /// Indefinite-length is BER, not DER
    #[error("indefinite length encoding is not allowed in DER")]
    IndefiniteLength,

    #[error("length field of {0} octets exceeds the supported range")]
    LengthTooLong(u8),

    #[error("pem: {0}")]
    Pem(pem::error::Error),
}
