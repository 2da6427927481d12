use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy of the key loader.
///
/// The three kinds are distinct so callers can branch without matching on
/// message strings: a missing backend is retryable with a different
/// `implementations` list, malformed input is not, and arithmetically
/// inconsistent key material points at the key itself.
#[derive(Debug, Error)]
pub enum Error {
    /// None of the requested backends are available
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// PEM armor, DER structure, or key schema is malformed, or the
    /// selected backend does not understand this input shape
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Structurally valid but arithmetically inconsistent key material
    #[error(transparent)]
    KeyValidation(#[from] KeyValidationError),
}

impl Error {
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }

    pub fn is_key_validation(&self) -> bool {
        matches!(self, Error::KeyValidation(_))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no requested backend is available")]
    NoBackendAvailable,
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("PEM: {0}")]
    Pem(#[from] pem::error::Error),

    #[error("DER: {0}")]
    Der(#[from] der::error::Error),

    #[error("PKCS#1: {0}")]
    Pkcs1(#[from] pkcs::pkcs1::Error),

    #[error("PKCS#8: {0}")]
    Pkcs8(#[from] pkcs::pkcs8::Error),

    #[error("no private key block found in PEM input")]
    MissingKeyBlock,

    #[error("encrypted private keys are not supported")]
    EncryptedKeyUnsupported,

    /// The input is well-formed but outside the selected backend's
    /// documented profile
    #[error("backend {backend} cannot parse {input}")]
    UnsupportedByBackend {
        backend: &'static str,
        input: &'static str,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyValidationError {
    #[error("modulus is not the product of the two primes")]
    ModulusPrimeMismatch,

    #[error("exponent1 is not d mod (p - 1)")]
    Exponent1Mismatch,

    #[error("exponent2 is not d mod (q - 1)")]
    Exponent2Mismatch,
}

// Lower-layer errors always classify as format errors; these impls let the
// orchestration use `?` without spelling the two hops out.

impl From<pem::error::Error> for Error {
    fn from(e: pem::error::Error) -> Self {
        Error::Format(FormatError::Pem(e))
    }
}

impl From<der::error::Error> for Error {
    fn from(e: der::error::Error) -> Self {
        Error::Format(FormatError::Der(e))
    }
}

impl From<pkcs::pkcs1::Error> for Error {
    fn from(e: pkcs::pkcs1::Error) -> Self {
        Error::Format(FormatError::Pkcs1(e))
    }
}

impl From<pkcs::pkcs8::Error> for Error {
    fn from(e: pkcs::pkcs8::Error) -> Self {
        Error::Format(FormatError::Pkcs8(e))
    }
}
