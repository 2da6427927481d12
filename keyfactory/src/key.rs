use pkcs::pkcs1::{RSAPrivateKey, RSAPublicKey};

/// A loaded key, owned by the caller that received it.
///
/// The handle is backend-agnostic: whichever engine constructed it, the
/// surface is the same. Private components are only retained when the
/// caller asked for a private key, so `has_private_key` reflects both the
/// input material and the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    backend: &'static str,
    public: RSAPublicKey,
    private: Option<RSAPrivateKey>,
}

impl Key {
    pub(crate) fn new(
        backend: &'static str,
        public: RSAPublicKey,
        private: Option<RSAPrivateKey>,
    ) -> Self {
        Key {
            backend,
            public,
            private,
        }
    }

    /// Name of the backend that constructed this key
    pub fn backend(&self) -> &'static str {
        self.backend
    }

    /// Bit length of the RSA modulus
    pub fn bit_length(&self) -> u64 {
        self.public.key_size()
    }

    pub fn has_private_key(&self) -> bool {
        self.private.is_some()
    }

    pub fn public_key(&self) -> &RSAPublicKey {
        &self.public
    }

    /// The full extracted field set, when private material was retained
    pub fn private_key(&self) -> Option<&RSAPrivateKey> {
        self.private.as_ref()
    }
}
