use std::sync::OnceLock;

use num_bigint::BigInt;
use pem::{Label, Pem};
use pkcs::pkcs1::RSAPrivateKey;

use crate::error::{ConfigError, Error, FormatError, KeyValidationError};
use crate::key::Key;

/// Shape of the PEM input a backend is asked to handle.
///
/// Captured at armor-scanning time, before any DER work, because the
/// profile gaps of the engines are about the armor itself (label, line
/// layout), not the decoded structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputProfile {
    pub label: Label,
    pub wrapped: bool,
}

impl InputProfile {
    pub fn of(pem: &Pem) -> Self {
        InputProfile {
            label: pem.label(),
            wrapped: pem.wrapped(),
        }
    }
}

/// A key-construction engine.
///
/// Backends are registered once, in a fixed priority order, and selected
/// by name per call. Each backend declares its availability and its input
/// profile; the numeric construction itself validates the field set.
pub trait Backend: Sync + std::fmt::Debug {
    /// Stable name callers use in the `implementations` list
    fn name(&self) -> &'static str;

    /// Availability probe, evaluated once when the registry is built.
    /// This is where a check for a required native dependency belongs.
    fn probe(&self) -> bool;

    /// Check the input shape against this backend's documented profile
    fn accepts(&self, input: &InputProfile) -> Result<(), FormatError>;

    /// Build a [`Key`] from an extracted field set.
    ///
    /// Private components are dropped unless `private` is requested.
    fn construct_key(&self, fields: &RSAPrivateKey, private: bool) -> Result<Key, Error>;
}

pub const LEGACY_BACKEND: &str = "legacy";
pub const GENERIC_BACKEND: &str = "generic";

/// The strict engine, retaining the input profile of the native-library
/// loader this crate descends from: conventionally line-wrapped armor
/// carrying a PKCS#1 key, nothing else. The gap is a documented backend
/// capability, not a parser defect.
#[derive(Debug, Default)]
pub struct LegacyBackend;

impl Backend for LegacyBackend {
    fn name(&self) -> &'static str {
        LEGACY_BACKEND
    }

    fn probe(&self) -> bool {
        true
    }

    fn accepts(&self, input: &InputProfile) -> Result<(), FormatError> {
        if input.label.ne(&Label::RSAPrivateKey) {
            return Err(FormatError::UnsupportedByBackend {
                backend: self.name(),
                input: "a key that is not PKCS#1 armored",
            });
        }
        if !input.wrapped {
            return Err(FormatError::UnsupportedByBackend {
                backend: self.name(),
                input: "armor without newlines",
            });
        }
        Ok(())
    }

    fn construct_key(&self, fields: &RSAPrivateKey, private: bool) -> Result<Key, Error> {
        build_key(self.name(), fields, private)
    }
}

/// The full-profile engine: both key encodings, wrapped or single-line
/// armor.
#[derive(Debug, Default)]
pub struct GenericBackend;

impl Backend for GenericBackend {
    fn name(&self) -> &'static str {
        GENERIC_BACKEND
    }

    fn probe(&self) -> bool {
        true
    }

    fn accepts(&self, _input: &InputProfile) -> Result<(), FormatError> {
        Ok(())
    }

    fn construct_key(&self, fields: &RSAPrivateKey, private: bool) -> Result<Key, Error> {
        build_key(self.name(), fields, private)
    }
}

fn build_key(name: &'static str, fields: &RSAPrivateKey, private: bool) -> Result<Key, Error> {
    validate_field_set(fields)?;
    let public = fields.public_key();
    let private = private.then(|| fields.clone());
    Ok(Key::new(name, public, private))
}

/// Arithmetic consistency of an extracted field set.
///
/// The invariants checked are the ones that hold for every well-formed
/// two-prime key independent of which exponent convention produced it:
/// `n == p*q`, `dP == d mod (p-1)`, `dQ == d mod (q-1)`.
fn validate_field_set(fields: &RSAPrivateKey) -> Result<(), KeyValidationError> {
    let n = fields.modulus.as_bigint();
    let d = fields.private_exponent.as_bigint();
    let p = fields.prime1.as_bigint();
    let q = fields.prime2.as_bigint();
    let one = BigInt::from(1);

    if *n != p * q {
        return Err(KeyValidationError::ModulusPrimeMismatch);
    }
    if *fields.exponent1.as_bigint() != d % (p - &one) {
        return Err(KeyValidationError::Exponent1Mismatch);
    }
    if *fields.exponent2.as_bigint() != d % (q - &one) {
        return Err(KeyValidationError::Exponent2Mismatch);
    }
    Ok(())
}

struct Entry {
    backend: &'static dyn Backend,
    available: bool,
}

/// The fixed candidate list, in priority order. Mirrors the order the
/// original loader tried its engines in: the strict native-profile engine
/// first, the full parser second.
fn candidates() -> [&'static dyn Backend; 2] {
    static LEGACY: LegacyBackend = LegacyBackend;
    static GENERIC: GenericBackend = GenericBackend;
    [&LEGACY, &GENERIC]
}

/// Registry of known backends with their availability, computed once.
///
/// There is a single initialization point ([`Registry::global`]) and no
/// runtime mutation, so concurrent `parse_pem_key` calls share it without
/// locking.
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    fn probe_all() -> Self {
        Registry::with_backends(&candidates())
    }

    /// The process-wide registry, initialized on first use and read-only
    /// afterwards.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::probe_all)
    }

    /// Build a registry from an explicit backend list. The availability
    /// probe runs here, once, like it does for the global registry.
    pub fn with_backends(backends: &[&'static dyn Backend]) -> Self {
        Registry {
            entries: backends
                .iter()
                .map(|&backend| Entry {
                    available: backend.probe(),
                    backend,
                })
                .collect(),
        }
    }

    /// Names of all registered backends, in priority order
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.backend.name()).collect()
    }

    pub fn is_available(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.backend.name() == name && e.available)
    }

    /// Walk the caller's requested names in order and return the first
    /// that is both known and available.
    ///
    /// Unknown names are silently skipped so callers can keep requesting
    /// engines this build does not ship. When nothing matches, the caller
    /// has a configuration problem, not an input problem.
    pub fn select(&self, requested: &[&str]) -> Result<&'static dyn Backend, ConfigError> {
        for name in requested {
            let entry = self.entries.iter().find(|e| e.backend.name() == *name);
            if let Some(entry) = entry {
                if entry.available {
                    return Ok(entry.backend);
                }
            }
        }
        Err(ConfigError::NoBackendAvailable)
    }
}
