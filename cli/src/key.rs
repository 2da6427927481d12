use clap::{Args, Subcommand};
use serde::Serialize;

use keyfactory::{GENERIC_BACKEND, Key, LEGACY_BACKEND, parse_pem_key};
use pem::ToPem;

use crate::error::{Error, Result};
use crate::utils::read_input;

#[derive(Subcommand)]
pub(crate) enum KeyCommands {
    /// Load a PEM private key and report its properties
    Inspect(InspectConfig),
    /// Re-emit a private key as PKCS#1 PEM
    Convert(ConvertConfig),
}

#[derive(Args)]
pub(crate) struct InspectConfig {
    /// Input file (stdin if omitted)
    pub(crate) file: Option<String>,

    /// Backend preference order, tried first to last
    #[arg(long = "backend", value_name = "NAME")]
    pub(crate) backends: Vec<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct ConvertConfig {
    /// Input file (stdin if omitted)
    pub(crate) file: Option<String>,
}

#[derive(Serialize)]
struct InspectReport<'a> {
    backend: &'a str,
    bits: u64,
    private: bool,
    public_exponent: String,
}

impl<'a> InspectReport<'a> {
    fn of(key: &'a Key) -> Self {
        InspectReport {
            backend: key.backend(),
            bits: key.bit_length(),
            private: key.has_private_key(),
            public_exponent: key.public_key().public_exponent.to_string(),
        }
    }
}

fn backend_names(requested: &[String]) -> Vec<&str> {
    if requested.is_empty() {
        // same preference order as the built-in registry
        vec![LEGACY_BACKEND, GENERIC_BACKEND]
    } else {
        requested.iter().map(String::as_str).collect()
    }
}

pub(crate) fn inspect(config: InspectConfig) -> Result<()> {
    let text = String::from_utf8(read_input(config.file.as_deref())?)?;
    let key = parse_pem_key(&text, true, &backend_names(&config.backends))?;
    let report = InspectReport::of(&key);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("RSA Private Key");
        println!("Backend: {}", report.backend);
        println!("Modulus (n): {} bits", report.bits);
        println!("Public Exponent (e): {}", report.public_exponent);
        println!(
            "Private Key: {}",
            if report.private { "present" } else { "absent" }
        );
    }
    Ok(())
}

pub(crate) fn convert(config: ConvertConfig) -> Result<()> {
    let text = String::from_utf8(read_input(config.file.as_deref())?)?;
    let key = parse_pem_key(&text, true, &[GENERIC_BACKEND])?;
    let fields = key
        .private_key()
        .ok_or_else(|| Error::InvalidInput("no private key material to convert".to_string()))?;
    let pem = fields.to_pem().map_err(keyfactory::Error::from)?;
    println!("{}", pem);
    Ok(())
}
