//! Sigil Core Library
//!
//! A small, swappable Ed25519 primitive layer: content hashing, keypair
//! generation, signing and verification. Keys travel as compact 32-byte
//! values and are wrapped into DER containers (SPKI / PKCS#8) only at the
//! boundary of the signing primitive.

pub mod config;
pub mod crypto;
pub mod types;
pub mod version;

pub use config::CryptoConfig;
pub use types::*;
pub use version::version_string;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Signature decoding failed: {0}")]
    Decoding(String),

    #[error("Signing failed: {0}")]
    Signing(String),

    #[error("Key generation failed: {0}")]
    Generation(String),

    #[error("Malformed DER {kind} key: {reason}")]
    MalformedDer { kind: &'static str, reason: String },

    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Unknown crypto backend: {0}")]
    UnknownBackend(String),
}
