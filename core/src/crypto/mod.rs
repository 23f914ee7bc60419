//! Cryptographic primitives module
//!
//! This module provides:
//! - SHA-256 content hashing
//! - Ed25519 key generation, signing and verification
//! - The DER codec (compact keys <-> SPKI / PKCS#8 containers)
//! - The signature codec (raw signatures <-> [`EncodedSig`])
//!
//! The free functions at the top level use the DER backend. Callers that
//! need to swap the implementation go through [`LowLevelCrypto`] and
//! [`Backend`].

pub mod backend;
pub mod der;
pub mod encoding;
pub mod raw;
pub mod signing;

pub use backend::Backend;
pub use encoding::{decode_sig, encode_sig};
pub use raw::RawCrypto;
pub use signing::DerCrypto;

use crate::types::{ContentHash, EncodedSig, KeypairBuffers, SECRET_KEY_LENGTH};
use crate::{Error, Result};
use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use tracing::debug;

/// The primitive operations every backend provides
///
/// Implementations are stateless; a single instance can be shared freely
/// between threads.
pub trait LowLevelCrypto: Send + Sync {
    /// SHA-256 over raw bytes
    fn sha256(&self, input: &[u8]) -> ContentHash {
        hash_sha256(input)
    }

    /// Fresh keypair from the OS CSPRNG, in compact form
    fn generate_keypair_buffers(&self) -> Result<KeypairBuffers>;

    /// Sign `msg` with the keypair's secret key
    fn sign(&self, keypair: &KeypairBuffers, msg: &[u8]) -> Result<EncodedSig>;

    /// Check `sig` over `msg` against a compact public key.
    /// Any failure, including malformed input, is `false`.
    fn verify(&self, public_key: &[u8], sig: &EncodedSig, msg: &[u8]) -> bool;
}

/// Hash bytes or text (UTF-8) with SHA-256
pub fn sha256(input: impl AsRef<[u8]>) -> ContentHash {
    hash_sha256(input.as_ref())
}

/// Generate a fresh Ed25519 keypair
pub fn generate_keypair_buffers() -> Result<KeypairBuffers> {
    DerCrypto.generate_keypair_buffers()
}

/// Sign bytes or text (UTF-8)
pub fn sign(keypair: &KeypairBuffers, msg: impl AsRef<[u8]>) -> Result<EncodedSig> {
    DerCrypto.sign(keypair, msg.as_ref())
}

/// Verify a signature over bytes or text (UTF-8). Never fails, only answers.
pub fn verify(public_key: impl AsRef<[u8]>, sig: &EncodedSig, msg: impl AsRef<[u8]>) -> bool {
    DerCrypto.verify(public_key.as_ref(), sig, msg.as_ref())
}

pub(crate) fn hash_sha256(input: &[u8]) -> ContentHash {
    ContentHash(Sha256::digest(input).into())
}

/// Draw a signing key from the OS RNG. An RNG failure is reported, never
/// papered over with a weaker source.
pub(crate) fn random_signing_key() -> Result<SigningKey> {
    let mut seed = zeroize::Zeroizing::new([0u8; SECRET_KEY_LENGTH]);
    OsRng
        .try_fill_bytes(&mut seed[..])
        .map_err(|e| Error::Generation(format!("OS random source failed: {}", e)))?;
    Ok(SigningKey::from_bytes(&seed))
}

/// Refuse to sign with a keypair whose public half belongs to another secret
pub(crate) fn check_public_half(signing_key: &SigningKey, pubkey: &[u8]) -> Result<()> {
    if signing_key.verifying_key().as_bytes().as_slice() != pubkey {
        return Err(Error::Signing(
            "public key does not belong to secret key".to_string(),
        ));
    }
    Ok(())
}

/// Why a signature was not accepted
#[derive(Debug)]
pub(crate) enum VerifyFailure {
    /// The encoded signature is outside the wire grammar
    MalformedSignature(Error),
    /// The public key could not be turned into a curve point
    MalformedKey(String),
    /// Well-formed inputs, but the signature does not match
    Mismatch,
}

/// Collapse a verification outcome into the two observable answers
pub(crate) fn verdict(outcome: std::result::Result<(), VerifyFailure>) -> bool {
    match outcome {
        Ok(()) => true,
        Err(VerifyFailure::MalformedSignature(e)) => {
            debug!(error = %e, "Signature rejected: malformed encoding");
            false
        }
        Err(VerifyFailure::MalformedKey(reason)) => {
            debug!(%reason, "Signature rejected: malformed public key");
            false
        }
        Err(VerifyFailure::Mismatch) => {
            debug!("Signature rejected: does not match message and key");
            false
        }
    }
}
