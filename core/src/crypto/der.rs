//! DER codec for Ed25519 keys
//!
//! Converts between compact 32-byte keys and their DER containers by adding
//! or stripping a fixed ASN.1 header. Ed25519 containers carry no optional
//! fields here, so the header is the same for every key.

use crate::types::{KeypairBuffers, KeypairDer, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};
use crate::{Error, Result};

/// SubjectPublicKeyInfo header for an Ed25519 public key (OID 1.3.101.112)
///
/// `SEQUENCE { SEQUENCE { OID id-Ed25519 }, BIT STRING (0 unused bits) }`
pub const PUBLIC_KEY_DER_PREFIX: [u8; 12] = [
    0x30, 0x2a, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x03, 0x21, 0x00,
];

/// PKCS#8 v1 PrivateKeyInfo header for an Ed25519 secret key (OID 1.3.101.112)
///
/// `SEQUENCE { INTEGER 0, SEQUENCE { OID id-Ed25519 }, OCTET STRING { OCTET STRING } }`
pub const SECRET_KEY_DER_PREFIX: [u8; 16] = [
    0x30, 0x2e, 0x02, 0x01, 0x00, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x04, 0x22, 0x04,
    0x20,
];

/// DER-encoded public key size (SPKI)
pub const PUBLIC_KEY_DER_LENGTH: usize = PUBLIC_KEY_DER_PREFIX.len() + PUBLIC_KEY_LENGTH;

/// DER-encoded secret key size (PKCS#8 v1)
pub const SECRET_KEY_DER_LENGTH: usize = SECRET_KEY_DER_PREFIX.len() + SECRET_KEY_LENGTH;

/// Strip the DER headers from both halves of a keypair
///
/// Fails instead of truncating if either half is not exactly the size and
/// header we expect, e.g. when the key encoder starts emitting PKCS#8 v2
/// (which appends the public key to the private key container).
pub fn shorten(keypair: &KeypairDer) -> Result<KeypairBuffers> {
    let pubkey = strip(
        "public",
        &keypair.pubkey,
        &PUBLIC_KEY_DER_PREFIX,
        PUBLIC_KEY_DER_LENGTH,
    )?;
    let secret = strip(
        "secret",
        &keypair.secret,
        &SECRET_KEY_DER_PREFIX,
        SECRET_KEY_DER_LENGTH,
    )?;

    KeypairBuffers::from_slices(pubkey, secret)
}

/// Wrap a compact public key into a DER SubjectPublicKeyInfo
pub fn lengthen_public(pubkey: &[u8]) -> Vec<u8> {
    lengthen(&PUBLIC_KEY_DER_PREFIX, pubkey)
}

/// Wrap a compact secret key into a DER PKCS#8 PrivateKeyInfo
///
/// Input of the wrong size yields a container whose declared lengths do not
/// match its content; the PKCS#8 decoder rejects it.
pub fn lengthen_secret(secret: &[u8]) -> Vec<u8> {
    lengthen(&SECRET_KEY_DER_PREFIX, secret)
}

fn lengthen(prefix: &[u8], key: &[u8]) -> Vec<u8> {
    let mut der = Vec::with_capacity(prefix.len() + key.len());
    der.extend_from_slice(prefix);
    der.extend_from_slice(key);
    der
}

fn strip<'a>(
    kind: &'static str,
    der: &'a [u8],
    prefix: &[u8],
    expected_len: usize,
) -> Result<&'a [u8]> {
    if der.len() != expected_len {
        return Err(Error::MalformedDer {
            kind,
            reason: format!("expected {} bytes, got {}", expected_len, der.len()),
        });
    }

    der.strip_prefix(prefix).ok_or_else(|| Error::MalformedDer {
        kind,
        reason: "unexpected ASN.1 header".to_string(),
    })
}
