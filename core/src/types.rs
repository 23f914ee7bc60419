//! Core value types passed across the crypto boundary

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroize;

/// Compact Ed25519 public key size
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Compact Ed25519 secret key (seed) size
pub const SECRET_KEY_LENGTH: usize = 32;

/// Raw Ed25519 signature size
pub const SIGNATURE_LENGTH: usize = 64;

/// SHA-256 digest size
pub const DIGEST_LENGTH: usize = 32;

/// Ed25519 keypair in compact form (32-byte public key, 32-byte secret seed)
///
/// The secret half is wiped when the value is dropped and never shows up in
/// `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypairBuffers {
    #[serde(with = "hex::serde")]
    pub pubkey: [u8; PUBLIC_KEY_LENGTH],
    #[serde(with = "hex::serde")]
    pub secret: [u8; SECRET_KEY_LENGTH],
}

impl KeypairBuffers {
    /// Build a keypair from untyped byte slices, checking both lengths
    pub fn from_slices(pubkey: &[u8], secret: &[u8]) -> Result<Self> {
        let pubkey = pubkey.try_into().map_err(|_| Error::InvalidKeyLength {
            expected: PUBLIC_KEY_LENGTH,
            actual: pubkey.len(),
        })?;
        let secret = secret.try_into().map_err(|_| Error::InvalidKeyLength {
            expected: SECRET_KEY_LENGTH,
            actual: secret.len(),
        })?;
        Ok(Self { pubkey, secret })
    }
}

impl fmt::Debug for KeypairBuffers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeypairBuffers")
            .field("pubkey", &hex::encode(&self.pubkey[..8]))
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl Drop for KeypairBuffers {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

/// Ed25519 keypair with both halves wrapped in DER containers
/// (SPKI public key, PKCS#8 private key)
#[derive(Clone)]
pub struct KeypairDer {
    pub pubkey: Vec<u8>,
    pub secret: Vec<u8>,
}

impl fmt::Debug for KeypairDer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeypairDer")
            .field("pubkey", &hex::encode(&self.pubkey))
            .field("secret", &format_args!("<{} bytes redacted>", self.secret.len()))
            .finish()
    }
}

impl Drop for KeypairDer {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

/// Signature in its external (transport/storage) representation
///
/// Values built by [`crate::crypto::encode_sig`] are always well-formed.
/// Values received from elsewhere are opaque until decoded, so any string is
/// accepted here and checked by [`crate::crypto::decode_sig`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedSig(String);

impl EncodedSig {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for EncodedSig {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EncodedSig {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Debug for EncodedSig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedSig({})", self.0)
    }
}

impl fmt::Display for EncodedSig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash (SHA-256)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash(#[serde(with = "hex::serde")] pub [u8; DIGEST_LENGTH]);

impl ContentHash {
    pub fn as_bytes(&self) -> &[u8; DIGEST_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for ContentHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
