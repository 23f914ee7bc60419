//! Signature codec
//!
//! The wire form of a signature is lowercase hex of the 64 raw bytes,
//! always exactly 128 characters. Uppercase digits are outside the grammar so
//! that every signature has exactly one encoding.

use crate::types::{EncodedSig, SIGNATURE_LENGTH};
use crate::{Error, Result};

/// Length of an encoded signature in characters
pub const ENCODED_SIG_LENGTH: usize = SIGNATURE_LENGTH * 2;

/// Encode a raw signature for transport
pub fn encode_sig(raw: &[u8; SIGNATURE_LENGTH]) -> EncodedSig {
    EncodedSig::from(hex::encode(raw))
}

/// Decode a signature received from elsewhere
pub fn decode_sig(sig: &EncodedSig) -> Result<[u8; SIGNATURE_LENGTH]> {
    let s = sig.as_str();

    if s.len() != ENCODED_SIG_LENGTH {
        return Err(Error::Decoding(format!(
            "expected {} characters, got {}",
            ENCODED_SIG_LENGTH,
            s.len()
        )));
    }

    if let Some(bad) = s.chars().find(|c| !matches!(c, '0'..='9' | 'a'..='f')) {
        return Err(Error::Decoding(format!("invalid character {:?}", bad)));
    }

    let mut raw = [0u8; SIGNATURE_LENGTH];
    hex::decode_to_slice(s, &mut raw).map_err(|e| Error::Decoding(e.to_string()))?;
    Ok(raw)
}
