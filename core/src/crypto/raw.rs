//! Ed25519 over compact keys, no DER containers
//!
//! Produces byte-identical keys and signatures to [`super::DerCrypto`]; the
//! two are interchangeable behind [`LowLevelCrypto`].

use super::encoding::{decode_sig, encode_sig};
use super::{check_public_half, random_signing_key, verdict, LowLevelCrypto, VerifyFailure};
use crate::types::{EncodedSig, KeypairBuffers, PUBLIC_KEY_LENGTH};
use crate::Result;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use tracing::debug;

/// Backend that feeds 32-byte keys straight into the Ed25519 primitive
#[derive(Debug, Clone, Copy, Default)]
pub struct RawCrypto;

impl LowLevelCrypto for RawCrypto {
    fn generate_keypair_buffers(&self) -> Result<KeypairBuffers> {
        let signing_key = random_signing_key()?;
        let keypair = KeypairBuffers {
            pubkey: signing_key.verifying_key().to_bytes(),
            secret: signing_key.to_bytes(),
        };

        debug!(pubkey = %hex::encode(&keypair.pubkey[..8]), "Generated Ed25519 keypair");
        Ok(keypair)
    }

    fn sign(&self, keypair: &KeypairBuffers, msg: &[u8]) -> Result<EncodedSig> {
        let signing_key = SigningKey::from_bytes(&keypair.secret);
        check_public_half(&signing_key, &keypair.pubkey)?;

        Ok(encode_sig(&signing_key.sign(msg).to_bytes()))
    }

    fn verify(&self, public_key: &[u8], sig: &EncodedSig, msg: &[u8]) -> bool {
        verdict(check_signature(public_key, sig, msg))
    }
}

fn check_signature(
    public_key: &[u8],
    sig: &EncodedSig,
    msg: &[u8],
) -> std::result::Result<(), VerifyFailure> {
    let bytes: &[u8; PUBLIC_KEY_LENGTH] = public_key.try_into().map_err(|_| {
        VerifyFailure::MalformedKey(format!(
            "expected {} bytes, got {}",
            PUBLIC_KEY_LENGTH,
            public_key.len()
        ))
    })?;
    let verifying_key =
        VerifyingKey::from_bytes(bytes).map_err(|e| VerifyFailure::MalformedKey(e.to_string()))?;
    let raw = decode_sig(sig).map_err(VerifyFailure::MalformedSignature)?;

    verifying_key
        .verify(msg, &Signature::from_bytes(&raw))
        .map_err(|_| VerifyFailure::Mismatch)
}
