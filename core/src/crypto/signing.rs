//! Ed25519 signing and verification through DER-wrapped keys
//!
//! Keys are handed to the Ed25519 primitive as SPKI / PKCS#8 documents, the
//! way containers built by other toolchains (OpenSSL, Node) expect them. The
//! compact 32-byte form is converted at the edges by [`super::der`].

use super::der::{self, lengthen_public, lengthen_secret};
use super::encoding::{decode_sig, encode_sig};
use super::{check_public_half, random_signing_key, verdict, LowLevelCrypto, VerifyFailure};
use crate::types::{EncodedSig, KeypairBuffers, KeypairDer};
use crate::{Error, Result};
use ed25519_dalek::pkcs8::{
    DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, KeypairBytes,
};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use tracing::{debug, warn};
use zeroize::Zeroizing;

/// Backend that routes every key through its DER container
#[derive(Debug, Clone, Copy, Default)]
pub struct DerCrypto;

impl LowLevelCrypto for DerCrypto {
    fn generate_keypair_buffers(&self) -> Result<KeypairBuffers> {
        let der = generate_keypair_der()?;
        let keypair = der::shorten(&der).map_err(|e| Error::Generation(e.to_string()))?;

        debug!(pubkey = %hex::encode(&keypair.pubkey[..8]), "Generated Ed25519 keypair");
        Ok(keypair)
    }

    fn sign(&self, keypair: &KeypairBuffers, msg: &[u8]) -> Result<EncodedSig> {
        let der = Zeroizing::new(lengthen_secret(&keypair.secret));
        let signing_key = SigningKey::from_pkcs8_der(&der).map_err(|e| {
            warn!(error = %e, "PKCS#8 secret key rejected");
            Error::Signing(format!("invalid PKCS#8 secret key: {}", e))
        })?;
        check_public_half(&signing_key, &keypair.pubkey)?;

        let sig = signing_key.sign(msg);
        Ok(encode_sig(&sig.to_bytes()))
    }

    fn verify(&self, public_key: &[u8], sig: &EncodedSig, msg: &[u8]) -> bool {
        verdict(check_signature(public_key, sig, msg))
    }
}

/// Generate a keypair with both halves DER-encoded
/// (44-byte SPKI public key, 48-byte PKCS#8 v1 secret key)
pub fn generate_keypair_der() -> Result<KeypairDer> {
    let signing_key = random_signing_key()?;

    // No public key in the private container: PKCS#8 v1, fixed 48 bytes
    let secret = KeypairBytes {
        secret_key: signing_key.to_bytes(),
        public_key: None,
    }
    .to_pkcs8_der()
    .map_err(|e| Error::Generation(format!("PKCS#8 encoding failed: {}", e)))?;

    let pubkey = signing_key
        .verifying_key()
        .to_public_key_der()
        .map_err(|e| Error::Generation(format!("SPKI encoding failed: {}", e)))?;

    Ok(KeypairDer {
        pubkey: pubkey.as_bytes().to_vec(),
        secret: secret.as_bytes().to_vec(),
    })
}

fn check_signature(
    public_key: &[u8],
    sig: &EncodedSig,
    msg: &[u8],
) -> std::result::Result<(), VerifyFailure> {
    let verifying_key = VerifyingKey::from_public_key_der(&lengthen_public(public_key))
        .map_err(|e| VerifyFailure::MalformedKey(e.to_string()))?;
    let raw = decode_sig(sig).map_err(VerifyFailure::MalformedSignature)?;

    verifying_key
        .verify(msg, &Signature::from_bytes(&raw))
        .map_err(|_| VerifyFailure::Mismatch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::der::{PUBLIC_KEY_DER_LENGTH, SECRET_KEY_DER_LENGTH};

    #[test]
    fn test_generated_der_sizes() {
        let der = generate_keypair_der().unwrap();

        assert_eq!(der.pubkey.len(), PUBLIC_KEY_DER_LENGTH);
        assert_eq!(der.secret.len(), SECRET_KEY_DER_LENGTH);
    }

    #[test]
    fn test_lengthened_keys_parse_back() {
        let keypair = DerCrypto.generate_keypair_buffers().unwrap();

        let secret = SigningKey::from_pkcs8_der(&lengthen_secret(&keypair.secret)).unwrap();
        let public = VerifyingKey::from_public_key_der(&lengthen_public(&keypair.pubkey)).unwrap();

        assert_eq!(secret.to_bytes(), keypair.secret);
        assert_eq!(public.to_bytes(), keypair.pubkey);
        assert_eq!(secret.verifying_key(), public);
    }

    #[test]
    fn test_sign_verify() {
        let keypair = DerCrypto.generate_keypair_buffers().unwrap();
        let message = b"Hello, Sigil!";

        let signature = DerCrypto.sign(&keypair, message).unwrap();

        assert!(DerCrypto.verify(&keypair.pubkey, &signature, message));
    }

    #[test]
    fn test_invalid_signature() {
        let keypair1 = DerCrypto.generate_keypair_buffers().unwrap();
        let keypair2 = DerCrypto.generate_keypair_buffers().unwrap();
        let message = b"Test message";

        let signature = DerCrypto.sign(&keypair1, message).unwrap();

        assert!(!DerCrypto.verify(&keypair2.pubkey, &signature, message));
    }

    #[test]
    fn test_sign_rejects_mismatched_pubkey() {
        let keypair1 = DerCrypto.generate_keypair_buffers().unwrap();
        let keypair2 = DerCrypto.generate_keypair_buffers().unwrap();
        let franken = KeypairBuffers {
            pubkey: keypair2.pubkey,
            secret: keypair1.secret,
        };

        let err = DerCrypto.sign(&franken, b"msg").unwrap_err();
        assert!(matches!(err, Error::Signing(_)));
    }

    #[test]
    fn test_truncated_secret_der_is_rejected() {
        // What signing would see if a 31-byte secret slipped through
        let der = lengthen_secret(&[9u8; 31]);
        assert!(SigningKey::from_pkcs8_der(&der).is_err());
    }

    #[test]
    fn test_check_signature_reasons() {
        let keypair = DerCrypto.generate_keypair_buffers().unwrap();
        let sig = DerCrypto.sign(&keypair, b"msg").unwrap();

        assert!(check_signature(&keypair.pubkey, &sig, b"msg").is_ok());
        assert!(matches!(
            check_signature(&keypair.pubkey[..31], &sig, b"msg"),
            Err(VerifyFailure::MalformedKey(_))
        ));
        assert!(matches!(
            check_signature(&keypair.pubkey, &EncodedSig::from("nope"), b"msg"),
            Err(VerifyFailure::MalformedSignature(_))
        ));
        assert!(matches!(
            check_signature(&keypair.pubkey, &sig, b"other"),
            Err(VerifyFailure::Mismatch)
        ));
    }
}
