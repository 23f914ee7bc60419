//! Command handlers for CLI

use anyhow::{Context, Result};
use sigil_core::crypto::LowLevelCrypto;
use sigil_core::{ContentHash, EncodedSig, KeypairBuffers};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::ui;

pub fn hash(
    crypto: &dyn LowLevelCrypto,
    text: Option<String>,
    file: Option<PathBuf>,
) -> Result<ExitCode> {
    let digest = digest_of(crypto, text, file)?;

    println!("{}", digest);
    Ok(ExitCode::SUCCESS)
}

fn digest_of(
    crypto: &dyn LowLevelCrypto,
    text: Option<String>,
    file: Option<PathBuf>,
) -> Result<ContentHash> {
    match (text, file) {
        (_, Some(path)) => {
            let data = fs::read(&path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            Ok(crypto.sha256(&data))
        }
        (Some(text), None) => Ok(crypto.sha256(text.as_bytes())),
        (None, None) => anyhow::bail!("Nothing to hash: pass TEXT or --file"),
    }
}

pub fn keygen(crypto: &dyn LowLevelCrypto) -> Result<ExitCode> {
    let keypair = crypto
        .generate_keypair_buffers()
        .context("Failed to generate keypair")?;

    println!("{}", serde_json::to_string_pretty(&keypair)?);
    Ok(ExitCode::SUCCESS)
}

pub fn sign(
    crypto: &dyn LowLevelCrypto,
    pubkey: &str,
    secret: &str,
    message: &str,
) -> Result<ExitCode> {
    let keypair = parse_keypair(pubkey, secret)?;
    let sig = crypto
        .sign(&keypair, message.as_bytes())
        .context("Failed to sign message")?;

    println!("{}", sig);
    Ok(ExitCode::SUCCESS)
}

pub fn verify(
    crypto: &dyn LowLevelCrypto,
    pubkey: &str,
    sig: &str,
    message: &str,
) -> Result<ExitCode> {
    // Malformed keys are passed through as-is: verification answers for them
    let pubkey = hex::decode(pubkey).unwrap_or_default();

    if crypto.verify(&pubkey, &EncodedSig::from(sig), message.as_bytes()) {
        ui::print_success("Signature is valid");
        Ok(ExitCode::SUCCESS)
    } else {
        ui::print_warning("Signature is NOT valid");
        Ok(ExitCode::FAILURE)
    }
}

fn parse_keypair(pubkey: &str, secret: &str) -> Result<KeypairBuffers> {
    let pubkey = hex::decode(pubkey).context("Public key is not valid hex")?;
    let secret = hex::decode(secret).context("Secret key is not valid hex")?;

    KeypairBuffers::from_slices(&pubkey, &secret).context("Invalid keypair")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigil_core::crypto::DerCrypto;
    use std::io::Write;

    #[test]
    fn test_parse_keypair_accepts_hex() {
        let keypair = parse_keypair(&"01".repeat(32), &"02".repeat(32)).unwrap();
        assert_eq!(keypair.pubkey, [1u8; 32]);
        assert_eq!(keypair.secret, [2u8; 32]);
    }

    #[test]
    fn test_parse_keypair_rejects_bad_input() {
        assert!(parse_keypair("zz", &"02".repeat(32)).is_err());
        assert!(parse_keypair(&"01".repeat(31), &"02".repeat(32)).is_err());
    }

    #[test]
    fn test_verify_exit_codes() {
        let keypair = DerCrypto.generate_keypair_buffers().unwrap();
        let sig = DerCrypto.sign(&keypair, b"hello").unwrap();
        let pubkey = hex::encode(keypair.pubkey);

        let code = verify(&DerCrypto, &pubkey, sig.as_str(), "hello").unwrap();
        assert!(code == ExitCode::SUCCESS);

        let code = verify(&DerCrypto, &pubkey, sig.as_str(), "hellp").unwrap();
        assert!(code == ExitCode::FAILURE);
    }

    #[test]
    fn test_verify_non_hex_pubkey_is_invalid_not_an_error() {
        let keypair = DerCrypto.generate_keypair_buffers().unwrap();
        let sig = DerCrypto.sign(&keypair, b"hello").unwrap();

        let code = verify(&DerCrypto, "zz", sig.as_str(), "hello").unwrap();
        assert!(code == ExitCode::FAILURE);

        let code = verify(&DerCrypto, "", "not a signature", "hello").unwrap();
        assert!(code == ExitCode::FAILURE);
    }

    #[test]
    fn test_hash_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"file contents to hash").unwrap();
        let path = file.path().to_path_buf();

        let digest = digest_of(&DerCrypto, None, Some(path.clone())).unwrap();
        assert_eq!(digest, sigil_core::crypto::sha256("file contents to hash"));

        // --file wins over positional text
        let digest = digest_of(&DerCrypto, Some("other".to_string()), Some(path.clone())).unwrap();
        assert_eq!(digest, sigil_core::crypto::sha256("file contents to hash"));

        let code = hash(&DerCrypto, None, Some(path)).unwrap();
        assert!(code == ExitCode::SUCCESS);
    }

    #[test]
    fn test_hash_text_and_missing_input() {
        let digest = digest_of(&DerCrypto, Some(String::new()), None).unwrap();
        assert_eq!(
            digest.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );

        assert!(digest_of(&DerCrypto, None, None).is_err());
        assert!(digest_of(&DerCrypto, None, Some(PathBuf::from("/nonexistent/sigil-input"))).is_err());
    }
}
