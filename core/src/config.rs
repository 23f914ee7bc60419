//! Crypto configuration

use crate::crypto::{Backend, LowLevelCrypto};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};

/// Environment variable naming the backend (`der` or `raw`)
pub const BACKEND_ENV: &str = "SIGIL_BACKEND";

/// Crypto layer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptoConfig {
    pub backend: Backend,
}

impl CryptoConfig {
    /// Read configuration from the environment, falling back to defaults
    pub fn from_env() -> Result<Self> {
        match env::var(BACKEND_ENV) {
            Ok(value) => Self::from_value(Some(&value)),
            Err(VarError::NotPresent) => Self::from_value(None),
            Err(VarError::NotUnicode(raw)) => {
                Err(Error::UnknownBackend(raw.to_string_lossy().into_owned()))
            }
        }
    }

    fn from_value(value: Option<&str>) -> Result<Self> {
        let backend = match value {
            Some(name) if !name.trim().is_empty() => name.parse()?,
            _ => Backend::default(),
        };
        Ok(Self { backend })
    }

    /// The backend this configuration selects
    pub fn crypto(&self) -> &'static dyn LowLevelCrypto {
        self.backend.crypto()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_or_blank_is_default() {
        assert_eq!(CryptoConfig::from_value(None).unwrap(), CryptoConfig::default());
        assert_eq!(CryptoConfig::from_value(Some("  ")).unwrap().backend, Backend::Der);
    }

    #[test]
    fn test_named_backend() {
        let config = CryptoConfig::from_value(Some("raw")).unwrap();
        assert_eq!(config.backend, Backend::Raw);
    }

    #[test]
    fn test_unknown_backend_fails() {
        assert!(matches!(
            CryptoConfig::from_value(Some("rsa")),
            Err(Error::UnknownBackend(_))
        ));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: CryptoConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.backend, Backend::Der);

        let config: CryptoConfig = serde_json::from_str(r#"{"backend":"raw"}"#).unwrap();
        assert_eq!(config.backend, Backend::Raw);
    }
}
