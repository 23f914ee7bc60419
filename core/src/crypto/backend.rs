//! Backend selection

use super::{DerCrypto, LowLevelCrypto, RawCrypto};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which [`LowLevelCrypto`] implementation to use
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Keys pass through SPKI / PKCS#8 containers
    #[default]
    Der,
    /// Keys go to the primitive as raw 32-byte values
    Raw,
}

impl Backend {
    pub const ALL: [Backend; 2] = [Backend::Der, Backend::Raw];

    pub fn crypto(self) -> &'static dyn LowLevelCrypto {
        match self {
            Backend::Der => &DerCrypto,
            Backend::Raw => &RawCrypto,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Backend::Der => "der",
            Backend::Raw => "raw",
        }
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Backend::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownBackend(name.to_string()))
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
