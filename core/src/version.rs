//! Version information for Sigil
//!
//! This module provides version constants.

/// Sigil version (semver format)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit hash (if available)
pub const GIT_HASH: Option<&str> = option_env!("GIT_HASH");

/// Build profile (debug/release)
pub const BUILD_PROFILE: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "release"
};

/// Full version string with metadata
pub fn version_string() -> String {
    let mut version = format!("Sigil v{}", VERSION);

    if let Some(hash) = GIT_HASH {
        version.push_str(&format!(" ({})", &hash[..hash.len().min(8)]));
    }

    if BUILD_PROFILE == "debug" {
        version.push_str(" [debug]");
    }

    version
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string() {
        let version_str = version_string();
        assert!(version_str.starts_with(&format!("Sigil v{}", VERSION)));
    }

    #[test]
    fn test_debug_marker() {
        let version_str = version_string();
        assert_eq!(version_str.ends_with("[debug]"), cfg!(debug_assertions));
    }
}
