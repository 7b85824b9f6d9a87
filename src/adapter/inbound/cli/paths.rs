//! Path utilities for waitlens.
//!
//! The default configuration lives at `~/.waitlens/config.toml`.

use std::path::PathBuf;

/// Returns the waitlens home directory (`~/.waitlens/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".waitlens")
}

/// Returns the default config file path (`~/.waitlens/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_waitlens_home() {
        let home = home_dir();
        assert!(home.ends_with(".waitlens"));
        assert!(default_config().starts_with(&home));
    }
}
