//! Demo configuration loaded from TOML.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StarfallError};

/// Window and content settings for the demo.
///
/// Every field has a default, so an empty or missing TOML file yields a
/// usable configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StarfallConfig {
    /// Window title.
    #[serde(default = "default_window_title")]
    pub window_title: String,
    /// Window width in pixels.
    #[serde(default = "default_screen_width")]
    pub screen_width: u32,
    /// Window height in pixels.
    #[serde(default = "default_screen_height")]
    pub screen_height: u32,
    /// Side length of the generated star texture in pixels.
    #[serde(default = "default_star_size")]
    pub star_size: u32,
}

fn default_window_title() -> String {
    "Starfall".to_string()
}

fn default_screen_width() -> u32 {
    800
}

fn default_screen_height() -> u32 {
    600
}

fn default_star_size() -> u32 {
    64
}

impl Default for StarfallConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            screen_width: default_screen_width(),
            screen_height: default_screen_height(),
            star_size: default_star_size(),
        }
    }
}

impl StarfallConfig {
    /// Parse a configuration from a TOML string and validate it.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load a configuration file, falling back to defaults when the file
    /// does not exist. A file that exists but fails to parse or validate
    /// is an error, not a silent fallback.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("no config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Check that the configuration describes a usable window.
    pub fn validate(&self) -> Result<()> {
        if self.screen_width == 0 {
            return Err(StarfallError::Config(
                "screen_width must be non-zero".into(),
            ));
        }
        if self.screen_height == 0 {
            return Err(StarfallError::Config(
                "screen_height must be non-zero".into(),
            ));
        }
        if self.star_size == 0 {
            return Err(StarfallError::Config("star_size must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = StarfallConfig::default();
        assert_eq!(config.window_title, "Starfall");
        assert_eq!(config.screen_width, 800);
        assert_eq!(config.screen_height, 600);
        assert_eq!(config.star_size, 64);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = StarfallConfig::from_toml_str("").unwrap();
        assert_eq!(config, StarfallConfig::default());
    }

    #[test]
    fn partial_toml_fills_remaining_defaults() {
        let toml = r#"
screen_width = 1024
"#;
        let config = StarfallConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.screen_width, 1024);
        assert_eq!(config.screen_height, 600);
        assert_eq!(config.window_title, "Starfall");
    }

    #[test]
    fn full_toml_overrides_everything() {
        let toml = r#"
window_title = "Night Sky"
screen_width = 1280
screen_height = 720
star_size = 48
"#;
        let config = StarfallConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.window_title, "Night Sky");
        assert_eq!(config.screen_width, 1280);
        assert_eq!(config.screen_height, 720);
        assert_eq!(config.star_size, 48);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let result = StarfallConfig::from_toml_str("this is not valid toml [[[");
        assert!(result.is_err());
    }

    #[test]
    fn zero_width_rejected() {
        let result = StarfallConfig::from_toml_str("screen_width = 0");
        assert!(matches!(result, Err(StarfallError::Config(_))));
    }

    #[test]
    fn zero_star_size_rejected() {
        let result = StarfallConfig::from_toml_str("star_size = 0");
        assert!(matches!(result, Err(StarfallError::Config(_))));
    }

    #[test]
    fn load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");
        let config = StarfallConfig::load_or_default(&path).unwrap();
        assert_eq!(config, StarfallConfig::default());
    }

    #[test]
    fn load_or_default_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("starfall.toml");
        std::fs::write(&path, "screen_width = 640\nscreen_height = 480\n").unwrap();
        let config = StarfallConfig::load_or_default(&path).unwrap();
        assert_eq!(config.screen_width, 640);
        assert_eq!(config.screen_height, 480);
    }

    #[test]
    fn load_or_default_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("starfall.toml");
        std::fs::write(&path, "screen_width = \"wide\"\n").unwrap();
        assert!(StarfallConfig::load_or_default(&path).is_err());
    }
}
