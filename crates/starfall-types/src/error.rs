//! Error types for Starfall.

use std::io;

/// Errors produced by the starfall crates.
#[derive(Debug, thiserror::Error)]
pub enum StarfallError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("stage error: {0}")]
    Stage(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, StarfallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_display() {
        let e = StarfallError::Backend("init failed".into());
        assert_eq!(format!("{e}"), "backend error: init failed");
    }

    #[test]
    fn stage_error_display() {
        let e = StarfallError::Stage("sprite not found: 3".into());
        assert_eq!(format!("{e}"), "stage error: sprite not found: 3");
    }

    #[test]
    fn config_error_display() {
        let e = StarfallError::Config("screen_width must be non-zero".into());
        assert_eq!(format!("{e}"), "config error: screen_width must be non-zero");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: StarfallError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let bad_toml = "this is [[[not valid toml";
        let toml_err = toml::from_str::<toml::Value>(bad_toml).unwrap_err();
        let e: StarfallError = toml_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("TOML parse error"));
    }

    #[test]
    fn error_is_debug() {
        let e = StarfallError::Stage("test".into());
        let dbg = format!("{e:?}");
        assert!(dbg.contains("Stage"));
    }

    #[test]
    fn result_alias_ok() {
        let r: Result<i32> = Ok(42);
        assert_eq!(r.unwrap(), 42);
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(StarfallError::Backend("oops".into()));
        assert!(r.is_err());
    }
}
