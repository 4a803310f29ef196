//! Error types for NOCT.

use std::io;

/// Errors produced by the NOCT framework.
#[derive(Debug, thiserror::Error)]
pub enum NoctError {
    #[error("config error: {0}")]
    Config(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("command error: {0}")]
    Command(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, NoctError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let e = NoctError::Config("missing section".into());
        assert_eq!(format!("{e}"), "config error: missing section");
    }

    #[test]
    fn render_error_display() {
        let e = NoctError::Render("terminal too small".into());
        assert_eq!(format!("{e}"), "render error: terminal too small");
    }

    #[test]
    fn command_error_display() {
        let e = NoctError::Command("bad registration".into());
        assert_eq!(format!("{e}"), "command error: bad registration");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: NoctError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let bad_toml = "this is [[[not valid toml";
        let toml_err = toml::from_str::<toml::Value>(bad_toml).unwrap_err();
        let e: NoctError = toml_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("TOML parse error"));
    }

    #[test]
    fn error_is_debug() {
        let e = NoctError::Render("test".into());
        let dbg = format!("{e:?}");
        assert!(dbg.contains("Render"));
    }

    #[test]
    fn result_alias_ok() {
        let r: Result<i32> = Ok(42);
        assert_eq!(r.unwrap(), 42);
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(NoctError::Config("oops".into()));
        assert!(r.is_err());
    }
}
