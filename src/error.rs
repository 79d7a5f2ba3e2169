//! Error type shared by the persistence and configuration layers.
//!
//! Gameplay code never fails; only the edges (files, SDL setup) do, and those
//! report through `GameError`. SDL calls themselves keep returning
//! `Result<_, String>` the way the sdl2 crate does.

use std::fmt;

/// Errors raised while touching the outside world
#[derive(Debug)]
pub enum GameError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
    Sdl(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Io(e) => write!(f, "IO error: {}", e),
            GameError::Serialization(e) => write!(f, "Serialization error: {}", e),
            GameError::Sdl(msg) => write!(f, "SDL error: {}", msg),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            GameError::Serialization(e) => Some(e),
            GameError::Sdl(_) => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Serialization(err)
    }
}

impl GameError {
    /// True when the underlying IO error is a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(self, GameError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        let missing: GameError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(missing.is_not_found());

        let denied: GameError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope").into();
        assert!(!denied.is_not_found());

        assert!(!GameError::Sdl("no video".to_string()).is_not_found());
    }

    #[test]
    fn test_display_prefixes() {
        let err = GameError::Sdl("no video".to_string());
        assert_eq!(err.to_string(), "SDL error: no video");

        let bad_json = serde_json::from_str::<u32>("{").unwrap_err();
        let err: GameError = bad_json.into();
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
