//! Error types
//!
//! Geometry is validated once at construction; simulation ticks never fail.

use std::path::PathBuf;

use glam::DVec2;
use thiserror::Error;

/// Degenerate or malformed shape input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("polygon needs at least 3 distinct vertices, found {found}")]
    TooFewVertices { found: usize },
    #[error("line endpoints coincide at ({}, {})", .at.x, .at.y)]
    ZeroLengthLine { at: DVec2 },
    #[error("circle radius must be finite and positive, got {radius}")]
    InvalidRadius { radius: f64 },
    #[error("coordinates must be finite")]
    NonFinite,
}

/// Settings could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing settings: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
    #[error("invalid settings: {message}")]
    Invalid { message: String },
}

/// A game could not be started
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_messages() {
        let err = ShapeError::TooFewVertices { found: 2 };
        assert_eq!(err.to_string(), "polygon needs at least 3 distinct vertices, found 2");

        let err = ShapeError::ZeroLengthLine { at: DVec2::new(1.0, 2.0) };
        assert_eq!(err.to_string(), "line endpoints coincide at (1, 2)");
    }

    #[test]
    fn test_config_error_from_json() {
        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ConfigError = source.into();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("parsing settings:"));
    }

    #[test]
    fn test_game_error_wraps_both() {
        let err: GameError = ShapeError::NonFinite.into();
        assert_eq!(err.to_string(), "coordinates must be finite");

        let err: GameError = ConfigError::Invalid {
            message: "tick_rate must be at least 1".to_string(),
        }
        .into();
        assert!(matches!(err, GameError::Config(ConfigError::Invalid { .. })));
        assert_eq!(err.to_string(), "invalid settings: tick_rate must be at least 1");
    }
}
