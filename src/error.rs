//! Error types for the fallible edges of the crate.
//!
//! The simulation itself never fails; only configuration and mesh loading
//! touch the filesystem or parse external data.

use std::fmt;
use std::io;

/// Errors that can occur while loading a [`crate::SimConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io(io::Error),
    /// The file is not valid JSON for the config schema.
    Parse(serde_json::Error),
    /// A value is outside its accepted range.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read config: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Errors that can occur while loading an OFF mesh.
#[derive(Debug)]
pub enum MeshError {
    /// The mesh file could not be read.
    Io(io::Error),
    /// Malformed content at the given (1-based) line.
    Parse { line: usize, message: String },
    /// The file parsed but produced no triangles.
    Empty,
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::Io(e) => write!(f, "Failed to read mesh: {}", e),
            MeshError::Parse { line, message } => {
                write!(f, "Malformed mesh at line {}: {}", line, message)
            }
            MeshError::Empty => write!(f, "Mesh contains no faces"),
        }
    }
}

impl std::error::Error for MeshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeshError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MeshError {
    fn from(e: io::Error) -> Self {
        MeshError::Io(e)
    }
}
