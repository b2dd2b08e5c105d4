//! Error types for input resolution.
//!
//! This module provides:
//! - `Stage`: Indicates where resolution failed
//! - `InputError`: The resolver's error taxonomy
//! - `ConfigError`: Failures while loading settings files
//! - `CliError`: Failures while parsing command-line flags

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Turning the requested path into an absolute one
    ResolvePath,
    /// Checking that the target exists
    Locate,
    /// Error while opening the I/O stream
    Open,
    Read,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::ResolvePath => write!(f, "ResolvePath"),
            Stage::Locate => write!(f, "Locate"),
            Stage::Open => write!(f, "Open"),
            Stage::Read => write!(f, "Read"),
        }
    }
}

/// Errors surfaced by [`InputResolver`](crate::InputResolver).
///
/// None of these are retried; each one ends the current invocation.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to resolve path {}: {source}", path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to open file {target}: {source}")]
    Open {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input {target}: {source}")]
    Read {
        target: String,
        #[source]
        source: io::Error,
    },
}

impl InputError {
    /// Stage of the resolution where this error occurred.
    pub fn stage(&self) -> Stage {
        match self {
            InputError::PathResolution { .. } => Stage::ResolvePath,
            InputError::NotFound { .. } => Stage::Locate,
            InputError::Open { .. } => Stage::Open,
            InputError::Read { .. } => Stage::Read,
        }
    }

    /// Identifier of the offending input ("-" for stdin, a path otherwise).
    pub fn target(&self) -> String {
        match self {
            InputError::PathResolution { path, .. } | InputError::NotFound { path } => {
                path.to_string_lossy().into_owned()
            }
            InputError::Open { target, .. } | InputError::Read { target, .. } => target.clone(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, InputError::NotFound { .. })
    }
}

/// Errors raised while loading a settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors raised by the manual argv parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid arguments: {0}")]
    Parse(String),
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
