// src/error.rs
//! Unified error handling for the twin simulation core
//!
//! The numeric core itself has no fallible operations: `step`/`update` are
//! deterministic generators whose only failure modes are caller contract
//! violations (checked with debug assertions). Errors surface only around the
//! configuration boundary, where files are read, parsed, and validated.

use thiserror::Error;

/// Errors produced while loading or validating simulation configuration.
#[derive(Debug, Error)]
pub enum TwinError {
    /// A configuration value failed range or consistency validation.
    #[error("invalid configuration for {component}: {reason}")]
    Configuration {
        /// Component whose configuration was rejected (e.g. "signal", "gait").
        component: String,
        /// Human-readable description of the violated constraint.
        reason: String,
    },

    /// Configuration file could not be read.
    #[error("configuration I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed as TOML.
    #[error("configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl TwinError {
    /// Shorthand for a validation failure.
    pub fn configuration(component: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            component: component.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience result alias used across the crate.
pub type TwinResult<T> = Result<T, TwinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = TwinError::configuration("signal", "eeg_channels must be non-zero");
        let msg = err.to_string();
        assert!(msg.contains("signal"));
        assert!(msg.contains("eeg_channels"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TwinError = io.into();
        assert!(matches!(err, TwinError::Io(_)));
    }
}
