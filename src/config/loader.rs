// src/config/loader.rs
//! Configuration loading with validation

use std::path::Path;

use crate::config::TwinConfig;
use crate::error::TwinResult;

/// Parse and validate a configuration from TOML text.
///
/// Missing tables and fields fall back to their defaults, so an empty string
/// yields the reference configuration.
pub fn load_from_str(text: &str) -> TwinResult<TwinConfig> {
    let config: TwinConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Read, parse, and validate a configuration file.
pub fn load_from_path(path: impl AsRef<Path>) -> TwinResult<TwinConfig> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let config = load_from_str(&text)?;
    tracing::info!(path = %path.as_ref().display(), "loaded twin configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_defaults() {
        let config = load_from_str("").unwrap();
        assert_eq!(config.signal.eeg_channels, 64);
        assert_eq!(config.signal.emg_channels, 8);
        assert_eq!(config.signal.history_length, 512);
    }

    #[test]
    fn test_partial_override() {
        let config = load_from_str(
            r#"
            [signal]
            seed = 42
            spike_probability = 0.05

            [gait]
            cycle_rate_hz = 1.2
            "#,
        )
        .unwrap();
        assert_eq!(config.signal.seed, 42);
        assert!((config.signal.spike_probability - 0.05).abs() < f32::EPSILON);
        assert!((config.gait.cycle_rate_hz - 1.2).abs() < f32::EPSILON);
        // untouched fields keep defaults
        assert_eq!(config.signal.eeg_sample_rate_hz, 250);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = load_from_str(
            r#"
            [signal]
            history_length = 0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(load_from_str("[signal").is_err());
    }
}
