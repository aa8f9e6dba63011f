// src/config/mod.rs
//! Simulation configuration structures
//!
//! Mirrors the layout of a TOML configuration file: a `[signal]` table for the
//! synthetic EEG/EMG generator and a `[gait]` table for the pose engine.
//! Defaults reproduce the tuned reference behavior exactly.

pub mod constants;
pub mod loader;

use serde::{Deserialize, Serialize};

use crate::error::{TwinError, TwinResult};
use constants::{gait, signal};

/// Top-level configuration for the twin simulation core.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TwinConfig {
    /// Signal synthesis parameters.
    pub signal: SignalConfig,
    /// Gait pose parameters.
    pub gait: GaitConfig,
}

/// Parameters for the synthetic EEG/EMG signal aggregator.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Number of EEG channels.
    pub eeg_channels: usize,
    /// Number of EMG channels.
    pub emg_channels: usize,
    /// Nominal EEG sample rate in Hz.
    pub eeg_sample_rate_hz: u32,
    /// Nominal EMG sample rate in Hz.
    pub emg_sample_rate_hz: u32,
    /// Circular history capacity per channel, in samples. Also bounds the
    /// number of samples synthesized per `step` call.
    pub history_length: usize,
    /// EEG RMS aggregation window in milliseconds.
    pub rms_window_ms: u32,
    /// EMG envelope aggregation window in milliseconds.
    pub envelope_window_ms: u32,
    /// Probability of arming one new spike transient per EEG tick.
    pub spike_probability: f32,
    /// Seed for the owned pseudorandom generator; fixed seed gives
    /// reproducible simulation runs.
    pub seed: u64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            eeg_channels: signal::EEG_CHANNELS,
            emg_channels: signal::EMG_CHANNELS,
            eeg_sample_rate_hz: signal::EEG_SAMPLE_RATE_HZ,
            emg_sample_rate_hz: signal::EMG_SAMPLE_RATE_HZ,
            history_length: signal::HISTORY_LENGTH,
            rms_window_ms: signal::RMS_WINDOW_MS,
            envelope_window_ms: signal::ENVELOPE_WINDOW_MS,
            spike_probability: signal::SPIKE_PROBABILITY,
            seed: 0,
        }
    }
}

/// Parameters for the gait-phase-driven pose engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GaitConfig {
    /// Gait cycles per second of accumulated clock time.
    pub cycle_rate_hz: f32,
    /// Pelvis rest height in meters.
    pub base_height_m: f32,
    /// Hip swing amplitude in radians.
    pub hip_swing_rad: f32,
    /// Knee flexion amplitude in radians.
    pub knee_flex_rad: f32,
    /// Passive ankle coupling factor against the same-side knee.
    pub ankle_coupling: f32,
    /// Shoulder counter-swing amplitude in radians.
    pub shoulder_swing_rad: f32,
    /// Elbow flexion amplitude in radians.
    pub elbow_flex_rad: f32,
    /// Vertical pelvis bob amplitude in meters.
    pub root_bob_m: f32,
    /// Spine pitch sway amplitude in radians.
    pub spine_sway_rad: f32,
    /// Chest yaw sway amplitude in radians.
    pub chest_sway_rad: f32,
    /// Neck counter-pitch amplitude in radians.
    pub neck_sway_rad: f32,
}

impl Default for GaitConfig {
    fn default() -> Self {
        Self {
            cycle_rate_hz: gait::CYCLE_RATE_HZ,
            base_height_m: gait::BASE_HEIGHT_M,
            hip_swing_rad: gait::HIP_SWING_RAD,
            knee_flex_rad: gait::KNEE_FLEX_RAD,
            ankle_coupling: gait::ANKLE_COUPLING,
            shoulder_swing_rad: gait::SHOULDER_SWING_RAD,
            elbow_flex_rad: gait::ELBOW_FLEX_RAD,
            root_bob_m: gait::ROOT_BOB_M,
            spine_sway_rad: gait::SPINE_SWAY_RAD,
            chest_sway_rad: gait::CHEST_SWAY_RAD,
            neck_sway_rad: gait::NECK_SWAY_RAD,
        }
    }
}

impl TwinConfig {
    /// Validate all configured values against their allowed ranges.
    pub fn validate(&self) -> TwinResult<()> {
        self.signal.validate()?;
        self.gait.validate()
    }
}

impl SignalConfig {
    /// Validate signal parameters.
    pub fn validate(&self) -> TwinResult<()> {
        if self.eeg_channels == 0 || self.emg_channels == 0 {
            return Err(TwinError::configuration(
                "signal",
                "channel counts must be non-zero",
            ));
        }
        if self.eeg_sample_rate_hz == 0 || self.emg_sample_rate_hz == 0 {
            return Err(TwinError::configuration(
                "signal",
                "sample rates must be non-zero",
            ));
        }
        if self.history_length == 0 {
            return Err(TwinError::configuration(
                "signal",
                "history_length must be non-zero",
            ));
        }
        if !(0.0..=1.0).contains(&self.spike_probability) {
            return Err(TwinError::configuration(
                "signal",
                "spike_probability must lie in [0, 1]",
            ));
        }
        Ok(())
    }

    /// RMS window size in samples, bounded by the history capacity.
    pub fn rms_window_samples(&self) -> usize {
        let window =
            ((self.rms_window_ms as f32 / 1000.0) * self.eeg_sample_rate_hz as f32) as usize;
        window.clamp(1, self.history_length)
    }

    /// Envelope window size in samples, bounded by the history capacity.
    pub fn envelope_window_samples(&self) -> usize {
        let window =
            ((self.envelope_window_ms as f32 / 1000.0) * self.emg_sample_rate_hz as f32) as usize;
        window.clamp(1, self.history_length)
    }
}

impl GaitConfig {
    /// Validate gait parameters.
    pub fn validate(&self) -> TwinResult<()> {
        if self.cycle_rate_hz <= 0.0 {
            return Err(TwinError::configuration(
                "gait",
                "cycle_rate_hz must be positive",
            ));
        }
        if self.base_height_m <= 0.0 {
            return Err(TwinError::configuration(
                "gait",
                "base_height_m must be positive",
            ));
        }
        Ok(())
    }
}
