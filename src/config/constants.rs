// src/config/constants.rs
//! System-wide simulation constants

/// Signal synthesis constants
pub mod signal {
    /// Number of simulated EEG channels.
    pub const EEG_CHANNELS: usize = 64;
    /// Number of simulated EMG channels.
    pub const EMG_CHANNELS: usize = 8;
    /// Nominal EEG sample rate in Hz.
    pub const EEG_SAMPLE_RATE_HZ: u32 = 250;
    /// Nominal EMG sample rate in Hz.
    pub const EMG_SAMPLE_RATE_HZ: u32 = 1000;
    /// Per-channel circular history capacity in samples.
    pub const HISTORY_LENGTH: usize = 512;
    /// RMS aggregation window for EEG channels, in milliseconds.
    pub const RMS_WINDOW_MS: u32 = 200;
    /// Rectified-mean envelope window for EMG channels, in milliseconds.
    pub const ENVELOPE_WINDOW_MS: u32 = 80;

    /// Probability of arming one new EEG spike transient per EEG tick.
    pub const SPIKE_PROBABILITY: f32 = 0.08;
    /// Peak amplitude of the spike transient waveform.
    pub const SPIKE_AMPLITUDE: f32 = 3.0;
    /// EMG carrier gain applied before the burst envelope.
    pub const EMG_CARRIER_GAIN: f32 = 0.4;
    /// Half-range of the uniform EEG noise term.
    pub const EEG_NOISE_RANGE: f32 = 0.4;
    /// Half-range of the uniform EMG noise term.
    pub const EMG_NOISE_RANGE: f32 = 0.15;
}

/// Gait cycle constants (empirically chosen for visual plausibility;
/// preserved verbatim for behavioral parity with tuned reference values)
pub mod gait {
    /// Gait cycles per second of accumulated clock time.
    pub const CYCLE_RATE_HZ: f32 = 0.8;
    /// Pelvis rest height above the ground plane, in meters.
    pub const BASE_HEIGHT_M: f32 = 1.05;
    /// Hip swing amplitude in radians.
    pub const HIP_SWING_RAD: f32 = 0.6;
    /// Knee flexion amplitude in radians (flexion only, never hyperextended).
    pub const KNEE_FLEX_RAD: f32 = 0.9;
    /// Passive ankle coupling factor against the same-side knee.
    pub const ANKLE_COUPLING: f32 = 0.4;
    /// Shoulder counter-swing amplitude in radians.
    pub const SHOULDER_SWING_RAD: f32 = 0.4;
    /// Elbow flexion amplitude in radians.
    pub const ELBOW_FLEX_RAD: f32 = 0.3;
    /// Vertical pelvis bob amplitude in meters (double bounce per cycle).
    pub const ROOT_BOB_M: f32 = 0.06;
    /// Spine pitch sway amplitude in radians.
    pub const SPINE_SWAY_RAD: f32 = 0.08;
    /// Chest yaw sway amplitude in radians.
    pub const CHEST_SWAY_RAD: f32 = 0.08;
    /// Neck counter-pitch amplitude in radians.
    pub const NECK_SWAY_RAD: f32 = 0.06;
}

/// Display normalization constants used by downstream renderers
pub mod display {
    /// Divisor mapping EEG RMS (typically 0..3) into [0, 1] intensity.
    pub const EEG_INTENSITY_DIVISOR: f32 = 2.2;
    /// Scale mapping EMG envelope (typically 0..1.2) into [0, 1] intensity.
    pub const EMG_INTENSITY_SCALE: f32 = 1.2;
    /// Default waveform length pulled by the 2D inspector panel.
    pub const DEFAULT_WAVEFORM_LENGTH: usize = 256;
}
