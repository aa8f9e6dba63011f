// src/signal/display.rs
//! Intensity mapping for LED/marker renderers
//!
//! Presentation helpers, not part of the aggregation contract: downstream
//! renderers map raw RMS/envelope values into normalized [0, 1] display
//! intensity. Kept here so every consumer normalizes identically.

use crate::config::constants::display::{EEG_INTENSITY_DIVISOR, EMG_INTENSITY_SCALE};

/// Map an EEG RMS value (typically 0..3) to display intensity in [0, 1].
#[inline]
pub fn eeg_intensity(rms: f32) -> f32 {
    (rms / EEG_INTENSITY_DIVISOR).min(1.0)
}

/// Map an EMG envelope value (typically 0..1.2) to display intensity in [0, 1].
#[inline]
pub fn emg_intensity(envelope: f32) -> f32 {
    (envelope * EMG_INTENSITY_SCALE).min(1.0)
}
