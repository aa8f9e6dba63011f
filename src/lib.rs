//! Twin-Core: signal synthesis and gait pose engine for digital-twin rendering
//!
//! This library provides the simulation core behind a real-time "digital
//! twin" visualization: a humanoid rig driven by a synthetic gait cycle,
//! overlaid with simulated 64-channel EEG and 8-channel EMG signals. It
//! features:
//!
//! - Procedural gait-phase-driven skeletal posing over a fixed joint arena
//! - Dual-rate multi-channel signal synthesis into circular histories
//! - Windowed RMS / rectified-mean aggregation and waveform extraction
//! - Seedable randomness for reproducible simulation runs
//!
//! # Quick Start
//!
//! ```rust
//! use twin_core::config::TwinConfig;
//! use twin_core::sim::TwinSimulation;
//! use twin_core::signal::SignalFamily;
//!
//! let mut sim = TwinSimulation::new(TwinConfig::default());
//!
//! // Host render loop: one advance per frame, then consumer reads.
//! for _ in 0..120 {
//!     sim.advance(1.0 / 60.0);
//! }
//!
//! let snapshot = sim.snapshot();
//! let wave = sim.waveform(SignalFamily::Emg, 0, 256);
//! assert_eq!(snapshot.eeg_rms.len(), 64);
//! assert_eq!(wave.len(), 256);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod pose;
pub mod signal;
pub mod sim;

// Re-export commonly used types for convenience
pub use config::{GaitConfig, SignalConfig, TwinConfig};
pub use error::{TwinError, TwinResult};
pub use pose::{GaitPoseEngine, JointId};
pub use signal::{SignalAggregator, SignalFamily, SignalSnapshot};
pub use sim::TwinSimulation;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(!VERSION.is_empty());
        assert!(!NAME.is_empty());
    }
}
