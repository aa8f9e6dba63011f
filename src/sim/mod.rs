// src/sim/mod.rs
//! Owned simulation context for the host frame loop
//!
//! Instead of ambient global stores, the whole per-frame mutable state lives
//! in one explicit context object constructed once and threaded through the
//! render loop. The frame protocol is fixed: pose update, then phase handoff,
//! then signal step; consumers read derived copies afterwards.

use rand::rngs::StdRng;
use tracing::info;

use crate::config::TwinConfig;
use crate::pose::GaitPoseEngine;
use crate::signal::{SignalAggregator, SignalFamily, SignalSnapshot};

/// Gait pose engine and signal aggregator bound into one frame-stepped unit.
///
/// Single-threaded by design: one writer, reads only between steps. Not safe
/// for concurrent calls.
pub struct TwinSimulation {
    pose: GaitPoseEngine,
    signals: SignalAggregator,
    speed: f32,
}

impl TwinSimulation {
    /// Build a simulation from configuration, seeding the generator from
    /// `config.signal.seed`.
    pub fn new(config: TwinConfig) -> Self {
        info!(
            eeg_channels = config.signal.eeg_channels,
            emg_channels = config.signal.emg_channels,
            seed = config.signal.seed,
            "constructing twin simulation"
        );
        Self {
            pose: GaitPoseEngine::new(config.gait),
            signals: SignalAggregator::from_config(config.signal),
            speed: 1.0,
        }
    }

    /// Build a simulation with an explicitly owned generator (useful for
    /// tests that need a generator independent of the configured seed).
    pub fn with_rng(config: TwinConfig, rng: StdRng) -> Self {
        Self {
            pose: GaitPoseEngine::new(config.gait),
            signals: SignalAggregator::new(config.signal, rng),
            speed: 1.0,
        }
    }

    /// Advance one frame: pose first, then the phase-coupled signal step.
    pub fn advance(&mut self, dt: f32) {
        self.pose.update(dt, self.speed);
        self.signals.set_gait_phase(self.pose.gait_phase());
        self.signals.step(dt, self.speed);
    }

    /// Set the playback speed multiplier (host UI exposes 0.5x / 1x / 2x).
    pub fn set_speed(&mut self, speed: f32) {
        debug_assert!(speed >= 0.0, "speed must be non-negative");
        self.speed = speed;
    }

    /// Current playback speed multiplier.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// The pose engine, for joint transform reads.
    #[inline]
    pub fn pose(&self) -> &GaitPoseEngine {
        &self.pose
    }

    /// The signal aggregator, for history statistics.
    #[inline]
    pub fn signals(&self) -> &SignalAggregator {
        &self.signals
    }

    /// Windowed amplitude summary of all channels.
    pub fn snapshot(&self) -> SignalSnapshot {
        self.signals.snapshot()
    }

    /// Recent waveform of one channel, oldest first.
    pub fn waveform(&self, family: SignalFamily, channel: usize, length: usize) -> Vec<f32> {
        self.signals.waveform(family, channel, length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_couples_phase_to_signals() {
        let mut sim = TwinSimulation::new(TwinConfig::default());
        sim.advance(0.25);
        assert_eq!(sim.pose().gait_phase(), sim.signals().gait_phase());
        assert!(sim.signals().eeg_samples_written() > 0);
    }

    #[test]
    fn test_speed_affects_both_components() {
        let mut sim = TwinSimulation::new(TwinConfig::default());
        sim.set_speed(2.0);
        sim.advance(0.016);
        // 2x speed doubles both the phase advance and the sample counts.
        assert_eq!(sim.signals().eeg_samples_written(), 8);
        let mut reference = TwinSimulation::new(TwinConfig::default());
        reference.advance(0.032);
        assert!((sim.pose().gait_phase() - reference.pose().gait_phase()).abs() < 1e-6);
    }

    #[test]
    fn test_snapshot_after_frames_is_live() {
        let mut sim = TwinSimulation::new(TwinConfig::default());
        for _ in 0..60 {
            sim.advance(1.0 / 60.0);
        }
        let snap = sim.snapshot();
        assert!(snap.eeg_rms.iter().all(|&v| v > 0.0));
        assert!(snap.emg_envelope.iter().all(|&v| v > 0.0));
    }
}
