// src/signal/aggregator.rs
//! Dual-rate signal stepping and windowed aggregation
//!
//! The aggregator owns both channel banks, both synthesizers, the cumulative
//! signal clock, and the pseudorandom generator. One writer, synchronous
//! reads: not safe for concurrent use. Consumers receive derived copies,
//! never references into the ring storage.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::SignalConfig;
use crate::signal::features::{windowed_mean_abs, windowed_rms};
use crate::signal::ring::ChannelBank;
use crate::signal::synthesis::{EegSynth, EmgSynth};

/// Signal family selector for waveform queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalFamily {
    /// 64-channel EEG history at 250 Hz nominal.
    Eeg,
    /// 8-channel EMG history at 1000 Hz nominal.
    Emg,
}

/// Windowed amplitude summary of all channels, derived on demand.
#[derive(Debug, Clone)]
pub struct SignalSnapshot {
    /// Per-channel RMS over the EEG aggregation window.
    pub eeg_rms: Vec<f32>,
    /// Per-channel rectified mean over the EMG aggregation window.
    pub emg_envelope: Vec<f32>,
}

/// Multi-channel signal synthesis engine with circular histories.
pub struct SignalAggregator {
    config: SignalConfig,
    eeg: ChannelBank,
    emg: ChannelBank,
    eeg_synth: EegSynth,
    emg_synth: EmgSynth,
    rng: StdRng,
    gait_phase: f32,
    /// Cumulative EEG sample time in seconds.
    time: f64,
    rms_window: usize,
    envelope_window: usize,
}

impl SignalAggregator {
    /// Create an aggregator with an explicitly owned generator.
    pub fn new(config: SignalConfig, rng: StdRng) -> Self {
        let rms_window = config.rms_window_samples();
        let envelope_window = config.envelope_window_samples();
        Self {
            eeg: ChannelBank::new(config.eeg_channels, config.history_length),
            emg: ChannelBank::new(config.emg_channels, config.history_length),
            eeg_synth: EegSynth::new(config.eeg_channels, config.spike_probability),
            emg_synth: EmgSynth::new(config.emg_channels),
            rng,
            gait_phase: 0.0,
            time: 0.0,
            rms_window,
            envelope_window,
            config,
        }
    }

    /// Create an aggregator seeded from the configured seed.
    pub fn from_config(config: SignalConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::new(config, rng)
    }

    /// Store the gait phase used by EMG burst synthesis.
    ///
    /// No validation: the caller must supply a wrapped value in `[0, 1)`,
    /// otherwise burst timing silently shifts.
    #[inline]
    pub fn set_gait_phase(&mut self, phase: f32) {
        self.gait_phase = phase;
    }

    /// Advance both histories by the number of samples implied by `dt` and
    /// `speed` at each family's nominal rate.
    ///
    /// At least one sample per family is synthesized per call, trading
    /// long-run rate accuracy for step-wise liveness at high frame rates.
    /// At most `history_length` samples per family are synthesized per call:
    /// anything beyond that would only overwrite itself within this same
    /// call, so a multi-second stall (e.g. a suspended host) produces one
    /// full buffer of fresh data and a documented discontinuity in signal
    /// time rather than unbounded work.
    pub fn step(&mut self, dt: f32, speed: f32) {
        debug_assert!(dt >= 0.0, "dt must be non-negative");
        debug_assert!(speed >= 0.0, "speed must be non-negative");

        let eeg_ticks = self.sample_count(dt, self.config.eeg_sample_rate_hz, speed);
        let emg_ticks = self.sample_count(dt, self.config.emg_sample_rate_hz, speed);

        let eeg_dt = 1.0 / f64::from(self.config.eeg_sample_rate_hz);
        let emg_dt = 1.0 / f64::from(self.config.emg_sample_rate_hz);

        for _ in 0..eeg_ticks {
            self.time += eeg_dt;
            self.eeg.advance();
            for ch in 0..self.config.eeg_channels {
                let value = self.eeg_synth.sample(ch, self.time, &mut self.rng);
                self.eeg.write(ch, value);
            }
            self.eeg_synth.maybe_trigger_spike(&mut self.rng);
        }

        for i in 0..emg_ticks {
            self.emg.advance();
            let local_t = self.time + i as f64 * emg_dt;
            for ch in 0..self.config.emg_channels {
                let value = self
                    .emg_synth
                    .sample(ch, local_t, self.gait_phase, &mut self.rng);
                self.emg.write(ch, value);
            }
        }
    }

    fn sample_count(&self, dt: f32, rate_hz: u32, speed: f32) -> usize {
        let implied = (f64::from(dt) * f64::from(rate_hz) * f64::from(speed)).floor() as usize;
        let ticks = implied.max(1);
        if ticks > self.config.history_length {
            debug!(
                implied = ticks,
                clamp = self.config.history_length,
                rate_hz,
                "samples-per-step clamp engaged"
            );
            return self.config.history_length;
        }
        ticks
    }

    /// Windowed amplitude summary of every channel. Derived, never stored;
    /// all zeros before the first `step` call.
    pub fn snapshot(&self) -> SignalSnapshot {
        SignalSnapshot {
            eeg_rms: (0..self.config.eeg_channels)
                .map(|ch| windowed_rms(&self.eeg, ch, self.rms_window))
                .collect(),
            emg_envelope: (0..self.config.emg_channels)
                .map(|ch| windowed_mean_abs(&self.emg, ch, self.envelope_window))
                .collect(),
        }
    }

    /// Most recent `length` samples of one channel, oldest first.
    ///
    /// `channel` must lie in the configured range for `family`; violations
    /// are a caller contract bug (checked with a debug assertion, panicking
    /// on out-of-range indexing otherwise).
    pub fn waveform(&self, family: SignalFamily, channel: usize, length: usize) -> Vec<f32> {
        match family {
            SignalFamily::Eeg => self.eeg.waveform(channel, length),
            SignalFamily::Emg => self.emg.waveform(channel, length),
        }
    }

    /// Gait phase currently used for EMG burst timing.
    #[inline]
    pub fn gait_phase(&self) -> f32 {
        self.gait_phase
    }

    /// Total EEG samples written per channel since construction.
    #[inline]
    pub fn eeg_samples_written(&self) -> u64 {
        self.eeg.total_written()
    }

    /// Total EMG samples written per channel since construction.
    #[inline]
    pub fn emg_samples_written(&self) -> u64 {
        self.emg.total_written()
    }

    /// The signal configuration this aggregator was built with.
    #[inline]
    pub fn config(&self) -> &SignalConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SignalConfig;

    fn aggregator() -> SignalAggregator {
        SignalAggregator::from_config(SignalConfig::default())
    }

    #[test]
    fn test_cold_start_snapshot_is_zero() {
        let agg = aggregator();
        let snap = agg.snapshot();
        assert_eq!(snap.eeg_rms.len(), 64);
        assert_eq!(snap.emg_envelope.len(), 8);
        assert!(snap.eeg_rms.iter().all(|&v| v == 0.0));
        assert!(snap.emg_envelope.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_minimum_one_sample_per_step() {
        let mut agg = aggregator();
        agg.step(0.0001, 1.0);
        assert_eq!(agg.eeg_samples_written(), 1);
        assert_eq!(agg.emg_samples_written(), 1);
    }

    #[test]
    fn test_sample_counts_follow_rates() {
        let mut agg = aggregator();
        // 16 ms at 1x: floor(0.016 * 250) = 4 EEG, floor(0.016 * 1000) = 16 EMG.
        agg.step(0.016, 1.0);
        assert_eq!(agg.eeg_samples_written(), 4);
        assert_eq!(agg.emg_samples_written(), 16);
    }

    #[test]
    fn test_step_clamps_to_history_length() {
        let mut agg = aggregator();
        agg.step(60.0, 1.0);
        assert_eq!(agg.eeg_samples_written(), 512);
        assert_eq!(agg.emg_samples_written(), 512);
    }

    #[test]
    fn test_speed_multiplier_scales_counts() {
        let mut agg = aggregator();
        agg.step(0.016, 2.0);
        assert_eq!(agg.eeg_samples_written(), 8);
        assert_eq!(agg.emg_samples_written(), 32);
    }

    #[test]
    fn test_waveform_is_idempotent() {
        let mut agg = aggregator();
        agg.set_gait_phase(0.3);
        agg.step(0.1, 1.0);
        let first = agg.waveform(SignalFamily::Eeg, 10, 64);
        let second = agg.waveform(SignalFamily::Eeg, 10, 64);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fixed_seed_reproduces_run() {
        let mut a = aggregator();
        let mut b = aggregator();
        for _ in 0..20 {
            a.set_gait_phase(0.25);
            b.set_gait_phase(0.25);
            a.step(0.016, 1.0);
            b.step(0.016, 1.0);
        }
        assert_eq!(
            a.waveform(SignalFamily::Eeg, 31, 256),
            b.waveform(SignalFamily::Eeg, 31, 256)
        );
        assert_eq!(
            a.waveform(SignalFamily::Emg, 5, 256),
            b.waveform(SignalFamily::Emg, 5, 256)
        );
    }

    #[test]
    fn test_snapshot_values_stay_in_display_range() {
        let mut agg = aggregator();
        agg.set_gait_phase(0.15);
        for _ in 0..100 {
            agg.step(0.016, 1.0);
        }
        let snap = agg.snapshot();
        for &rms in &snap.eeg_rms {
            assert!(rms.is_finite());
            assert!(rms > 0.0);
            // Oscillation + noise + spike peaks stay well under 5.
            assert!(rms < 5.0);
        }
        for &env in &snap.emg_envelope {
            assert!(env.is_finite());
            assert!(env > 0.0);
            assert!(env < 2.0);
        }
    }
}
