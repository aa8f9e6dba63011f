// src/signal/synthesis.rs
//! Phase-locked EEG/EMG waveform synthesis
//!
//! Replace these generators with real EEG/EMG ingestion if available. The
//! models are tuned for visual plausibility, not derived from physiology;
//! the burst and spike constants are preserved verbatim from the tuned
//! reference behavior.
//!
//! Randomness comes exclusively from the generator owned by the caller, so a
//! fixed seed reproduces a simulation run exactly.

use std::f32::consts::PI;
use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::constants::signal::{
    EEG_NOISE_RANGE, EMG_CARRIER_GAIN, EMG_NOISE_RANGE, SPIKE_AMPLITUDE,
};

/// Synthesizes EEG-like oscillations with randomly triggered spike transients.
///
/// Each channel carries two phase-offset sinusoids at a fixed per-channel base
/// frequency plus uniform noise. At most one new spike is armed per tick; an
/// armed channel contributes a decaying half-sine until its timer runs out.
pub struct EegSynth {
    base_freqs: Vec<f32>,
    spike_timers: Vec<f32>,
    spike_probability: f32,
}

impl EegSynth {
    /// Create a synthesizer for `channels` channels.
    pub fn new(channels: usize, spike_probability: f32) -> Self {
        Self {
            // 6.0..14.1 Hz, cycling every 10 channels.
            base_freqs: (0..channels).map(|ch| 6.0 + (ch % 10) as f32 * 0.9).collect(),
            spike_timers: vec![0.0; channels],
            spike_probability,
        }
    }

    /// Synthesize one sample for `channel` at cumulative EEG time `t`.
    /// Consumes one tick of the channel's spike timer if armed.
    pub fn sample(&mut self, channel: usize, t: f64, rng: &mut StdRng) -> f32 {
        let freq = f64::from(self.base_freqs[channel]);
        let oscillation = (TAU * freq * t).sin() * 0.6
            + (TAU * (freq * 0.5) * t + channel as f64).sin() * 0.4;
        let noise = rng.gen_range(-EEG_NOISE_RANGE..EEG_NOISE_RANGE);
        oscillation as f32 + noise + self.consume_spike(channel)
    }

    /// Stochastically arm one spike on a uniformly random channel. Called once
    /// per EEG tick, after all channels have been sampled.
    pub fn maybe_trigger_spike(&mut self, rng: &mut StdRng) {
        if rng.gen::<f32>() < self.spike_probability {
            let channel = rng.gen_range(0..self.spike_timers.len());
            self.spike_timers[channel] = 6.0 + rng.gen::<f32>() * 4.0;
        }
    }

    fn consume_spike(&mut self, channel: usize) -> f32 {
        let timer = self.spike_timers[channel];
        if timer <= 0.0 {
            return 0.0;
        }
        self.spike_timers[channel] = timer - 1.0;
        SPIKE_AMPLITUDE * ((timer / 10.0) * PI).sin()
    }

    #[cfg(test)]
    fn arm_spike(&mut self, channel: usize, ticks: f32) {
        self.spike_timers[channel] = ticks;
    }
}

/// Synthesizes EMG-like bursts locked to the gait phase.
///
/// Half the channels fire in phase with the gait cycle and half a half-cycle
/// later, giving bilateral alternation. The envelope carries two bursts per
/// cycle, approximating heel-strike and toe-off activation.
pub struct EmgSynth {
    phase_offsets: Vec<f32>,
}

impl EmgSynth {
    /// Create a synthesizer for `channels` channels; the first half get phase
    /// offset 0, the second half 0.5.
    pub fn new(channels: usize) -> Self {
        Self {
            phase_offsets: (0..channels)
                .map(|ch| if ch < channels / 2 { 0.0 } else { 0.5 })
                .collect(),
        }
    }

    /// Synthesize one sample for `channel` at local time `t` and the given
    /// gait phase. The caller must supply a wrapped phase in `[0, 1)`;
    /// out-of-range values silently shift the burst timing.
    pub fn sample(&self, channel: usize, t: f64, gait_phase: f32, rng: &mut StdRng) -> f32 {
        let local_phase = (gait_phase + self.phase_offsets[channel]).fract();
        let burst = burst_envelope(local_phase);
        let carrier_hz = 40.0 + channel as f64 * 4.0;
        let carrier = ((TAU * carrier_hz * t).sin()) as f32 * EMG_CARRIER_GAIN;
        let noise = rng.gen_range(-EMG_NOISE_RANGE..EMG_NOISE_RANGE);
        (carrier + noise) * burst
    }

    /// Phase offset assigned to a channel.
    #[inline]
    pub fn phase_offset(&self, channel: usize) -> f32 {
        self.phase_offsets[channel]
    }
}

/// Gait-locked activation envelope, clamped to `[0.1, 2.5]`.
///
/// A slow half-sine underlies two Gaussian bursts centered at phase 0.15 and
/// 0.65 (inverse widths 7 and 8).
pub fn burst_envelope(phase: f32) -> f32 {
    let swing = (PI * phase).sin();
    let burst = (-((phase - 0.15) * 7.0).powi(2)).exp() + (-((phase - 0.65) * 8.0).powi(2)).exp();
    (0.15 + 0.5 * swing + 1.8 * burst).clamp(0.1, 2.5)
}
