// src/signal/features.rs
//! Windowed aggregation over channel histories

use crate::signal::ring::ChannelBank;

/// Root mean square over the most recent `window` samples of a channel.
///
/// Bounded by the largest absolute sample in the window; zero on a cold
/// buffer (histories are zero-filled), never NaN.
pub fn windowed_rms(bank: &ChannelBank, channel: usize, window: usize) -> f32 {
    let window = window.clamp(1, bank.capacity());
    let sum: f32 = bank.recent(channel, window).map(|v| v * v).sum();
    (sum / window as f32).sqrt()
}

/// Mean absolute value over the most recent `window` samples of a channel.
pub fn windowed_mean_abs(bank: &ChannelBank, channel: usize, window: usize) -> f32 {
    let window = window.clamp(1, bank.capacity());
    let sum: f32 = bank.recent(channel, window).map(f32::abs).sum();
    sum / window as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank_with(values: &[f32]) -> ChannelBank {
        let mut bank = ChannelBank::new(1, 16);
        for &v in values {
            bank.advance();
            bank.write(0, v);
        }
        bank
    }

    #[test]
    fn test_rms_of_constant_signal() {
        let bank = bank_with(&[2.0; 8]);
        assert!((windowed_rms(&bank, 0, 8) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_rms_of_cold_bank_is_zero() {
        let bank = ChannelBank::new(1, 16);
        assert_eq!(windowed_rms(&bank, 0, 8), 0.0);
    }

    #[test]
    fn test_mean_abs_rectifies() {
        let bank = bank_with(&[1.0, -1.0, 1.0, -1.0]);
        assert!((windowed_mean_abs(&bank, 0, 4) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_window_covers_only_recent_samples() {
        // Old large samples must fall outside a window of 2.
        let bank = bank_with(&[100.0, 100.0, 1.0, 1.0]);
        assert!((windowed_rms(&bank, 0, 2) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_window_clamped_to_capacity() {
        let bank = bank_with(&[3.0; 4]);
        let rms = windowed_rms(&bank, 0, 10_000);
        assert!(rms.is_finite());
        assert!(rms <= 3.0 + 1e-6);
    }
}
