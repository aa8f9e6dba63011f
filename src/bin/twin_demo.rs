// src/bin/twin_demo.rs
//! Headless frame-loop demo: runs the simulation for a few seconds and logs
//! snapshot summaries the way a renderer would consume them.

use tracing::info;
use tracing_subscriber::EnvFilter;

use twin_core::config::{constants::display, loader, TwinConfig};
use twin_core::signal::display::{eeg_intensity, emg_intensity};
use twin_core::signal::SignalFamily;
use twin_core::sim::TwinSimulation;
use twin_core::TwinResult;

fn main() -> TwinResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => loader::load_from_path(path)?,
        None => TwinConfig::default(),
    };

    let mut sim = TwinSimulation::new(config);
    sim.set_speed(1.0);

    let dt = 1.0 / 60.0;
    for frame in 0..300 {
        sim.advance(dt);

        if frame % 60 == 59 {
            let snapshot = sim.snapshot();
            let eeg_peak = snapshot.eeg_rms.iter().cloned().fold(0.0f32, f32::max);
            let emg_peak = snapshot
                .emg_envelope
                .iter()
                .cloned()
                .fold(0.0f32, f32::max);
            info!(
                frame,
                phase = sim.pose().gait_phase(),
                root_height = sim.pose().root_height(),
                eeg_peak_intensity = eeg_intensity(eeg_peak),
                emg_peak_intensity = emg_intensity(emg_peak),
                "frame summary"
            );
        }
    }

    let wave = sim.waveform(SignalFamily::Emg, 0, display::DEFAULT_WAVEFORM_LENGTH);
    info!(
        samples = wave.len(),
        latest = wave.last().copied().unwrap_or(0.0),
        "final EMG waveform pulled for inspector"
    );

    Ok(())
}
