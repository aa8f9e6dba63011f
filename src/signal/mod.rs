// src/signal/mod.rs
//! Synthetic EEG/EMG signal generation and time-windowed aggregation

pub mod aggregator;
pub mod display;
pub mod features;
pub mod ring;
pub mod synthesis;

pub use aggregator::{SignalAggregator, SignalFamily, SignalSnapshot};
pub use ring::ChannelBank;
