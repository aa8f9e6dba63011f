// src/signal/ring.rs
//! Fixed-capacity circular channel histories
//!
//! One bank holds every channel of a signal family in a flat channel-major
//! arena with a single shared write index: all channels of a family advance
//! together. Writes overwrite the oldest slot in ring order; the buffer is
//! zero-filled at construction so cold-start reads are well-defined.

/// Circular sample histories for one signal family.
pub struct ChannelBank {
    /// Channel-major storage, stride = `capacity`.
    data: Vec<f32>,
    channels: usize,
    capacity: usize,
    /// Slot of the most recent write, shared by all channels.
    index: usize,
    /// Total samples written per channel since construction.
    total: u64,
}

impl ChannelBank {
    /// Create a zero-filled bank.
    pub fn new(channels: usize, capacity: usize) -> Self {
        debug_assert!(channels > 0 && capacity > 0);
        Self {
            data: vec![0.0; channels * capacity],
            channels,
            capacity,
            index: 0,
            total: 0,
        }
    }

    /// Advance the shared write index to the next ring slot.
    #[inline]
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.capacity;
        self.total += 1;
    }

    /// Write a sample for `channel` into the current slot.
    #[inline]
    pub fn write(&mut self, channel: usize, value: f32) {
        debug_assert!(channel < self.channels, "channel index out of range");
        self.data[channel * self.capacity + self.index] = value;
    }

    /// Iterate the most recent `count` samples of a channel, newest first,
    /// reading backward from the shared index with wraparound.
    pub fn recent(&self, channel: usize, count: usize) -> impl Iterator<Item = f32> + '_ {
        debug_assert!(channel < self.channels, "channel index out of range");
        let count = count.min(self.capacity);
        let base = channel * self.capacity;
        (0..count).map(move |i| self.data[base + (self.index + self.capacity - i) % self.capacity])
    }

    /// Copy the most recent `length` samples of a channel in chronological
    /// order (oldest first). Slots never written are zero. Idempotent: no
    /// state changes, repeated calls return the same sequence.
    pub fn waveform(&self, channel: usize, length: usize) -> Vec<f32> {
        let length = length.min(self.capacity);
        let mut out = Vec::with_capacity(length);
        let base = channel * self.capacity;
        for i in (0..length).rev() {
            out.push(self.data[base + (self.index + self.capacity - i) % self.capacity]);
        }
        out
    }

    /// Number of channels in the bank.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Ring capacity per channel.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total samples written per channel since construction.
    #[inline]
    pub fn total_written(&self) -> u64 {
        self.total
    }
}
