//! Analog acquisition: reads every configured channel once per cycle and
//! quantizes the samples to 12-bit [`Reading`]s.
use crate::core::Reading;

pub mod config;

/// Analog-read primitive provided by the firmware (one instance per channel).
///
/// Returns the current sample normalized to `[0.0, 1.0]` of the converter's
/// full scale. Reads are assumed instantaneous relative to the loop cadence.
pub trait AnalogInput {
    fn read_normalized(&mut self) -> f32;
}

impl<F: FnMut() -> f32> AnalogInput for F {
    fn read_normalized(&mut self) -> f32 {
        self()
    }
}

/// Owns the channels in their fixed acquisition order.
pub struct Sampler<A: AnalogInput, const N: usize> {
    channels: [A; N],
}

impl<A: AnalogInput, const N: usize> Sampler<A, N> {
    pub fn new(channels: [A; N]) -> Self {
        Self { channels }
    }

    /// Number of channels, fixed at construction.
    #[inline]
    pub const fn channel_count(&self) -> usize {
        N
    }

    /// Read every channel exactly once, in channel order.
    ///
    /// Cannot fail: quantization clamps, so every reading is within twelve bits.
    pub fn sample_all(&mut self) -> [Reading; N] {
        let mut readings = [Reading::MIN; N];
        for (reading, channel) in readings.iter_mut().zip(self.channels.iter_mut()) {
            *reading = Reading::from_normalized(channel.read_normalized());
        }
        readings
    }
}
