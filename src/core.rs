//! Defines the data contract between the sampler (producer of readings) and
//! the frame encoder (consumer).
//!
//! A [`Reading`] is a 12-bit quantized sample. Readings travel on the bus as
//! big-endian 16-bit slots, four slots per eight-byte CAN payload.

/// Largest value a 12-bit reading can take.
pub const READING_MAX: u16 = 4095;

/// Number of readings carried by one CAN frame.
pub const SLOTS_PER_FRAME: usize = 4;

/// Bytes used by one reading inside a payload (big-endian `u16`).
pub const BYTES_PER_SLOT: usize = 2;

/// Payload length of every bridge frame. Classic CAN, always eight bytes.
pub const FRAME_PAYLOAD_LEN: usize = SLOTS_PER_FRAME * BYTES_PER_SLOT;

/// Number of frames required to carry `channel_count` readings (`ceil(n / 4)`).
#[inline]
pub const fn frame_count(channel_count: usize) -> usize {
    channel_count.div_ceil(SLOTS_PER_FRAME)
}

/// Quantized analog sample in the `[0, 4095]` range.
///
/// The only constructors clamp, so a value outside twelve bits can never be
/// observed downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading(u16);

impl Reading {
    /// Smallest reading.
    pub const MIN: Reading = Reading(0);
    /// Full-scale reading.
    pub const MAX: Reading = Reading(READING_MAX);

    /// Build a reading from a raw integer, saturating at [`READING_MAX`].
    #[inline]
    pub const fn new(raw: u16) -> Self {
        if raw > READING_MAX {
            Reading(READING_MAX)
        } else {
            Reading(raw)
        }
    }

    /// Quantize a normalized analog sample: `floor(sample * 4095)`.
    ///
    /// Fractional loss is accepted (truncation, not rounding). Inputs outside
    /// `[0.0, 1.0]` are clamped, `NaN` maps to zero.
    #[inline]
    pub fn from_normalized(sample: f32) -> Self {
        let scaled = sample * READING_MAX as f32;
        if scaled <= 0.0 || scaled.is_nan() {
            return Reading::MIN;
        }
        // `as` truncates toward zero and saturates at u16::MAX.
        Reading::new(scaled as u16)
    }

    /// Raw 12-bit value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl From<Reading> for u16 {
    fn from(reading: Reading) -> Self {
        reading.0
    }
}
