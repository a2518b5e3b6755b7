//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (startup configuration,
//! payload slot packing).
//!
//! Bus failures are not listed here: they stay generic (`CanBus::Error`) and
//! are absorbed by the transmit loop's recovery policy.
use thiserror_no_std::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors detected while validating the bridge configuration at startup.
pub enum ConfigError {
    /// The arbitration ID table cannot cover every frame of a cycle.
    #[error("ID table too short: {required} frames per cycle, {available} IDs configured")]
    IdTableTooShort { required: usize, available: usize },
    /// The frame buffer capacity is smaller than the number of frames per cycle.
    #[error("Frame buffer too small: {required} frames per cycle, capacity {capacity}")]
    FrameCapacityTooSmall { required: usize, capacity: usize },
    /// The sampler does not own the number of channels declared in the configuration.
    #[error("Channel count mismatch: configured {configured}, sampler owns {sampler}")]
    ChannelCountMismatch { configured: usize, sampler: usize },
    /// A bus bit rate of zero cannot be programmed into a CAN controller.
    #[error("Invalid bus bit rate")]
    InvalidBitrate,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised while reading or writing 16-bit slots in a CAN payload.
pub enum PackingError {
    /// Slot index beyond the payload capacity.
    #[error("Slot {slot} out of range, payload holds {available} slots")]
    SlotOutOfRange { slot: usize, available: usize },
}
