//! Boot-time configuration of the bridge.
//!
//! Built once, validated once, then shared by reference with the sampler,
//! the encoder, and the transmit loop. Nothing in it changes at runtime.
use crate::core::frame_count;
use crate::error::ConfigError;
use crate::protocol::transport::can_id::ArbitrationId;
use crate::protocol::transport::{DEFAULT_BITRATE, DEFAULT_CADENCE_MS};

//==================================================================================BRIDGE_CONFIG
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Validated, immutable bridge configuration.
pub struct BridgeConfig<'a> {
    bitrate: u32,
    channel_count: usize,
    id_table: &'a [ArbitrationId],
    cadence_ms: u32,
    verbose: bool,
}

impl<'a> BridgeConfig<'a> {
    /// Creates a pre-configured `BridgeConfigBuilder` for `channel_count` channels
    /// and the arbitration IDs of `id_table` (entry `k` tags frame `k`).
    pub fn builder(channel_count: usize, id_table: &'a [ArbitrationId]) -> BridgeConfigBuilder<'a> {
        BridgeConfigBuilder::new(channel_count, id_table)
    }

    /// Bus bit rate in bits per second, for the controller initialization.
    pub fn bitrate(&self) -> u32 {
        self.bitrate
    }

    /// Number of analog channels sampled per cycle (`N`).
    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    /// Frames emitted per cycle, `ceil(N / 4)`.
    pub fn frame_count(&self) -> usize {
        frame_count(self.channel_count)
    }

    /// Arbitration IDs indexed by frame position. Holds at least `frame_count()` entries.
    pub fn id_table(&self) -> &'a [ArbitrationId] {
        self.id_table
    }

    /// Delay between two cycles, in milliseconds.
    pub fn cadence_ms(&self) -> u32 {
        self.cadence_ms
    }

    /// Whether the loop traces sampled values and bus resets.
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

//==================================================================================BRIDGE_CONFIG_BUILDER
#[derive(Debug)]
/// Fluent builder that validates the configuration before the loop starts.
pub struct BridgeConfigBuilder<'a> {
    pub bitrate: u32,
    pub channel_count: usize,
    pub id_table: &'a [ArbitrationId],
    pub cadence_ms: u32,
    pub verbose: bool,
}

impl<'a> BridgeConfigBuilder<'a> {
    /// Initializes the builder with the factory defaults (250 kbit/s, 1 ms, verbose).
    pub fn new(channel_count: usize, id_table: &'a [ArbitrationId]) -> Self {
        Self {
            bitrate: DEFAULT_BITRATE,
            channel_count,
            id_table,
            cadence_ms: DEFAULT_CADENCE_MS,
            verbose: true,
        }
    }

    /// Sets the bus bit rate (bits per second).
    pub fn bitrate(mut self, bitrate: u32) -> Self {
        self.bitrate = bitrate;
        self
    }

    /// Sets the inter-cycle delay.
    pub fn cadence_ms(mut self, cadence_ms: u32) -> Self {
        self.cadence_ms = cadence_ms;
        self
    }

    /// Enables or disables the textual trace.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Builds the configuration while applying the startup rules:
    /// - the ID table must cover `ceil(N / 4)` frames
    /// - the bit rate must be non-zero
    ///
    /// A failure here is fatal: the loop must not start on an invalid configuration.
    pub fn build(self) -> Result<BridgeConfig<'a>, ConfigError> {
        if self.bitrate == 0 {
            return Err(ConfigError::InvalidBitrate);
        }
        let required = frame_count(self.channel_count);
        if self.id_table.len() < required {
            return Err(ConfigError::IdTableTooShort {
                required,
                available: self.id_table.len(),
            });
        }
        Ok(BridgeConfig {
            bitrate: self.bitrate,
            channel_count: self.channel_count,
            id_table: self.id_table,
            cadence_ms: self.cadence_ms,
            verbose: self.verbose,
        })
    }
}
