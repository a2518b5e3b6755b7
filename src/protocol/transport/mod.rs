//! CAN transport layer: arbitration identifiers, frame representation,
//! reading → frame encoding, and bus abstraction traits.
//!
//! ## Bridge defaults
//!
//! These constants seed [`BridgeConfig`](crate::protocol::acquisition::config::BridgeConfig)
//! when the firmware does not override them.

pub mod can_frame;
pub mod can_id;
pub mod frame_encoder;
pub mod traits;

use can_id::ArbitrationId;

/// Default bus bit rate (bits per second).
///
/// 250 kbit/s is the usual rate for sensor buses sharing the segment with
/// J1939 or NMEA 2000 equipment.
pub const DEFAULT_BITRATE: u32 = 250_000;

/// Default delay between the end of a transmit phase and the next sampling (ms).
///
/// # Recommended Values
///
/// - **1 ms**: Tightest cadence, the bus load is then dominated by frame count.
/// - **10 ms**: 100 Hz acquisition, comfortable for slow-moving sensors.
///
/// At 250 kbit/s an eight-byte standard frame takes roughly 0.5 ms on the wire,
/// so with the default cadence the bus saturates around two frames per cycle.
pub const DEFAULT_CADENCE_MS: u32 = 1;

/// Arbitration IDs used when the firmware keeps the factory table.
pub const DEFAULT_ID_TABLE: [ArbitrationId; 2] = [
    ArbitrationId::standard_const(1234),
    ArbitrationId::standard_const(1235),
];

/// Recommended timeout for sending a single CAN frame (ms).
///
/// Prevents indefinite blocking when the bus is faulty, disconnected, or saturated.
/// The bridge has no watchdog of its own: a `send` that never completes stalls
/// the loop with it.
///
/// # Implementation notes
///
/// [`CanBus`](traits::can_bus::CanBus) implementations **SHOULD**
/// enforce a timeout on `send()` and report it as an error, which the bridge
/// answers with a controller reset.
///
/// # Example
///
/// ```rust,ignore
/// use embassy_time::{with_timeout, Duration};
/// use can_daq_bridge::protocol::transport::CAN_SEND_TIMEOUT_MS;
///
/// async fn send(&mut self, frame: &CanFrame) -> Result<(), Error> {
///     with_timeout(
///         Duration::from_millis(CAN_SEND_TIMEOUT_MS as u64),
///         self.can.write(&hal_frame),
///     )
///     .await
///     .map_err(|_| Error::Timeout)?
/// }
/// ```
pub const CAN_SEND_TIMEOUT_MS: u32 = 100;
