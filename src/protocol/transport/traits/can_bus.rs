//! Minimal abstraction for an asynchronous CAN bus controller. Allows the
//! library to plug into various implementations (embedded HAL, desktop driver,
//! test double).
//!
//! Controller initialization (pins, bit rate) stays with the firmware; the
//! bridge only needs to write frames and to reset the controller after a
//! failed write.
use crate::protocol::transport::can_frame::CanFrame;
use futures_util::Future;

/// Contract to emit CAN frames and recover the controller.
pub trait CanBus {
    type Error: core::fmt::Debug;
    /// Emit a frame on the bus. Asynchronous to accommodate non-blocking drivers.
    ///
    /// Implementations **SHOULD** bound the wait (see
    /// [`CAN_SEND_TIMEOUT_MS`](crate::protocol::transport::CAN_SEND_TIMEOUT_MS)); a driver that
    /// never completes stalls the bridge.
    fn send<'a>(
        &'a mut self,
        frame: &'a CanFrame,
    ) -> impl Future<Output = Result<(), Self::Error>> + 'a;
    /// Reset the controller after a failed write (clears error counters and
    /// pending mailboxes).
    fn reset<'a>(&'a mut self) -> impl Future<Output = Result<(), Self::Error>> + 'a;
}
