//! High-level components of the bridge: analog acquisition, CAN transport,
//! and the transmit loop.
pub mod acquisition;
pub mod bridge;
pub mod transport;
