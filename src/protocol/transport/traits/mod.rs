//! Abstraction traits used by the transport layer (CAN bus and cadence timer).
pub mod bridge_timer;
pub mod can_bus;
