//! `can-daq-bridge` library: periodic analog acquisition bridged onto a CAN bus
//! in a `no_std` environment. The crate exposes the infrastructure modules
//! (slot packing codec), the acquisition side (sampler, configuration), the CAN
//! transport (identifiers, frames, frame encoder, bus traits), and the
//! transmit loop that ties them together.
#![no_std]
//==================================================================================
/// Core data types shared by the sampler and the frame encoder.
pub mod core;
/// Configuration and packing errors.
pub mod error;
/// Byte-level helpers used to lay readings out inside CAN payloads.
pub mod infra;
/// Acquisition, CAN transport, and the sample → encode → transmit loop.
pub mod protocol;
//==================================================================================
