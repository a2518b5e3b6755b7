//! Payload codecs.
pub mod packing;
