//! Slot-level access to eight-byte CAN payloads.
//! A payload is viewed as four consecutive 16-bit slots, each stored
//! big-endian (high byte first). Slots that are never written stay zero.
use crate::core::{BYTES_PER_SLOT, FRAME_PAYLOAD_LEN, SLOTS_PER_FRAME};
use crate::error::PackingError;

/// Writer filling the slots of a payload buffer it owns.
#[derive(Debug, Clone)]
pub struct SlotWriter {
    /// Output buffer, zero-initialized.
    buffer: [u8; FRAME_PAYLOAD_LEN],
    /// Index of the next slot used by `push_u16_be`.
    cursor: usize,
}

impl Default for SlotWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotWriter {
    /// Create a writer over an all-zero payload.
    pub const fn new() -> Self {
        Self {
            buffer: [0; FRAME_PAYLOAD_LEN],
            cursor: 0,
        }
    }

    /// Write `value` big-endian at bytes `[2 * slot, 2 * slot + 1]`.
    pub fn write_u16_be(&mut self, slot: usize, value: u16) -> Result<(), PackingError> {
        if slot >= SLOTS_PER_FRAME {
            return Err(PackingError::SlotOutOfRange {
                slot,
                available: SLOTS_PER_FRAME,
            });
        }
        let offset = slot * BYTES_PER_SLOT;
        self.buffer[offset..offset + BYTES_PER_SLOT].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    /// Write `value` in the next free slot.
    pub fn push_u16_be(&mut self, value: u16) -> Result<(), PackingError> {
        self.write_u16_be(self.cursor, value)?;
        self.cursor += 1;
        Ok(())
    }

    /// Number of slots filled through `push_u16_be`.
    #[inline]
    pub fn slots_written(&self) -> usize {
        self.cursor
    }

    /// Release the payload. Unwritten slots remain zero.
    #[inline]
    pub fn finish(self) -> [u8; FRAME_PAYLOAD_LEN] {
        self.buffer
    }
}

/// Reader extracting big-endian slots from a payload without copying it.
pub struct SlotReader<'a> {
    buffer: &'a [u8],
}

impl<'a> SlotReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer }
    }

    /// Number of complete slots available in the buffer.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.buffer.len() / BYTES_PER_SLOT
    }

    /// Read the big-endian value stored in `slot`.
    pub fn read_u16_be(&self, slot: usize) -> Result<u16, PackingError> {
        if slot >= self.slot_count() {
            return Err(PackingError::SlotOutOfRange {
                slot,
                available: self.slot_count(),
            });
        }
        let offset = slot * BYTES_PER_SLOT;
        Ok(u16::from_be_bytes([
            self.buffer[offset],
            self.buffer[offset + 1],
        ]))
    }
}
