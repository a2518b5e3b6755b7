//! In-memory representation of a classic CAN data frame.
use crate::core::FRAME_PAYLOAD_LEN;
use crate::protocol::transport::can_id::ArbitrationId;
use embedded_can::Id;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// CAN data frame as handed to the bus driver.
pub struct CanFrame {
    /// Arbitration identifier.
    pub id: ArbitrationId,
    /// Payload buffer. Classic CAN frames always provide eight bytes.
    pub data: [u8; FRAME_PAYLOAD_LEN],
    /// Number of valid payload bytes (Data Length Code, 0 to 8).
    pub len: usize,
}

impl CanFrame {
    /// Full eight-byte frame, the only shape the bridge emits.
    pub fn full(id: ArbitrationId, data: [u8; FRAME_PAYLOAD_LEN]) -> Self {
        Self {
            id,
            data,
            len: FRAME_PAYLOAD_LEN,
        }
    }

    /// Valid payload bytes.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

/// Lets HAL drivers built on `embedded-can` consume bridge frames directly.
impl embedded_can::Frame for CanFrame {
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        if data.len() > FRAME_PAYLOAD_LEN {
            return None;
        }
        let mut buffer = [0u8; FRAME_PAYLOAD_LEN];
        buffer[..data.len()].copy_from_slice(data);
        Some(Self {
            id: ArbitrationId::from(id.into()),
            data: buffer,
            len: data.len(),
        })
    }

    // The bridge only transmits data frames.
    fn new_remote(_id: impl Into<Id>, _dlc: usize) -> Option<Self> {
        None
    }

    fn is_extended(&self) -> bool {
        self.id.is_extended()
    }

    fn is_remote_frame(&self) -> bool {
        false
    }

    fn id(&self) -> Id {
        self.id.id()
    }

    fn dlc(&self) -> usize {
        self.len
    }

    fn data(&self) -> &[u8] {
        self.payload()
    }
}
