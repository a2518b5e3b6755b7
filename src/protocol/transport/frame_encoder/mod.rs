//! CAN frame generator for one acquisition cycle. Splits the ordered reading
//! sequence into groups of four and packs each group into an eight-byte frame.
//!
//! Frame `k` always carries readings `[4k, min(4k + 4, N))`, each as a big-endian
//! `u16`, and uses `id_table[k]` as arbitration ID. The last frame is zero-padded
//! when `N` is not a multiple of four; on the wire a padded slot cannot be told
//! apart from a genuine reading of 0.
use crate::core::{frame_count, Reading, SLOTS_PER_FRAME};
use crate::infra::codec::packing::SlotWriter;
use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::can_id::ArbitrationId;

#[derive(Debug, Clone, Copy)]
/// Inputs shared by all frames of a cycle.
pub struct FrameEncoder<'a> {
    readings: &'a [Reading],
    id_table: &'a [ArbitrationId],
}

/// Lazy iterator returning frames one by one as they are encoded.
pub struct FrameIterator<'a> {
    encoder: FrameEncoder<'a>,
    frame_index: usize,
    frame_count: usize,
}

impl<'a> Iterator for FrameIterator<'a> {
    type Item = CanFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.frame_index >= self.frame_count {
            return None;
        }

        let start = self.frame_index * SLOTS_PER_FRAME;
        let end = (start + SLOTS_PER_FRAME).min(self.encoder.readings.len());
        let id = self.encoder.id_table[self.frame_index];

        let mut writer = SlotWriter::new();
        for (slot, reading) in self.encoder.readings[start..end].iter().enumerate() {
            // Group length never exceeds SLOTS_PER_FRAME, so every slot is in range.
            if writer.write_u16_be(slot, reading.value()).is_err() {
                break;
            }
        }

        self.frame_index += 1;
        Some(CanFrame::full(id, writer.finish()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.frame_count - self.frame_index;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for FrameIterator<'a> {}

impl<'a> FrameEncoder<'a> {
    /// Prepare the encoding of `readings` with identifiers drawn from `id_table`.
    ///
    /// The table is expected to hold at least `ceil(N / 4)` entries, which
    /// [`BridgeConfig`](crate::protocol::acquisition::config::BridgeConfig) checks
    /// at startup. A shorter table truncates the cycle instead of panicking.
    pub fn new(readings: &'a [Reading], id_table: &'a [ArbitrationId]) -> Self {
        Self { readings, id_table }
    }

    /// Number of frames the iterator will yield.
    pub fn frame_count(&self) -> usize {
        frame_count(self.readings.len()).min(self.id_table.len())
    }

    /// Start the iteration; each call to `next` yields the next frame.
    pub fn build(self) -> FrameIterator<'a> {
        FrameIterator {
            frame_count: self.frame_count(),
            encoder: self,
            frame_index: 0,
        }
    }
}

/// Encode a whole cycle into a bounded, pre-sized frame buffer.
///
/// Frames beyond the capacity `F` are not produced; the bridge rejects
/// configurations where `F < ceil(N / 4)` before the loop starts.
pub fn encode_into<const F: usize>(
    readings: &[Reading],
    id_table: &[ArbitrationId],
) -> heapless::Vec<CanFrame, F> {
    FrameEncoder::new(readings, id_table).build().take(F).collect()
}
