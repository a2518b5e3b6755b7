//! Wire-format properties of the cycle encoder, checked over many channel
//! counts and reading patterns.
//!
//! Each test follows the pattern: readings → frames → inverse big-endian
//! decode → compare.

use can_daq_bridge::core::{frame_count, Reading, READING_MAX};
use can_daq_bridge::protocol::transport::{
    can_frame::CanFrame, can_id::ArbitrationId, frame_encoder::FrameEncoder,
};

fn id_table(len: usize) -> Vec<ArbitrationId> {
    (0..len)
        .map(|k| ArbitrationId::standard(0x100 + k as u16).unwrap())
        .collect()
}

/// Deterministic pseudo-random readings (xorshift), masked to 12 bits.
fn readings(n: usize, seed: u32) -> Vec<Reading> {
    let mut state = seed | 1;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            Reading::new((state & 0x0FFF) as u16)
        })
        .collect()
}

fn encode(values: &[Reading], table: &[ArbitrationId]) -> Vec<CanFrame> {
    FrameEncoder::new(values, table).build().collect()
}

#[test]
/// `ceil(N / 4)` frames, and the non-padding slots concatenate back to the input.
fn frames_reconstruct_the_reading_sequence() {
    for n in 0..=40 {
        let values = readings(n, 0xC0FFEE + n as u32);
        let table = id_table(frame_count(n));
        let frames = encode(&values, &table);

        assert_eq!(frames.len(), n.div_ceil(4), "frame count for N = {n}");

        let decoded: Vec<u16> = frames
            .iter()
            .flat_map(|frame| {
                frame
                    .data
                    .chunks_exact(2)
                    .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                    .collect::<Vec<_>>()
            })
            .take(n)
            .collect();
        let expected: Vec<u16> = values.iter().map(|r| r.value()).collect();
        assert_eq!(decoded, expected, "payload for N = {n}");

        for frame in &frames {
            assert_eq!(frame.len, 8);
        }
    }
}

#[test]
/// Every 12-bit value survives the big-endian slot encoding.
fn every_reading_value_roundtrips() {
    let table = id_table(1);
    for raw in 0..=READING_MAX {
        let values = [Reading::new(raw)];
        let frames = encode(&values, &table);
        assert_eq!(u16::from_be_bytes([frames[0].data[0], frames[0].data[1]]), raw);
        assert_eq!(&frames[0].data[2..], &[0; 6]);
    }
}

#[test]
/// Encoding the same cycle twice yields byte-identical frames.
fn encoding_is_deterministic() {
    let values = readings(13, 42);
    let table = id_table(4);
    assert_eq!(encode(&values, &table), encode(&values, &table));
}

#[test]
/// N = 5: one full frame, then reading 4 in slot 0 and six padding bytes.
fn five_readings_pad_the_second_frame() {
    let values: Vec<Reading> = [100, 200, 300, 400, 500].map(Reading::new).to_vec();
    let frames = encode(&values, &id_table(2));

    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].data, [0, 100, 0, 200, 1, 44, 1, 144]);
    assert_eq!(frames[1].data, [1, 244, 0, 0, 0, 0, 0, 0]);
}

#[test]
/// N = 9 with table [10, 11, 12]: IDs follow the table.
fn nine_readings_use_three_ids() {
    let table: Vec<ArbitrationId> = [10, 11, 12]
        .map(|raw| ArbitrationId::standard(raw).unwrap())
        .to_vec();
    let frames = encode(&readings(9, 7), &table);
    let ids: Vec<u32> = frames.iter().map(|frame| frame.id.raw()).collect();
    assert_eq!(ids, vec![10, 11, 12]);
}

#[test]
/// N = 4: one frame, every byte carries data.
fn four_readings_fill_one_frame() {
    let values = vec![Reading::MAX; 4];
    let frames = encode(&values, &id_table(1));
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].data, [0x0F, 0xFF, 0x0F, 0xFF, 0x0F, 0xFF, 0x0F, 0xFF]);
}

#[test]
/// A padded slot is indistinguishable from a genuine zero reading.
fn padding_matches_a_zero_reading() {
    let table = id_table(1);
    let padded = encode(&[Reading::new(9)], &table);
    let explicit = encode(&[Reading::new(9), Reading::MIN], &table);
    assert_eq!(padded[0].data, explicit[0].data);
}
