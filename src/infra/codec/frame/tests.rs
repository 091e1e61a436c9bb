//! Unit tests for the frame codec.
use super::*;

fn frame(id: u32, data: &[u8]) -> CanFrame {
    CanFrame::new(id, data).expect("valid frame")
}

//==================================================================================ENCODE
#[test]
/// Standard identifier: flag clear, two id bytes big endian.
fn test_encode_standard() {
    let packet = encode(&frame(0x123, &[0xDE, 0xAD])).unwrap();
    assert_eq!(packet.as_slice(), &[0x02, 0x01, 0x23, 0xDE, 0xAD]);
}

#[test]
/// Extended identifier: flag set, four id bytes big endian.
fn test_encode_extended() {
    let packet = encode(&frame(0x1ABC_DEF, &[])).unwrap();
    assert_eq!(packet.as_slice(), &[0x80, 0x01, 0xAB, 0xCD, 0xEF]);
}

#[test]
/// 0x7FF is the last standard id, 0x800 the first extended one.
fn test_encode_boundary() {
    let last_std = encode(&frame(0x7FF, &[])).unwrap();
    assert_eq!(last_std.size, 3);
    assert_eq!(last_std.payload[0] & EXT_ID_FLAG, 0);
    assert_eq!(&last_std.payload[1..3], &[0x07, 0xFF]);

    let first_ext = encode(&frame(0x800, &[])).unwrap();
    assert_eq!(first_ext.size, 5);
    assert_eq!(first_ext.payload[0] & EXT_ID_FLAG, EXT_ID_FLAG);
    assert_eq!(&first_ext.payload[1..5], &[0x00, 0x00, 0x08, 0x00]);
}

#[test]
/// Frames with corrupted public fields are refused instead of truncated.
fn test_encode_rejects_invalid_fields() {
    let mut bad_dlc = frame(0x10, &[]);
    bad_dlc.dlc = 9;
    assert_eq!(encode(&bad_dlc), Err(CodecError::InvalidDlc { dlc: 9 }));

    let bad_id = CanFrame {
        id: 0x2000_0000,
        dlc: 0,
        data: [0; 8],
    };
    assert_eq!(
        encode(&bad_id),
        Err(CodecError::InvalidId { id: 0x2000_0000 })
    );
}

//==================================================================================DECODE
#[test]
/// Anything shorter than three bytes is malformed whatever its contents.
fn test_decode_rejects_short_packets() {
    for size in 0..MIN_PACKET_SIZE {
        let mut packet = RadioPacket::from_slice(&[0x00, 0x01, 0x02]);
        packet.size = size;
        assert_eq!(decode(&packet), Err(CodecError::Malformed));

        let packet = RadioPacket::from_slice(&[0x80, 0xFF][..size.min(2)]);
        assert_eq!(decode(&packet), Err(CodecError::Malformed));
    }
}

#[test]
/// Headers announcing more bytes than the packet holds are rejected.
fn test_decode_never_reads_past_size() {
    // Extended flag but only three bytes.
    let packet = RadioPacket::from_slice(&[0x80, 0x00, 0x00]);
    assert_eq!(decode(&packet), Err(CodecError::Malformed));

    // DLC 4 with only two data bytes present.
    let packet = RadioPacket::from_slice(&[0x04, 0x01, 0x23, 0xAA, 0xBB]);
    assert_eq!(decode(&packet), Err(CodecError::Malformed));

    // Stale bytes beyond `size` must not leak into the frame.
    let mut packet = RadioPacket::from_slice(&[0x02, 0x01, 0x23, 0xAA, 0xBB]);
    packet.size = 4;
    assert_eq!(decode(&packet), Err(CodecError::Malformed));
}

#[test]
/// DLC above 8 or an id wider than its header form is malformed.
fn test_decode_rejects_inconsistent_header() {
    let packet = RadioPacket::from_slice(&[0x09, 0x00, 0x01, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(decode(&packet), Err(CodecError::Malformed));

    let packet = RadioPacket::from_slice(&[0x00, 0x08, 0x00]);
    assert_eq!(decode(&packet), Err(CodecError::Malformed));

    let packet = RadioPacket::from_slice(&[0x80, 0x20, 0x00, 0x00, 0x00]);
    assert_eq!(decode(&packet), Err(CodecError::Malformed));
}

#[test]
/// Trailing bytes after the payload are ignored.
fn test_decode_ignores_trailing_bytes() {
    let packet = RadioPacket::from_slice(&[0x01, 0x00, 0x42, 0x99, 0xFF, 0xFF]);
    assert_eq!(decode(&packet), Ok(frame(0x42, &[0x99])));
}

//==================================================================================ROUND_TRIP
#[test]
/// Every DLC across both id forms and the id range edges survives a round trip.
fn test_round_trip() {
    let ids = [0, 1, 0x123, 0x7FF, 0x800, 0xFFFF, 0x1_0000, 0x1ABC_DEF, MAX_EXTENDED_ID];
    let data = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88];
    for id in ids {
        for dlc in 0..=8 {
            let original = frame(id, &data[..dlc]);
            let packet = encode(&original).unwrap();
            assert_eq!(decode(&packet), Ok(original), "id {:#X} dlc {}", id, dlc);
        }
    }
}

#[test]
/// Three frames of mixed forms encode to the expected sizes and decode back.
fn test_mixed_scenario_sizes() {
    let frames = [
        frame(0x123, &[0x01, 0x02]),
        frame(0x456, &[]),
        frame(0x1ABC_DEF, &[1, 2, 3, 4, 5, 6, 7, 8]),
    ];
    let expected_sizes = [5, 3, 13];

    for (original, size) in frames.iter().zip(expected_sizes) {
        let packet = encode(original).unwrap();
        assert_eq!(packet.size, size);
        assert_eq!(decode(&packet).unwrap(), *original);
    }
}
