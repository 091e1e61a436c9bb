//! Stateless translation between a [`CanFrame`] and a [`RadioPacket`].
//!
//! # Wire layout
//!
//! ```text
//! Standard id (<= 0x7FF):
//!   [0]      DLC (bit 7 clear)
//!   [1..3]   id bits 15-0, big endian
//!   [3..]    DLC data bytes
//!
//! Extended id (> 0x7FF):
//!   [0]      DLC | 0x80
//!   [1..5]   id bits 31-0, big endian
//!   [5..]    DLC data bytes
//! ```
//!
//! The flag never collides with the DLC itself since a classic DLC stays
//! within 0..=8. The largest packet is 13 bytes, well under the radio limit.
use crate::core::{RadioPacket, MAX_RADIO_PAYLOAD};
use crate::error::CodecError;
use crate::transport::can_frame::{CanFrame, MAX_DLC, MAX_EXTENDED_ID, MAX_STANDARD_ID};

/// Bit 7 of the header byte marks an extended identifier.
pub const EXT_ID_FLAG: u8 = 1 << 7;

/// Shortest packet that can hold a frame (header + standard id, no data).
pub const MIN_PACKET_SIZE: usize = 3;

const STANDARD_HEADER_LEN: usize = 3;
const EXTENDED_HEADER_LEN: usize = 5;

/// Pack a CAN frame into a radio packet.
///
/// Fails only for a frame whose public fields were set outside the CAN
/// limits (`dlc > 8` or a 30+ bit identifier).
pub fn encode(frame: &CanFrame) -> Result<RadioPacket, CodecError> {
    if frame.dlc > MAX_DLC {
        return Err(CodecError::InvalidDlc { dlc: frame.dlc });
    }
    if frame.id > MAX_EXTENDED_ID {
        return Err(CodecError::InvalidId { id: frame.id });
    }

    let mut packet = RadioPacket::new();
    let buf = &mut packet.payload;

    let header_len = if frame.id > MAX_STANDARD_ID {
        buf[0] = frame.dlc | EXT_ID_FLAG;
        buf[1..EXTENDED_HEADER_LEN].copy_from_slice(&frame.id.to_be_bytes());
        EXTENDED_HEADER_LEN
    } else {
        buf[0] = frame.dlc & !EXT_ID_FLAG;
        buf[1..STANDARD_HEADER_LEN].copy_from_slice(&(frame.id as u16).to_be_bytes());
        STANDARD_HEADER_LEN
    };

    let dlc = frame.dlc as usize;
    buf[header_len..header_len + dlc].copy_from_slice(&frame.data[..dlc]);
    packet.size = header_len + dlc;
    Ok(packet)
}

/// Unpack a radio packet into a CAN frame.
///
/// Never reads past `packet.size`. Any packet whose header announces more
/// bytes than it carries, a DLC above 8, or an identifier wider than its
/// header form allows is rejected as [`CodecError::Malformed`].
pub fn decode(packet: &RadioPacket) -> Result<CanFrame, CodecError> {
    let size = packet.size;
    if !(MIN_PACKET_SIZE..=MAX_RADIO_PAYLOAD).contains(&size) {
        return Err(CodecError::Malformed);
    }
    let bytes = &packet.payload[..size];

    let header = bytes[0];
    let (id, dlc, offset) = if header & EXT_ID_FLAG != 0 {
        if size < EXTENDED_HEADER_LEN {
            return Err(CodecError::Malformed);
        }
        let id = u32::from_be_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]);
        if id > MAX_EXTENDED_ID {
            return Err(CodecError::Malformed);
        }
        (id, header & !EXT_ID_FLAG, EXTENDED_HEADER_LEN)
    } else {
        let id = u16::from_be_bytes([bytes[1], bytes[2]]) as u32;
        if id > MAX_STANDARD_ID {
            return Err(CodecError::Malformed);
        }
        (id, header, STANDARD_HEADER_LEN)
    };

    if dlc > MAX_DLC || offset + dlc as usize > size {
        return Err(CodecError::Malformed);
    }

    let mut frame = CanFrame {
        id,
        dlc,
        data: [0; 8],
    };
    frame.data[..dlc as usize].copy_from_slice(&bytes[offset..offset + dlc as usize]);
    Ok(frame)
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
