//! In-memory representation of a classic CAN data frame as exchanged with the
//! protocol stack.
//!
//! The identifier is stored as a plain `u32`; whether it is a standard or an
//! extended identifier follows from its magnitude (anything above `0x7FF` is
//! extended). The radio wire format relies on this convention.
use embedded_can::{ExtendedId, Id, StandardId};

/// Highest standard (11-bit) identifier.
pub const MAX_STANDARD_ID: u32 = 0x7FF;
/// Highest extended (29-bit) identifier.
pub const MAX_EXTENDED_ID: u32 = 0x1FFF_FFFF;
/// Largest data length code of a classic CAN frame.
pub const MAX_DLC: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// CAN data frame: identifier, data length code and payload.
pub struct CanFrame {
    /// CAN identifier, standard when `<= 0x7FF`, extended otherwise.
    pub id: u32,
    /// Number of valid payload bytes (Data Length Code, 0 to 8).
    pub dlc: u8,
    /// Payload buffer. Only `data[..dlc]` is meaningful.
    pub data: [u8; 8],
}

impl CanFrame {
    /// Build a frame, returning `None` when `data` exceeds eight bytes or the
    /// identifier does not fit in 29 bits.
    pub fn new(id: u32, data: &[u8]) -> Option<Self> {
        if id > MAX_EXTENDED_ID || data.len() > MAX_DLC as usize {
            return None;
        }
        let mut frame = Self {
            id,
            dlc: data.len() as u8,
            data: [0; 8],
        };
        frame.data[..data.len()].copy_from_slice(data);
        Some(frame)
    }

    /// True when the identifier needs the 29-bit form.
    #[inline]
    pub fn is_extended(&self) -> bool {
        self.id > MAX_STANDARD_ID
    }

    /// Valid payload bytes.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.data[..self.dlc.min(MAX_DLC) as usize]
    }

    /// Checks the frame invariants (`dlc <= 8`, identifier within 29 bits).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.dlc <= MAX_DLC && self.id <= MAX_EXTENDED_ID
    }
}

//==================================================================================EMBEDDED_CAN
impl embedded_can::Frame for CanFrame {
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        let raw = match id.into() {
            Id::Standard(id) => id.as_raw() as u32,
            Id::Extended(id) => id.as_raw(),
        };
        CanFrame::new(raw, data)
    }

    // Remote frames have no representation on the radio link.
    fn new_remote(_id: impl Into<Id>, _dlc: usize) -> Option<Self> {
        None
    }

    fn is_extended(&self) -> bool {
        CanFrame::is_extended(self)
    }

    fn is_remote_frame(&self) -> bool {
        false
    }

    fn id(&self) -> Id {
        if !self.is_extended() {
            if let Some(id) = StandardId::new(self.id as u16) {
                return Id::Standard(id);
            }
        }
        ExtendedId::new(self.id & MAX_EXTENDED_ID).map_or(Id::Extended(ExtendedId::MAX), Id::Extended)
    }

    fn dlc(&self) -> usize {
        self.payload().len()
    }

    fn data(&self) -> &[u8] {
        self.payload()
    }
}
