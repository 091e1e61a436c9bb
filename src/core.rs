//! Data types shared by the frame codec, the transport queues and the
//! interrupt handler.
//!
//! A [`RadioPacket`] is the unit that crosses the radio link and the unit
//! stored in the transport queues. It is a plain `Copy` value so the queues
//! can hold it by value without any allocation.

/// Largest payload the radio accepts in a single packet (bytes).
pub const MAX_RADIO_PAYLOAD: usize = 32;

/// Default depth of each transport queue.
pub const QUEUE_CAPACITY: usize = 16;

/// Raw radio packet: a fixed buffer plus the number of valid bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RadioPacket {
    /// Number of valid bytes in `payload`.
    pub size: usize,
    /// Packet bytes; only `payload[..size]` is meaningful.
    pub payload: [u8; MAX_RADIO_PAYLOAD],
}

impl Default for RadioPacket {
    fn default() -> Self {
        Self::new()
    }
}

impl RadioPacket {
    /// Create an empty packet.
    pub const fn new() -> Self {
        Self {
            size: 0,
            payload: [0; MAX_RADIO_PAYLOAD],
        }
    }

    /// Build a packet from raw bytes, truncated to [`MAX_RADIO_PAYLOAD`].
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut packet = Self::new();
        packet.copy_from_slice(bytes);
        packet
    }

    /// Number of valid bytes stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Checks whether the packet carries no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Copy bytes into the packet and update `size`.
    #[inline]
    pub fn copy_from_slice(&mut self, slice: &[u8]) {
        let clamped = slice.len().min(MAX_RADIO_PAYLOAD);
        self.payload[..clamped].copy_from_slice(&slice[..clamped]);
        self.size = clamped;
    }

    /// Immutable view over the valid bytes.
    ///
    /// A `size` larger than the buffer (only possible by writing the public
    /// field) is clamped to the buffer length.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.payload[..self.size.min(MAX_RADIO_PAYLOAD)]
    }
}
