//! Bounded packet queues between interrupt context and task context.
//!
//! * **Outbound**: tasks push with [`TransportQueues::try_enqueue_outbound`],
//!   the radio event handler pops with [`TransportQueues::try_dequeue_outbound`].
//! * **Inbound**: the radio event handler pushes with
//!   [`TransportQueues::try_enqueue_inbound`], tasks wait on
//!   [`TransportQueues::dequeue_inbound`].
//!
//! Both directions are backed by pre-allocated [`embassy_sync::channel::Channel`]
//! instances guarded by a critical section. Every `try_*` operation returns
//! immediately, never allocates and is safe to call from an interrupt
//! handler; waking a task parked on the inbound queue is left to its
//! executor.
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};

use crate::core::{RadioPacket, QUEUE_CAPACITY};
use crate::error::QueueFull;

/// Outbound and inbound FIFOs of `N` packets each.
pub struct TransportQueues<const N: usize = QUEUE_CAPACITY> {
    outbound: Channel<CriticalSectionRawMutex, RadioPacket, N>,
    inbound: Channel<CriticalSectionRawMutex, RadioPacket, N>,
}

impl<const N: usize> Default for TransportQueues<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TransportQueues<N> {
    /// Create both queues empty. Usable in `static` initialisers.
    pub const fn new() -> Self {
        Self {
            outbound: Channel::new(),
            inbound: Channel::new(),
        }
    }

    /// Fixed depth of each direction.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Drop every queued packet in both directions.
    pub fn clear(&self) {
        self.outbound.clear();
        self.inbound.clear();
    }

    //==================================================================================OUTBOUND
    /// Queue a packet for transmission without waiting.
    pub fn try_enqueue_outbound(&self, packet: RadioPacket) -> Result<(), QueueFull> {
        self.outbound.try_send(packet).map_err(|_| QueueFull)
    }

    /// Pop the oldest packet awaiting transmission, if any.
    pub fn try_dequeue_outbound(&self) -> Option<RadioPacket> {
        self.outbound.try_receive().ok()
    }

    /// Number of packets awaiting transmission.
    pub fn outbound_len(&self) -> usize {
        self.outbound.len()
    }

    /// True when nothing awaits transmission.
    pub fn outbound_is_empty(&self) -> bool {
        self.outbound.is_empty()
    }

    //==================================================================================INBOUND
    /// Store a received packet without waiting.
    pub fn try_enqueue_inbound(&self, packet: RadioPacket) -> Result<(), QueueFull> {
        self.inbound.try_send(packet).map_err(|_| QueueFull)
    }

    /// Wait until a received packet is available and take it.
    ///
    /// There is no timeout: the future stays pending for as long as the
    /// radio delivers nothing.
    pub async fn dequeue_inbound(&self) -> RadioPacket {
        self.inbound.receive().await
    }

    /// Take a received packet if one is already waiting.
    pub fn try_dequeue_inbound(&self) -> Option<RadioPacket> {
        self.inbound.try_receive().ok()
    }

    /// Number of received packets not yet read.
    pub fn inbound_len(&self) -> usize {
        self.inbound.len()
    }
}
