//! Radio interrupt service routine.
//!
//! One call services one radio event. The step order is fixed:
//!
//! 1. standby: stop the radio clock before touching any register, so no new
//!    traffic lands while the current event is processed;
//! 2. read and clear the status flags;
//! 3. listen again right away, so carrier detection is already sampling when
//!    step 7 asks whether the channel is free;
//! 4. RX data ready: drain the whole receive FIFO into the inbound queue
//!    (packets are stored raw; decoding happens in `read`);
//! 5. max retransmits: flush the transmit FIFO and count the frame as lost.
//!    The retry budget itself belongs to the radio hardware;
//! 6. TX data sent: count the completed transmission;
//! 7. if a packet waits in the outbound queue, send it when the channel is
//!    free, otherwise count a postponement and leave it at the head of the
//!    queue for the next event.
//!
//! Together with the radio's acknowledged retransmits this forms a minimal
//! CSMA layer. A postponed packet is only re-evaluated on the next radio
//! event (or the next `send`), never on a timer.
use crate::core::RadioPacket;
use crate::driver::stats::{Counter, StatsCounter};
use crate::driver::{LinkState, RadioCanDriver};
use crate::transport::queues::TransportQueues;
use crate::transport::traits::fault_hook::FaultHook;
use crate::transport::traits::radio_hal::{RadioHal, StatusFlags};

/// What a single handler run did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EventReport {
    /// Status flags read in step 2.
    pub status: StatusFlags,
    /// Packets moved into the inbound queue.
    pub received: u8,
    /// Packets dropped because the inbound queue was full.
    pub dropped: u8,
    /// A frame was abandoned after the hardware retry budget ran out.
    pub tx_lost: bool,
    /// A queued packet was handed to the radio.
    pub transmitted: bool,
    /// A queued packet stayed queued because the channel was busy.
    pub postponed: bool,
}

impl EventReport {
    /// True when a task parked on the inbound queue may have been woken.
    ///
    /// Executors that need an explicit context switch request at the end of
    /// an interrupt (the classic "yield from ISR") can test this.
    pub fn wake_requested(&self) -> bool {
        self.received > 0
    }
}

impl<R, F, const N: usize> RadioCanDriver<R, F, N>
where
    R: RadioHal,
    F: FaultHook,
{
    /// Service one radio event. Call this from the interrupt vector wired to
    /// the radio's IRQ line.
    ///
    /// Outside [`LinkState::Enabled`] the radio is left untouched: its flags
    /// stay latched and the next `enable` services them.
    pub fn on_radio_event(&self) -> EventReport {
        if self.state() != LinkState::Enabled {
            return EventReport::default();
        }
        self.radio.lock(|cell| match cell.try_borrow_mut() {
            Ok(mut radio) => service_event(&mut *radio, &self.queues, &self.stats),
            // Radio already in use by a lifecycle call on this core.
            Err(_) => EventReport::default(),
        })
    }
}

/// Run the seven handler steps against `radio`.
pub(crate) fn service_event<R: RadioHal, const N: usize>(
    radio: &mut R,
    queues: &TransportQueues<N>,
    stats: &StatsCounter,
) -> EventReport {
    let mut report = EventReport::default();

    radio.standby();
    let status = radio.clear_status();
    radio.listen();
    report.status = status;

    if status.contains(StatusFlags::RX_DATA_READY) {
        while radio.rx_pending() > 0 {
            let mut packet = RadioPacket::new();
            packet.size = radio.read(&mut packet.payload).min(packet.payload.len());
            match queues.try_enqueue_inbound(packet) {
                Ok(()) => {
                    stats.bump(Counter::RxComplete);
                    report.received = report.received.saturating_add(1);
                }
                Err(_) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Inbound queue full, dropping {} byte packet", packet.size);
                    stats.bump(Counter::RxLost);
                    report.dropped = report.dropped.saturating_add(1);
                }
            }
        }
    }

    if status.contains(StatusFlags::MAX_RETRANSMITS) {
        #[cfg(feature = "defmt")]
        defmt::debug!("Retransmit budget exhausted, flushing TX FIFO");
        radio.flush_tx();
        stats.bump(Counter::TxLost);
        report.tx_lost = true;
    }

    if status.contains(StatusFlags::TX_DATA_SENT) {
        stats.bump(Counter::TxComplete);
    }

    if !queues.outbound_is_empty() {
        if radio.channel_available() {
            if let Some(packet) = queues.try_dequeue_outbound() {
                radio.write(packet.as_slice());
                report.transmitted = true;
            }
        } else {
            #[cfg(feature = "defmt")]
            defmt::trace!("Channel busy, postponing transmission");
            stats.bump(Counter::TxPostponed);
            report.postponed = true;
        }
    }

    report
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "event_handler_tests.rs"]
mod tests;
