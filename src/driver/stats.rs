//! Link statistics: five monotonic counters updated from the radio event
//! handler and readable from any context.
use core::cell::Cell;

use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};

/// Snapshot of the link counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stats {
    /// Transmissions acknowledged by the peer.
    pub tx_complete: u32,
    /// Transmissions abandoned after the hardware retry budget ran out.
    pub tx_lost: u32,
    /// Interrupt cycles that deferred a transmission because the channel was busy.
    pub tx_postponed: u32,
    /// Received packets handed to the inbound queue.
    pub rx_complete: u32,
    /// Received packets dropped because the inbound queue was full.
    pub rx_lost: u32,
}

/// Individual counter selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Counter {
    TxComplete,
    TxLost,
    TxPostponed,
    RxComplete,
    RxLost,
}

/// Interrupt-safe holder for [`Stats`].
///
/// Counters saturate at `u32::MAX` so they never appear to go backwards.
pub struct StatsCounter {
    inner: Mutex<CriticalSectionRawMutex, Cell<Stats>>,
}

impl Default for StatsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsCounter {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(Stats {
                tx_complete: 0,
                tx_lost: 0,
                tx_postponed: 0,
                rx_complete: 0,
                rx_lost: 0,
            })),
        }
    }

    /// Copy of the current counters.
    pub fn snapshot(&self) -> Stats {
        self.inner.lock(|cell| cell.get())
    }

    /// Increment one counter.
    pub fn bump(&self, counter: Counter) {
        self.inner.lock(|cell| {
            let mut stats = cell.get();
            let slot = match counter {
                Counter::TxComplete => &mut stats.tx_complete,
                Counter::TxLost => &mut stats.tx_lost,
                Counter::TxPostponed => &mut stats.tx_postponed,
                Counter::RxComplete => &mut stats.rx_complete,
                Counter::RxLost => &mut stats.rx_lost,
            };
            *slot = slot.saturating_add(1);
            cell.set(stats);
        });
    }

    /// Zero every counter. Only a full driver re-initialisation does this.
    pub(crate) fn clear(&self) {
        self.inner.lock(|cell| cell.set(Stats::default()));
    }
}
