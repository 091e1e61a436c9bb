/// Test doubles simulating the radio, the air between two radios, the
/// fault hook and the timer during integration tests.
use radio_can::core::MAX_RADIO_PAYLOAD;
use radio_can::driver::config::RadioConfig;
use radio_can::transport::traits::fault_hook::{Fault, FaultHook};
use radio_can::transport::traits::radio_hal::{RadioHal, StatusFlags};
use radio_can::transport::traits::radio_timer::RadioTimer;
use radio_can::RadioCanDriver;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::time::{sleep, Duration};

pub type SimDriver = RadioCanDriver<SimRadio, RecordingHook>;

#[derive(Debug, Default)]
#[allow(dead_code)]
/// Observable state of a simulated radio.
pub struct SimState {
    pub probe_ok: bool,
    pub configured: Option<RadioConfig>,
    pub open: bool,
    pub listening: bool,
    pub notify_armed: bool,
    pub close_count: u32,
    pub status: u8,
    pub rx_fifo: VecDeque<Vec<u8>>,
    pub written: Vec<Vec<u8>>,
    pub flush_tx_count: u32,
    pub channel_busy: bool,
    pub carrier_checks: u32,
}

#[derive(Clone)]
/// In-memory radio implementing `RadioHal`; clones share the same state.
pub struct SimRadio {
    state: Arc<Mutex<SimState>>,
}

#[allow(dead_code)]
impl SimRadio {
    /// A radio that answers the probe.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SimState {
                probe_ok: true,
                ..Default::default()
            })),
        }
    }

    /// A radio that is absent: the probe fails.
    pub fn dead() -> Self {
        Self {
            state: Arc::new(Mutex::new(SimState::default())),
        }
    }

    /// Inspect or modify the simulated state.
    pub fn with<T>(&self, f: impl FnOnce(&mut SimState) -> T) -> T {
        f(&mut self.state.lock().unwrap())
    }

    /// A packet arrives over the air: it lands in the RX FIFO and raises RX_DR.
    pub fn deliver(&self, bytes: &[u8]) {
        self.with(|s| {
            s.rx_fifo.push_back(bytes.to_vec());
            s.status |= StatusFlags::RX_DATA_READY.bits();
        });
    }

    /// The peer acknowledged the last transmission.
    pub fn ack(&self) {
        self.with(|s| s.status |= StatusFlags::TX_DATA_SENT.bits());
    }

    /// The hardware ran out of retransmits.
    pub fn exhaust_retries(&self) {
        self.with(|s| s.status |= StatusFlags::MAX_RETRANSMITS.bits());
    }

    pub fn set_channel_busy(&self, busy: bool) {
        self.with(|s| s.channel_busy = busy);
    }

    /// Every payload written to the TX FIFO so far.
    pub fn written(&self) -> Vec<Vec<u8>> {
        self.with(|s| s.written.clone())
    }

    /// Remove and return the payloads written so far.
    pub fn take_written(&self) -> Vec<Vec<u8>> {
        self.with(|s| std::mem::take(&mut s.written))
    }
}

impl RadioHal for SimRadio {
    type Error = &'static str;

    fn configure(&mut self, config: &RadioConfig) -> Result<(), Self::Error> {
        self.with(|s| s.configured = Some(*config));
        Ok(())
    }

    fn probe(&mut self) -> Result<(), Self::Error> {
        if self.with(|s| s.probe_ok) {
            Ok(())
        } else {
            Err("no answer on SPI")
        }
    }

    fn open(&mut self) -> Result<(), Self::Error> {
        self.with(|s| s.open = true);
        Ok(())
    }

    fn close(&mut self) {
        self.with(|s| {
            s.open = false;
            s.listening = false;
            s.close_count += 1;
        });
    }

    fn notify(&mut self, enabled: bool) {
        self.with(|s| s.notify_armed = enabled);
    }

    fn listen(&mut self) {
        self.with(|s| s.listening = true);
    }

    fn standby(&mut self) {
        self.with(|s| s.listening = false);
    }

    fn clear_status(&mut self) -> StatusFlags {
        StatusFlags::from_bits_retain(self.with(|s| std::mem::take(&mut s.status)))
    }

    fn rx_pending(&mut self) -> usize {
        self.with(|s| s.rx_fifo.len())
    }

    fn read(&mut self, buffer: &mut [u8; MAX_RADIO_PAYLOAD]) -> usize {
        self.with(|s| match s.rx_fifo.pop_front() {
            Some(bytes) => {
                buffer[..bytes.len()].copy_from_slice(&bytes);
                bytes.len()
            }
            None => 0,
        })
    }

    fn write(&mut self, payload: &[u8]) {
        self.with(|s| s.written.push(payload.to_vec()));
    }

    fn flush_tx(&mut self) {
        self.with(|s| s.flush_tx_count += 1);
    }

    fn flush_rx(&mut self) {
        self.with(|s| s.rx_fifo.clear());
    }

    fn channel_available(&mut self) -> bool {
        self.with(|s| {
            s.carrier_checks += 1;
            !s.channel_busy
        })
    }
}

#[allow(dead_code)]
/// Carry everything `from` transmitted to `to`, acknowledge it on `from`,
/// then fire both radios' interrupts. Returns the number of packets moved.
pub fn air_transfer(
    from: (&SimDriver, &SimRadio),
    to: (&SimDriver, &SimRadio),
) -> usize {
    let packets = from.1.take_written();
    for bytes in &packets {
        to.1.deliver(bytes);
        from.1.ack();
    }
    to.0.on_radio_event();
    from.0.on_radio_event();
    packets.len()
}

#[derive(Debug, Default)]
#[allow(dead_code)]
/// Fault hook recording escalations instead of resetting.
pub struct RecordingHook {
    faults: Mutex<Vec<Fault>>,
}

#[allow(dead_code)]
impl RecordingHook {
    pub fn faults(&self) -> Vec<Fault> {
        self.faults.lock().unwrap().clone()
    }
}

impl FaultHook for RecordingHook {
    fn escalate(&self, fault: Fault) {
        self.faults.lock().unwrap().push(fault);
    }
}

#[allow(dead_code)]
/// Timer based on `tokio::time::sleep` to drive delays in tests.
pub struct MockTimer;

impl RadioTimer for MockTimer {
    async fn delay_ms(&mut self, millis: u32) {
        sleep(Duration::from_millis(millis as u64)).await;
    }
}

#[allow(dead_code)]
/// Driver over a fresh simulated radio, initialised and enabled.
pub fn enabled_driver() -> (SimDriver, SimRadio) {
    let radio = SimRadio::new();
    let driver = SimDriver::new(radio.clone(), RadioConfig::new(), RecordingHook::default());
    driver.init().expect("init must succeed");
    driver.enable(500_000).expect("enable must succeed");
    (driver, radio)
}
