//! Escalation hook for faults the driver cannot recover from locally.

/// Unrecoverable conditions detected by the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// The radio did not answer the presence probe during `init`.
    RadioProbe,
}

/// Supplied by the embedding application; typically requests a full system
/// reset and never returns.
///
/// If the hook does return, the failing operation reports the fault as an
/// error instead.
pub trait FaultHook {
    fn escalate(&self, fault: Fault);
}

/// Hook that panics, handing the fault to the firmware's panic handler
/// (commonly configured to reset the MCU).
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicOnFault;

impl FaultHook for PanicOnFault {
    fn escalate(&self, fault: Fault) {
        panic!("unrecoverable radio fault: {:?}", fault);
    }
}
