//! Trigger cycle
//!
//! Pulses the sensor's TRIG input and arms the trigger signal. The pulse
//! width is far below the scheduler's timer granularity, so it is held with
//! a blocking [`DelayNs`] that spins. The async delay used elsewhere would
//! yield and stretch the pulse by however long other tasks run.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::delay::DelayNs;

use echoline_hal::OutputPin;

use crate::channel::TriggerSignal;

/// Trigger pulse generator
pub struct TriggerCycle<P, D> {
    pin: P,
    spin: D,
    pulse_width_us: u32,
}

impl<P: OutputPin, D: DelayNs> TriggerCycle<P, D> {
    /// Create a trigger cycle
    ///
    /// `spin` must busy-wait; it runs inside a task without yielding.
    pub fn new(pin: P, spin: D, pulse_width_us: u32) -> Self {
        Self {
            pin,
            spin,
            pulse_width_us,
        }
    }

    /// Emit one trigger pulse and arm the signal
    ///
    /// High, spin for the pulse width, low, then raise `trigger`.
    pub fn pulse<M: RawMutex>(&mut self, trigger: &TriggerSignal<M>) {
        self.pin.set_high();
        self.spin.delay_us(self.pulse_width_us);
        self.pin.set_low();
        trigger.raise();
    }

    /// Configured pulse width
    pub fn pulse_width_us(&self) -> u32 {
        self.pulse_width_us
    }
}
