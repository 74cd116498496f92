//! Uptime clock
//!
//! The RP2040 time driver ticks at 1 MHz, so the embassy `Instant` is
//! already in microseconds. Truncating to 32 bits gives the same wrapping
//! counter as the TIMERAWL register.

use embassy_time::Instant;

use echoline_hal::MicrosClock;

/// Microsecond clock backed by the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct UptimeClock;

impl MicrosClock for UptimeClock {
    fn now_micros(&self) -> u32 {
        Instant::now().as_micros() as u32
    }
}
