//! Monotonic microsecond clock

/// Free-running microsecond counter
///
/// The value wraps at 2^32 µs (about 71.6 minutes). Consumers compute
/// durations with wrapping subtraction so a wrap between two reads still
/// yields the true elapsed time.
pub trait MicrosClock {
    /// Current counter value in microseconds
    fn now_micros(&self) -> u32;
}

impl<C: MicrosClock + ?Sized> MicrosClock for &C {
    fn now_micros(&self) -> u32 {
        (**self).now_micros()
    }
}
