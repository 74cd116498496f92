//! Echo edge timer
//!
//! Turns rising/falling edge notifications on the echo line into pulse
//! widths. It runs in interrupt context: no blocking, no allocation, no
//! suspension.
//!
//! # Ownership
//!
//! The timer's state has a single writer, the edge dispatcher. Task
//! context may read the diagnostic counters but never writes. Every field
//! is therefore a plain load/store atomic; no read-modify-write is needed,
//! which keeps the timer lock-free on cores without CAS (Cortex-M0+).
//!
//! # Cycle validation
//!
//! A rising edge arms the timer and a falling edge disarms it. A falling
//! edge that finds the timer unarmed (missed rising edge, or the echo line
//! already high at boot) would otherwise pair with a stale rising
//! timestamp and publish a meaningless interval. Such edges are dropped
//! and counted instead.

use embassy_sync::blocking_mutex::raw::RawMutex;
use portable_atomic::{AtomicBool, AtomicU32, Ordering};

use echoline_hal::{EdgeEvent, EdgeKind};

use crate::channel::LatestChannel;
use crate::measurement::Interval;

/// What a single edge notification did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Rising edge recorded; waiting for the falling edge
    Armed,
    /// Falling edge closed a cycle; the interval was published
    Published(Interval),
    /// Falling edge without a preceding rising edge; dropped
    Unarmed,
    /// Different pin or unrecognised event mask
    Ignored,
}

/// Edge timer for one echo input
pub struct EdgeTimer {
    /// GPIO the timer listens to
    echo_pin: u8,
    /// Counter value at the last rising edge
    rising_at: AtomicU32,
    /// Set on rising edge, cleared on falling edge
    armed: AtomicBool,
    /// Intervals published since boot
    published: AtomicU32,
    /// Falling edges dropped because the timer was unarmed
    unarmed: AtomicU32,
}

impl EdgeTimer {
    pub const fn new(echo_pin: u8) -> Self {
        Self {
            echo_pin,
            rising_at: AtomicU32::new(0),
            armed: AtomicBool::new(false),
            published: AtomicU32::new(0),
            unarmed: AtomicU32::new(0),
        }
    }

    /// GPIO this timer listens to
    pub fn echo_pin(&self) -> u8 {
        self.echo_pin
    }

    /// Handle an edge notification
    ///
    /// `pin` and `events` are forwarded from the interrupt dispatcher;
    /// `now_us` is the microsecond counter read when the edge was serviced.
    /// Only [`EDGE_RISE`](echoline_hal::EDGE_RISE) and
    /// [`EDGE_FALL`](echoline_hal::EDGE_FALL) are acted on.
    ///
    /// Must only be called from the single dispatcher context.
    pub fn on_edge<M: RawMutex>(
        &self,
        pin: u8,
        events: u32,
        now_us: u32,
        intervals: &LatestChannel<M, Interval>,
    ) -> EdgeOutcome {
        if pin != self.echo_pin {
            return EdgeOutcome::Ignored;
        }

        let Some(event) = EdgeEvent::decode(events, now_us) else {
            return EdgeOutcome::Ignored;
        };

        match event.kind {
            EdgeKind::Rising => {
                self.rising_at.store(event.at_us, Ordering::Relaxed);
                self.armed.store(true, Ordering::Release);
                EdgeOutcome::Armed
            }
            EdgeKind::Falling => {
                if !self.armed.load(Ordering::Acquire) {
                    bump(&self.unarmed);
                    return EdgeOutcome::Unarmed;
                }
                self.armed.store(false, Ordering::Release);

                let rising_at = self.rising_at.load(Ordering::Relaxed);
                let interval = Interval::between(rising_at, event.at_us);
                intervals.publish(interval);
                bump(&self.published);
                EdgeOutcome::Published(interval)
            }
        }
    }

    /// Whether a rising edge is waiting for its falling edge
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }

    /// Intervals published since boot (wrapping)
    pub fn published_count(&self) -> u32 {
        self.published.load(Ordering::Relaxed)
    }

    /// Unarmed falling edges dropped since boot (wrapping)
    pub fn unarmed_count(&self) -> u32 {
        self.unarmed.load(Ordering::Relaxed)
    }
}

/// Single-writer increment
fn bump(counter: &AtomicU32) {
    counter.store(counter.load(Ordering::Relaxed).wrapping_add(1), Ordering::Relaxed);
}
