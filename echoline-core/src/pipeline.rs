//! Pipeline wiring
//!
//! Everything the stages share lives in one [`Pipeline`]. Bootstrap
//! places it in static memory once and hands each stage a `&'static`
//! reference, so no stage reaches for a global.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::channel::{LatestChannel, TriggerSignal};
use crate::measurement::{Distance, Interval};
use crate::timer::EdgeTimer;

/// Shared state of the ranging pipeline
pub struct Pipeline<M: RawMutex> {
    /// Echo edge timer, written only by the edge dispatcher
    pub timer: EdgeTimer,
    /// Edge timer → distance resolver
    pub intervals: LatestChannel<M, Interval>,
    /// Distance resolver → presentation loop
    pub distances: LatestChannel<M, Distance>,
    /// Trigger cycle → presentation loop
    pub trigger: TriggerSignal<M>,
}

impl<M: RawMutex> Pipeline<M> {
    pub const fn new(echo_pin: u8) -> Self {
        Self {
            timer: EdgeTimer::new(echo_pin),
            intervals: LatestChannel::new(),
            distances: LatestChannel::new(),
            trigger: TriggerSignal::new(),
        }
    }
}
