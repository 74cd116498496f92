//! Single-slot hand-off primitives
//!
//! Both types wrap an `embassy_sync` [`Signal`], which holds at most one
//! value behind a raw mutex. With `CriticalSectionRawMutex` every publish
//! and take runs inside a critical section, so a publish from interrupt
//! context racing a take from a task leaves exactly one consistent value.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;

/// Single-slot channel that keeps only the newest value
///
/// Publishing replaces any unread value. Readers see the most recently
/// published value or nothing, never a backlog.
pub struct LatestChannel<M: RawMutex, T> {
    slot: Signal<M, T>,
}

impl<M: RawMutex, T: Send> LatestChannel<M, T> {
    pub const fn new() -> Self {
        Self {
            slot: Signal::new(),
        }
    }

    /// Publish a value, discarding any unread one
    ///
    /// Never blocks and never allocates, so it is safe from interrupt
    /// context. Wakes a task waiting in [`receive`](Self::receive).
    pub fn publish(&self, value: T) {
        self.slot.signal(value);
    }

    /// Wait until a value is available and take it
    pub async fn receive(&self) -> T {
        self.slot.wait().await
    }

    /// Take the pending value, if any
    pub fn try_receive(&self) -> Option<T> {
        self.slot.try_take()
    }

    /// Drop the pending value, if any
    pub fn clear(&self) {
        self.slot.reset();
    }

    /// Whether a value is waiting to be taken
    pub fn is_pending(&self) -> bool {
        self.slot.signaled()
    }
}

impl<M: RawMutex, T: Send> Default for LatestChannel<M, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-permit "a trigger pulse was just emitted" flag
///
/// Raising an already raised signal is a no-op: pulses emitted before the
/// consumer looks collapse into one pending permit.
pub struct TriggerSignal<M: RawMutex> {
    permit: Signal<M, ()>,
}

impl<M: RawMutex> TriggerSignal<M> {
    pub const fn new() -> Self {
        Self {
            permit: Signal::new(),
        }
    }

    /// Arm the signal
    pub fn raise(&self) {
        self.permit.signal(());
    }

    /// Consume the permit without waiting
    ///
    /// Returns `true` if the signal was armed.
    pub fn try_consume(&self) -> bool {
        self.permit.try_take().is_some()
    }

    /// Whether the signal is armed
    pub fn is_raised(&self) -> bool {
        self.permit.signaled()
    }
}

impl<M: RawMutex> Default for TriggerSignal<M> {
    fn default() -> Self {
        Self::new()
    }
}
