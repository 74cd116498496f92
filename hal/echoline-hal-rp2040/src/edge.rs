//! Echo input edge dispatcher
//!
//! embassy-rp owns the `IO_IRQ_BANK0` handler and exposes edges as
//! futures. The dispatcher awaits both edge directions on one input and
//! forwards each as `(pin, event mask)` to a registered handler, the same
//! shape as a raw GPIO interrupt callback.
//!
//! Spawn the dispatcher on a high-priority `InterruptExecutor` so the
//! handler runs in interrupt context and preempts every thread-mode task.

use embassy_rp::gpio::Input;

use echoline_hal::EdgeKind;

/// Echo input with both edge interrupts enabled
pub struct EchoInput<'d> {
    input: Input<'d>,
    pin: u8,
}

impl<'d> EchoInput<'d> {
    /// Wrap an input; `pin` is its GPIO number as reported to the handler
    pub fn new(input: Input<'d>, pin: u8) -> Self {
        Self { input, pin }
    }

    /// GPIO number of the input
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Wait for the next transition and return its event mask
    ///
    /// The direction is read from the level the line settled at when the
    /// executor resumed, not from the hardware event bits. A pulse shorter
    /// than the wake latency is over by then and reads as a falling edge;
    /// the edge timer drops it as unarmed and the cycle shows as a failure.
    pub async fn next_edge(&mut self) -> u32 {
        self.input.wait_for_any_edge().await;
        EdgeKind::from_level(self.input.is_high()).mask()
    }

    /// Forward every edge to `handler` as `(pin, events)`
    ///
    /// Never returns. `handler` runs in the dispatcher's context and must
    /// not block.
    pub async fn dispatch<F>(&mut self, mut handler: F) -> !
    where
        F: FnMut(u8, u32),
    {
        loop {
            let events = self.next_edge().await;
            handler(self.pin, events);
        }
    }
}
