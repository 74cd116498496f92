//! Echo edge task
//!
//! Runs on the interrupt executor. Every edge on the echo line is stamped
//! and handed to the edge timer before any thread-mode task can run.

use defmt::*;

use echoline_core::EdgeOutcome;
use echoline_hal_rp2040::{EchoInput, MicrosClock, UptimeClock};

use super::SharedPipeline;

/// Echo task - times the echo pulse from its two edges
#[embassy_executor::task]
pub async fn echo_task(
    mut echo: EchoInput<'static>,
    clock: UptimeClock,
    pipeline: &'static SharedPipeline,
) {
    info!("Echo task started on GPIO{}", echo.pin());

    echo.dispatch(|pin, events| {
        let now = clock.now_micros();

        match pipeline.timer.on_edge(pin, events, now, &pipeline.intervals) {
            EdgeOutcome::Published(interval) => {
                trace!("Echo pulse {} us", interval.as_micros());
            }
            EdgeOutcome::Unarmed => {
                warn!(
                    "Falling edge without rising edge dropped ({} so far)",
                    pipeline.timer.unarmed_count()
                );
            }
            EdgeOutcome::Armed | EdgeOutcome::Ignored => {}
        }
    })
    .await
}
