//! Trigger task
//!
//! Pulses the sensor back to back. The pulse itself spins; the yield after
//! each pulse is the only point where other thread-mode tasks get to run.

use defmt::*;
use embassy_futures::yield_now;
use embassy_time::Delay;

use echoline_core::TriggerCycle;
use echoline_hal_rp2040::RpOutput;

use super::SharedPipeline;

/// Trigger cycle on an RP2040 output, spinning on the embassy time driver
pub type SensorTrigger = TriggerCycle<RpOutput<'static>, Delay>;

/// Trigger task - emits trigger pulses forever
#[embassy_executor::task]
pub async fn trigger_task(mut cycle: SensorTrigger, pipeline: &'static SharedPipeline) {
    info!("Trigger task started ({} us pulses)", cycle.pulse_width_us());

    loop {
        cycle.pulse(&pipeline.trigger);
        yield_now().await;
    }
}
