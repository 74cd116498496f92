//! Echoline - Ultrasonic Rangefinder Firmware
//!
//! Main firmware binary for an RP2040 driving an HC-SR04 style sensor and
//! a 128x32 SSD1306 OLED.
//!
//! Wiring (Raspberry Pi Pico):
//! - GPIO16: sensor TRIG
//! - GPIO17: sensor ECHO (through a 5V→3.3V divider)
//! - GPIO4/GPIO5: OLED SDA/SCL on I2C0

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use echoline_core::{Pipeline, PipelineConfig, TriggerCycle};
use echoline_hal_rp2040::{EchoInput, RpOutput, UptimeClock};

use crate::display::OledDisplay;
use crate::tasks::SharedPipeline;

mod display;
mod tasks;

/// Build-time configuration
const CONFIG: PipelineConfig = PipelineConfig::DEFAULT;

/// I2C clock for the OLED
const OLED_I2C_HZ: u32 = 400_000;

/// Executor for the echo edge task; preempts all thread-mode tasks
static EDGE_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

// Pipeline state shared by every task (must live forever)
static PIPELINE: StaticCell<SharedPipeline> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EDGE_EXECUTOR.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Echoline firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let pipeline: &'static SharedPipeline = PIPELINE.init(Pipeline::new(CONFIG.sensor.echo_pin));

    // Sensor pins - assignments must match CONFIG.sensor
    let trigger_pin = Output::new(p.PIN_16, Level::Low);
    let echo_pin = Input::new(p.PIN_17, Pull::Down);
    info!(
        "Sensor on GPIO{} (trigger) / GPIO{} (echo)",
        CONFIG.sensor.trigger_pin, CONFIG.sensor.echo_pin
    );

    let trigger = TriggerCycle::new(
        RpOutput::new(trigger_pin),
        Delay,
        CONFIG.sensor.pulse_width_us,
    );
    let echo = EchoInput::new(echo_pin, CONFIG.sensor.echo_pin);

    // Setup I2C for OLED (GPIO4=SDA, GPIO5=SCL)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = OLED_I2C_HZ;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    let display = OledDisplay::new(i2c);

    // Edge capture runs at interrupt priority
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let edge_spawner = EDGE_EXECUTOR.start(interrupt::SWI_IRQ_1);
    edge_spawner
        .spawn(tasks::echo_task(echo, UptimeClock, pipeline))
        .unwrap();

    // Spawn tasks
    spawner
        .spawn(tasks::resolver_task(pipeline, CONFIG.sensor.speed_of_sound_cm_s))
        .unwrap();
    spawner
        .spawn(tasks::oled_task(display, pipeline, CONFIG.display))
        .unwrap();
    spawner.spawn(tasks::trigger_task(trigger, pipeline)).unwrap();

    info!("All tasks spawned, firmware running");
}
