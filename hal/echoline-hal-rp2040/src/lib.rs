//! RP2040-specific HAL for the rangefinder firmware
//!
//! This crate provides RP2040 implementations of the shared `echoline-hal`
//! capabilities on top of `embassy-rp`:
//!
//! - Push-pull output wrapper for the trigger line
//! - Echo input edge dispatcher
//! - Microsecond uptime clock backed by the embassy time driver

#![no_std]

pub mod clock;
pub mod edge;
pub mod gpio;

pub use clock::UptimeClock;
pub use edge::EchoInput;
pub use gpio::RpOutput;

// Re-export shared traits from echoline-hal for convenience
pub use echoline_hal::{MicrosClock, OutputPin};
