//! Board-agnostic core logic for the rangefinder firmware
//!
//! This crate contains the ranging pipeline without any dependency on a
//! specific chip:
//!
//! - Measurement types (echo interval, distance)
//! - Single-slot overwrite-latest channels and the trigger signal
//! - Edge timer run from interrupt context
//! - Trigger cycle, distance resolver and presentation loop steps
//! - Compile-time configuration
//!
//! ```text
//! edge irq ─► EdgeTimer ─► intervals ─► DistanceResolver ─► distances ─┐
//!                                                                     ▼
//! TriggerCycle ─────────────► trigger ─────────────────────► PresentationLoop ─► display
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod channel;
pub mod config;
pub mod measurement;
pub mod pipeline;
pub mod presentation;
pub mod resolver;
pub mod timer;
pub mod trigger;

pub use channel::{LatestChannel, TriggerSignal};
pub use config::{DisplayConfig, PipelineConfig, SensorConfig};
pub use measurement::{Distance, Interval};
pub use pipeline::Pipeline;
pub use presentation::{DisplayState, PresentationLoop};
pub use resolver::DistanceResolver;
pub use timer::{EdgeOutcome, EdgeTimer};
pub use trigger::TriggerCycle;
