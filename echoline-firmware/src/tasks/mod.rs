//! Embassy async tasks
//!
//! Each stage of the ranging pipeline runs as its own task and talks to
//! the others only through the shared [`Pipeline`].

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use echoline_core::Pipeline;

pub mod echo;
pub mod oled;
pub mod resolver;
pub mod trigger;

pub use echo::echo_task;
pub use oled::oled_task;
pub use resolver::resolver_task;
pub use trigger::{trigger_task, SensorTrigger};

/// Pipeline shared between interrupt and thread-mode tasks
pub type SharedPipeline = Pipeline<CriticalSectionRawMutex>;
