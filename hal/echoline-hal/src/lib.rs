//! Echoline Hardware Abstraction Layer
//!
//! This crate defines the hardware capabilities the ranging pipeline
//! consumes. Chip-specific HALs implement them so the pipeline logic in
//! `echoline-core` stays board-agnostic and host-testable.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (echoline-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  echoline-core (pipeline logic)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  echoline-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ echoline-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (sensor trigger line)
//! - [`clock::MicrosClock`] - Free-running microsecond counter
//! - [`edge::EdgeKind`] - Edge-interrupt mask decoding

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod edge;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use clock::MicrosClock;
pub use edge::{EdgeEvent, EdgeKind, EDGE_FALL, EDGE_RISE};
pub use gpio::OutputPin;
