//! Display abstraction and frame model for Echoline
//!
//! This crate provides:
//! - `DisplayBackend` trait for small monochrome bitmap displays
//! - `Frame`, the complete content of one presented screen
//!
//! # Architecture
//!
//! The presentation loop composes a `Frame` and renders it into the
//! backend's in-memory buffer. Nothing reaches the panel until the loop
//! calls `flush`, so a frame can be held before it becomes visible.
//!
//! The firmware implements `DisplayBackend` for an SSD1306 over I2C. Tests
//! implement it with a recorder.

#![no_std]

pub mod backend;
pub mod frame;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError, Point};
pub use frame::{Bar, Frame, FRAME_TEXT_LEN};
