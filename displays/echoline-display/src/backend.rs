//! Display backend trait
//!
//! Defines the drawing interface the presentation loop consumes.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// A pixel coordinate, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Display backend trait
///
/// Drawing calls only touch the in-memory frame buffer. `flush` transfers
/// the buffer to the panel.
pub trait DisplayBackend {
    /// Clear the frame buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at `origin`
    ///
    /// `scale` selects the glyph size; 1 is the smallest font.
    fn draw_text(&mut self, origin: Point, scale: u8, text: &str) -> Result<(), DisplayError>;

    /// Draw a one-pixel line between two points
    fn draw_line(&mut self, from: Point, to: Point) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Get pixel dimensions as (width, height)
    fn pixel_dimensions(&self) -> (u16, u16);
}
