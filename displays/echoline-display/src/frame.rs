//! Frame model
//!
//! A frame is one text line plus an optional horizontal bar. It is built
//! fresh for every presentation cycle and has no identity beyond it.

use heapless::String;

use crate::backend::{DisplayBackend, DisplayError, Point};

/// Maximum characters in the frame's text line
pub const FRAME_TEXT_LEN: usize = 32;

/// Horizontal bar anchored at the left edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bar {
    /// Pixel row the bar is drawn on
    pub row: u16,
    /// Length in pixels, starting at x = 0
    pub length: u16,
}

/// Content of one presented screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    text: String<FRAME_TEXT_LEN>,
    origin: Point,
    scale: u8,
    bar: Option<Bar>,
}

impl Frame {
    /// Create a text-only frame
    ///
    /// Text longer than [`FRAME_TEXT_LEN`] is truncated.
    pub fn text(origin: Point, scale: u8, text: &str) -> Self {
        let mut line = String::new();
        for ch in text.chars() {
            if line.push(ch).is_err() {
                break;
            }
        }
        Self {
            text: line,
            origin,
            scale,
            bar: None,
        }
    }

    /// Attach a bar to the frame
    pub fn with_bar(mut self, bar: Bar) -> Self {
        self.bar = Some(bar);
        self
    }

    /// Frame text
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Text origin
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Text scale
    pub fn scale(&self) -> u8 {
        self.scale
    }

    /// Bar, if the frame carries one
    pub fn bar(&self) -> Option<Bar> {
        self.bar
    }

    /// Render the frame into the backend's buffer
    ///
    /// Clears the buffer first. Does not flush.
    pub fn render<B: DisplayBackend + ?Sized>(&self, backend: &mut B) -> Result<(), DisplayError> {
        backend.clear()?;
        backend.draw_text(self.origin, self.scale, &self.text)?;

        if let Some(bar) = self.bar {
            if bar.length > 0 {
                backend.draw_line(Point::new(0, bar.row), Point::new(bar.length, bar.row))?;
            }
        }

        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Frame {
    fn format(&self, f: defmt::Formatter) {
        match self.bar {
            Some(bar) => defmt::write!(f, "Frame[{}, bar={}px]", self.text.as_str(), bar.length),
            None => defmt::write!(f, "Frame[{}]", self.text.as_str()),
        }
    }
}
