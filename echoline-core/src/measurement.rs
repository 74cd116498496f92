//! Measurement types
//!
//! An [`Interval`] is the echo pulse width in microseconds. A [`Distance`]
//! is the one-way range it corresponds to: the pulse covers the round trip,
//! so the path length is halved.

use crate::config::SPEED_OF_SOUND_CM_PER_S;

/// Microseconds per second
const MICROS_PER_SECOND: f32 = 1_000_000.0;

/// Echo pulse width in microseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Interval(u32);

impl Interval {
    pub const fn from_micros(micros: u32) -> Self {
        Self(micros)
    }

    /// Interval between two counter readings
    ///
    /// Uses wrapping subtraction so a counter wrap between the rising and
    /// falling edge still yields the pulse width.
    pub const fn between(rising_us: u32, falling_us: u32) -> Self {
        Self(falling_us.wrapping_sub(rising_us))
    }

    pub const fn as_micros(self) -> u32 {
        self.0
    }

    pub fn as_secs_f32(self) -> f32 {
        self.0 as f32 / MICROS_PER_SECOND
    }
}

/// Range to the reflecting surface in centimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Distance(f32);

impl Distance {
    pub const fn from_cm(cm: f32) -> Self {
        Self(cm)
    }

    /// Convert an echo interval using the standard speed of sound
    pub fn from_interval(interval: Interval) -> Self {
        Self::from_interval_at(interval, SPEED_OF_SOUND_CM_PER_S)
    }

    /// Convert an echo interval: `(seconds * speed) / 2`
    pub fn from_interval_at(interval: Interval, speed_cm_per_s: f32) -> Self {
        Self((interval.as_secs_f32() * speed_cm_per_s) / 2.0)
    }

    pub const fn as_cm(self) -> f32 {
        self.0
    }

    /// Bar length in pixels at one pixel per centimetre
    ///
    /// Rounded to the nearest pixel and clamped so the bar's end point
    /// stays on a panel `width` pixels wide.
    pub fn bar_length(self, width: u16) -> u16 {
        let max = width.saturating_sub(1);
        let px = self.0 + 0.5;
        if px.is_nan() || px < 1.0 {
            0
        } else if px >= max as f32 {
            max
        } else {
            px as u16
        }
    }
}
