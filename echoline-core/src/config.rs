//! Compile-time configuration
//!
//! There is no configuration file and no persisted state. Every parameter
//! is a constant fixed at build time; [`PipelineConfig::DEFAULT`] describes
//! an HC-SR04 on a Raspberry Pi Pico with a 128x32 SSD1306.

/// Speed of sound used for the distance conversion, in cm/s
pub const SPEED_OF_SOUND_CM_PER_S: f32 = 34_000.0;

/// Ultrasonic sensor wiring and timing
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// GPIO driving the sensor's TRIG input
    pub trigger_pin: u8,
    /// GPIO reading the sensor's ECHO output
    pub echo_pin: u8,
    /// Trigger pulse width in microseconds
    pub pulse_width_us: u32,
    /// Speed of sound in cm/s
    pub speed_of_sound_cm_s: f32,
}

impl SensorConfig {
    pub const DEFAULT: Self = Self {
        trigger_pin: 16,
        echo_pin: 17,
        pulse_width_us: 10,
        speed_of_sound_cm_s: SPEED_OF_SOUND_CM_PER_S,
    };
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Frame layout
///
/// Panel geometry is not configured here; the display backend reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Text origin x
    pub text_x: u16,
    /// Text origin y
    pub text_y: u16,
    /// Glyph scale
    pub text_scale: u8,
    /// Pixel row of the distance bar
    pub bar_row: u16,
    /// How long a reading frame is held before it is flushed (ms)
    pub hold_ms: u32,
}

impl DisplayConfig {
    pub const DEFAULT: Self = Self {
        text_x: 0,
        text_y: 0,
        text_scale: 1,
        bar_row: 27,
        hold_ms: 50,
    };
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete pipeline configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PipelineConfig {
    pub sensor: SensorConfig,
    pub display: DisplayConfig,
}

impl PipelineConfig {
    pub const DEFAULT: Self = Self {
        sensor: SensorConfig::DEFAULT,
        display: DisplayConfig::DEFAULT,
    };
}
