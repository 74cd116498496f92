//! OLED presentation task
//!
//! Owns the display. Polls for trigger pulses and shows either the latest
//! distance or the sensor failure message.

use defmt::*;
use embassy_futures::yield_now;
use embassy_time::Delay;

use echoline_core::{DisplayConfig, DisplayState, PresentationLoop};
use echoline_display::{DisplayBackend, DisplayError};

use super::SharedPipeline;
use crate::display::OledDisplay;

/// Display task - renders one frame per consumed trigger
#[embassy_executor::task]
pub async fn oled_task(
    mut display: OledDisplay,
    pipeline: &'static SharedPipeline,
    config: DisplayConfig,
) {
    info!("Initializing display driver");
    if let Err(e) = display.init() {
        error!("Failed to initialize display: {:?}", e);
    }

    let (width, height) = display.pixel_dimensions();
    info!("Initializing graphics ({}x{})", width, height);
    let mut presentation =
        PresentationLoop::new(&pipeline.trigger, &pipeline.distances, display, Delay, config);

    // Errors repeat every cycle while the panel is unreachable; log changes only
    let mut last_error: Option<DisplayError> = None;

    loop {
        match presentation.poll().await {
            Ok(None) => yield_now().await,
            Ok(Some(state)) => {
                if last_error.take().is_some() {
                    info!("Display recovered");
                }
                if let DisplayState::Failure = state {
                    debug!("No fresh distance for this trigger");
                }
                if let Some(frame) = presentation.last_frame() {
                    trace!("Shown {}", frame);
                }
            }
            Err(e) => {
                if last_error != Some(e) {
                    warn!("Display error: {:?}", e);
                    last_error = Some(e);
                }
                yield_now().await;
            }
        }
    }
}
