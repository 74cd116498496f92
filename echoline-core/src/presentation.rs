//! Presentation loop
//!
//! Each consumed trigger produces exactly one frame: the latest distance
//! if the resolver published one since the last frame, otherwise the
//! sensor failure message. Polling never waits on the pipeline, so a
//! silent sensor shows up as a failure on the very next trigger.
//!
//! ```text
//!   WaitingForTrigger ──trigger──► Rendering ──flush──► WaitingForTrigger
//!          ▲    │
//!          └────┘ no trigger: caller yields and polls again
//! ```

use core::fmt::Write;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::delay::DelayNs;
use heapless::String;

use echoline_display::{Bar, DisplayBackend, DisplayError, Frame, Point, FRAME_TEXT_LEN};

use crate::channel::{LatestChannel, TriggerSignal};
use crate::config::DisplayConfig;
use crate::measurement::Distance;

/// Shown when a trigger found no fresh distance
pub const FAILURE_TEXT: &str = "ERRO: O sensor falhou";

/// What one presentation cycle shows
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayState {
    /// A fresh distance
    Reading(Distance),
    /// No distance was available when the trigger was consumed
    Failure,
}

impl DisplayState {
    /// Build the frame for this state on a panel `panel_width` pixels wide
    pub fn compose(&self, config: &DisplayConfig, panel_width: u16) -> Frame {
        let origin = Point::new(config.text_x, config.text_y);

        match self {
            DisplayState::Reading(distance) => {
                let mut text: String<FRAME_TEXT_LEN> = String::new();
                // Capacity covers every distance a u32 interval can produce
                write!(text, "Distance: {:.2} cm", distance.as_cm()).ok();

                Frame::text(origin, config.text_scale, &text).with_bar(Bar {
                    row: config.bar_row,
                    length: distance.bar_length(panel_width),
                })
            }
            DisplayState::Failure => Frame::text(origin, config.text_scale, FAILURE_TEXT),
        }
    }
}

/// Presentation loop state
///
/// Owns the display exclusively; nothing else draws to it.
pub struct PresentationLoop<'a, M: RawMutex, B, D> {
    trigger: &'a TriggerSignal<M>,
    distances: &'a LatestChannel<M, Distance>,
    display: B,
    hold: D,
    config: DisplayConfig,
    last_frame: Option<Frame>,
}

impl<'a, M, B, D> PresentationLoop<'a, M, B, D>
where
    M: RawMutex,
    B: DisplayBackend,
    D: DelayNs,
{
    /// Create the loop
    ///
    /// `hold` must yield to the scheduler while waiting.
    pub fn new(
        trigger: &'a TriggerSignal<M>,
        distances: &'a LatestChannel<M, Distance>,
        display: B,
        hold: D,
        config: DisplayConfig,
    ) -> Self {
        Self {
            trigger,
            distances,
            display,
            hold,
            config,
            last_frame: None,
        }
    }

    /// Run one cycle
    ///
    /// Returns `Ok(None)` if no trigger was pending; the caller should
    /// yield before polling again. Otherwise renders, flushes and returns
    /// the state that was shown.
    pub async fn poll(&mut self) -> Result<Option<DisplayState>, DisplayError> {
        if !self.trigger.try_consume() {
            return Ok(None);
        }

        let state = match self.distances.try_receive() {
            Some(distance) => DisplayState::Reading(distance),
            None => DisplayState::Failure,
        };

        let (panel_width, _) = self.display.pixel_dimensions();
        let frame = state.compose(&self.config, panel_width);
        frame.render(&mut self.display)?;
        if let DisplayState::Reading(_) = state {
            self.hold.delay_ms(self.config.hold_ms).await;
        }
        self.display.flush()?;

        self.last_frame = Some(frame);
        Ok(Some(state))
    }

    /// Last frame that reached the panel
    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SPEED_OF_SOUND_CM_PER_S;
    use crate::measurement::Interval;
    use crate::pipeline::Pipeline;
    use crate::resolver::DistanceResolver;
    use echoline_hal::{EDGE_FALL, EDGE_RISE};
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::string::{String as StdString, ToString};
    use std::vec::Vec;

    /// Panel and hold calls, in the order they happened
    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Text(StdString),
        Line(Point, Point),
        Hold(u32),
        Flush,
    }

    type Log = Rc<RefCell<Vec<Op>>>;

    struct Panel {
        log: Log,
        width: u16,
        fail_flush: bool,
    }

    impl DisplayBackend for Panel {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.log.borrow_mut().push(Op::Clear);
            Ok(())
        }

        fn draw_text(
            &mut self,
            _origin: Point,
            _scale: u8,
            text: &str,
        ) -> Result<(), DisplayError> {
            self.log.borrow_mut().push(Op::Text(text.to_string()));
            Ok(())
        }

        fn draw_line(&mut self, from: Point, to: Point) -> Result<(), DisplayError> {
            self.log.borrow_mut().push(Op::Line(from, to));
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            if self.fail_flush {
                return Err(DisplayError::Communication);
            }
            self.log.borrow_mut().push(Op::Flush);
            Ok(())
        }

        fn pixel_dimensions(&self) -> (u16, u16) {
            (self.width, 32)
        }
    }

    /// Records requested hold time without waiting
    struct Hold {
        log: Log,
    }

    impl DelayNs for Hold {
        async fn delay_ns(&mut self, ns: u32) {
            self.log.borrow_mut().push(Op::Hold(ns));
        }
    }

    type Loop<'a> = PresentationLoop<'a, NoopRawMutex, Panel, Hold>;

    fn presentation<'a>(pipeline: &'a Pipeline<NoopRawMutex>, log: &Log, width: u16) -> Loop<'a> {
        let panel = Panel {
            log: Rc::clone(log),
            width,
            fail_flush: false,
        };
        let hold = Hold {
            log: Rc::clone(log),
        };
        PresentationLoop::new(
            &pipeline.trigger,
            &pipeline.distances,
            panel,
            hold,
            DisplayConfig::DEFAULT,
        )
    }

    fn texts(log: &Log) -> Vec<StdString> {
        log.borrow()
            .iter()
            .filter_map(|op| match op {
                Op::Text(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn echo(pipeline: &Pipeline<NoopRawMutex>, rising_us: u32, falling_us: u32) {
        let pin = pipeline.timer.echo_pin();
        pipeline.timer.on_edge(pin, EDGE_RISE, rising_us, &pipeline.intervals);
        pipeline.timer.on_edge(pin, EDGE_FALL, falling_us, &pipeline.intervals);
    }

    fn resolve(pipeline: &Pipeline<NoopRawMutex>) {
        let resolver = DistanceResolver::new(
            &pipeline.intervals,
            &pipeline.distances,
            SPEED_OF_SOUND_CM_PER_S,
        );
        block_on(resolver.resolve_next());
    }

    #[test]
    fn test_compose_reading() {
        let frame = DisplayState::Reading(Distance::from_cm(9.996))
            .compose(&DisplayConfig::DEFAULT, 128);

        assert_eq!(frame.as_str(), "Distance: 10.00 cm");
        assert_eq!(frame.bar(), Some(Bar { row: 27, length: 10 }));
        assert_eq!(frame.origin(), Point::new(0, 0));
        assert_eq!(frame.scale(), 1);
    }

    #[test]
    fn test_compose_failure() {
        let frame = DisplayState::Failure.compose(&DisplayConfig::DEFAULT, 128);

        assert_eq!(frame.as_str(), FAILURE_TEXT);
        assert_eq!(frame.bar(), None);
    }

    #[test]
    fn test_compose_far_reading_fits() {
        let distance = Distance::from_interval(Interval::from_micros(u32::MAX));
        let frame = DisplayState::Reading(distance).compose(&DisplayConfig::DEFAULT, 128);

        assert!(frame.as_str().starts_with("Distance: "));
        assert!(frame.as_str().ends_with(" cm"));
        assert_eq!(frame.bar().map(|bar| bar.length), Some(127));
    }

    #[test]
    fn test_idle_without_trigger() {
        let pipeline: Pipeline<NoopRawMutex> = Pipeline::new(17);
        let log: Log = Rc::default();
        let mut presentation = presentation(&pipeline, &log, 128);

        pipeline.distances.publish(Distance::from_cm(20.0));

        assert_eq!(block_on(presentation.poll()), Ok(None));
        assert!(log.borrow().is_empty());
        assert!(presentation.last_frame().is_none());

        // The distance stays queued for the next trigger
        assert!(pipeline.distances.is_pending());
    }

    #[test]
    fn test_reading_held_before_flush() {
        let pipeline: Pipeline<NoopRawMutex> = Pipeline::new(17);
        let log: Log = Rc::default();
        let mut presentation = presentation(&pipeline, &log, 128);

        pipeline.trigger.raise();
        echo(&pipeline, 1000, 1588);
        resolve(&pipeline);

        let state = block_on(presentation.poll()).unwrap();
        assert!(matches!(state, Some(DisplayState::Reading(_))));

        assert_eq!(
            *log.borrow(),
            vec![
                Op::Clear,
                Op::Text("Distance: 10.00 cm".to_string()),
                Op::Line(Point::new(0, 27), Point::new(10, 27)),
                Op::Hold(50_000_000),
                Op::Flush,
            ]
        );
    }

    #[test]
    fn test_failure_when_no_echo() {
        let pipeline: Pipeline<NoopRawMutex> = Pipeline::new(17);
        let log: Log = Rc::default();
        let mut presentation = presentation(&pipeline, &log, 128);

        pipeline.trigger.raise();

        assert_eq!(block_on(presentation.poll()), Ok(Some(DisplayState::Failure)));

        // Failure frames are not held
        assert_eq!(
            *log.borrow(),
            vec![Op::Clear, Op::Text(FAILURE_TEXT.to_string()), Op::Flush]
        );
    }

    #[test]
    fn test_bar_clamped_to_panel_width() {
        let pipeline: Pipeline<NoopRawMutex> = Pipeline::new(17);
        let log: Log = Rc::default();
        let mut presentation = presentation(&pipeline, &log, 64);

        pipeline.distances.publish(Distance::from_cm(100.0));
        pipeline.trigger.raise();
        block_on(presentation.poll()).unwrap();

        let bar = presentation.last_frame().and_then(|frame| frame.bar());
        assert_eq!(bar, Some(Bar { row: 27, length: 63 }));
        assert!(log
            .borrow()
            .contains(&Op::Line(Point::new(0, 27), Point::new(63, 27))));
    }

    #[test]
    fn test_only_latest_reading_rendered() {
        let pipeline: Pipeline<NoopRawMutex> = Pipeline::new(17);
        let log: Log = Rc::default();
        let mut presentation = presentation(&pipeline, &log, 128);

        pipeline.trigger.raise();
        echo(&pipeline, 1000, 1588);
        resolve(&pipeline);
        echo(&pipeline, 70_000, 71_176);
        resolve(&pipeline);

        block_on(presentation.poll()).unwrap();

        assert_eq!(texts(&log), vec!["Distance: 19.99 cm"]);
        assert_eq!(
            presentation.last_frame().map(|frame| frame.as_str()),
            Some("Distance: 19.99 cm")
        );
    }

    #[test]
    fn test_reading_consumed_once() {
        let pipeline: Pipeline<NoopRawMutex> = Pipeline::new(17);
        let log: Log = Rc::default();
        let mut presentation = presentation(&pipeline, &log, 128);

        pipeline.distances.publish(Distance::from_cm(30.0));

        pipeline.trigger.raise();
        block_on(presentation.poll()).unwrap();
        pipeline.trigger.raise();
        let second = block_on(presentation.poll()).unwrap();

        assert_eq!(second, Some(DisplayState::Failure));
        assert_eq!(texts(&log), vec!["Distance: 30.00 cm", FAILURE_TEXT]);
    }

    #[test]
    fn test_flush_error_reported() {
        let pipeline: Pipeline<NoopRawMutex> = Pipeline::new(17);
        let log: Log = Rc::default();
        let mut presentation = presentation(&pipeline, &log, 128);
        presentation.display.fail_flush = true;

        pipeline.trigger.raise();

        assert_eq!(block_on(presentation.poll()), Err(DisplayError::Communication));
        assert!(presentation.last_frame().is_none());

        // The trigger was consumed; the loop just moves on
        assert!(!pipeline.trigger.is_raised());
    }
}
