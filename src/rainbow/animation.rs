use std::io::Write;
use std::thread;
use std::time::Duration;

use super::printer::LinePrinter;
use super::{is_blank, Hue, RenderError, CURSOR_BACK};
use crate::config::{AnimationConfig, ColorConfig};

/// Paces animation frames.
pub(crate) trait FrameClock {
    /// Block until the next frame is due
    fn pause(&mut self, interval: Duration);
}

/// A clock that puts the current thread to sleep.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SleepClock;

impl FrameClock for SleepClock {
    fn pause(&mut self, interval: Duration) {
        thread::sleep(interval);
    }
}

/// Compute the start hue of an animation frame.
///
/// Everything is 8 bit wrapping math, including the frame index, so long animations
/// cycle through the wheel quickly.
pub(crate) fn frame_hue(base_hue: Hue, frame: u32, config: &ColorConfig) -> Hue {
    // Only the low byte of the frame index matters.
    let frame = frame as u8;
    base_hue.wrapping_add(frame.wrapping_mul(config.frequency).wrapping_mul(config.vertical_offset).wrapping_mul(2))
}

/// Redraws a line in place with a shifting hue.
#[derive(Debug)]
pub(crate) struct AnimationDriver<C> {
    config: AnimationConfig,
    clock: C,
}

impl<C: FrameClock> AnimationDriver<C> {
    pub(crate) fn new(config: AnimationConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Animate a line that has already been printed once.
    ///
    /// Blank lines are left alone.
    pub(crate) fn animate<W: Write>(
        &mut self,
        out: &mut W,
        printer: &mut LinePrinter,
        line: &str,
        base_hue: Hue,
    ) -> Result<(), RenderError> {
        if is_blank(line) {
            return Ok(());
        }
        let interval = self.config.frame_interval();
        for frame in 0..self.config.duration_frames {
            // Anything still buffered must hit the terminal before we wait.
            out.flush()?;
            self.clock.pause(interval);
            out.write_all(CURSOR_BACK.as_bytes())?;
            let hue = frame_hue(base_hue, frame, printer.config());
            printer.print_line(out, line, hue)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NumberingMode;
    use crate::rainbow::colorizer::hue_to_rgb;
    use crate::rainbow::testing::{capture, plain_text, Event, InstantClock};
    use rstest::rstest;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    /// Shared record of flushes and pauses in the order they happened.
    type Journal = Rc<RefCell<Vec<String>>>;

    struct JournalClock(Journal);

    impl FrameClock for JournalClock {
        fn pause(&mut self, interval: Duration) {
            self.0.borrow_mut().push(format!("pause {}ms", interval.as_millis()));
        }
    }

    struct JournalWriter {
        journal: Journal,
        bytes: Vec<u8>,
    }

    impl Write for JournalWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.journal.borrow_mut().push("flush".into());
            Ok(())
        }
    }

    fn animation(frames: u32) -> AnimationConfig {
        AnimationConfig { duration_frames: frames, frames_per_second: 20 }
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 8)]
    #[case(2, 16)]
    #[case(32, 0)]
    #[case(256, 0)]
    #[case(257, 8)]
    fn frame_hue_formula(#[case] frame: u32, #[case] expected: u8) {
        assert_eq!(frame_hue(0, frame, &ColorConfig::default()), expected);
    }

    #[test]
    fn frame_hue_wraps_with_base() {
        let config = ColorConfig { frequency: 3, vertical_offset: 5, ..Default::default() };
        assert_eq!(frame_hue(250, 1, &config), 250u8.wrapping_add(30));
    }

    #[test]
    fn redraws_each_frame() {
        let mut printer = LinePrinter::new(ColorConfig::default());
        let mut driver = AnimationDriver::new(animation(3), InstantClock::default());
        let mut out = Vec::new();
        driver.animate(&mut out, &mut printer, "hi\n", 0).expect("animate failed");

        let events = capture(&out);
        let frame_starts: Vec<_> = events
            .windows(2)
            .filter(|pair| pair[0] == Event::CursorBack)
            .map(|pair| pair[1].clone())
            .collect();
        let expected: Vec<_> = [0u8, 8, 16]
            .into_iter()
            .map(|hue| {
                let (r, g, b) = hue_to_rgb(hue);
                Event::Color(r, g, b)
            })
            .collect();
        assert_eq!(frame_starts, expected);
        assert_eq!(plain_text(&out), "hi\nhi\nhi\n");
        assert_eq!(driver.clock.pauses, vec![Duration::from_millis(50); 3]);
    }

    #[test]
    fn flushes_before_every_pause() {
        let journal = Journal::default();
        let mut printer = LinePrinter::new(ColorConfig::default());
        let mut driver = AnimationDriver::new(animation(2), JournalClock(journal.clone()));
        let mut out = JournalWriter { journal: journal.clone(), bytes: Vec::new() };
        driver.animate(&mut out, &mut printer, "x\n", 10).expect("animate failed");

        assert_eq!(*journal.borrow(), vec!["flush", "pause 50ms", "flush", "pause 50ms"]);
        assert!(out.bytes.starts_with(CURSOR_BACK.as_bytes()));
    }

    #[test]
    fn blank_lines_are_not_animated() {
        let mut printer = LinePrinter::new(ColorConfig::default());
        let mut driver = AnimationDriver::new(animation(5), InstantClock::default());
        let mut out = Vec::new();
        driver.animate(&mut out, &mut printer, "\n", 0).expect("animate failed");
        assert!(out.is_empty());
        assert!(driver.clock.pauses.is_empty());
    }

    #[test]
    fn every_frame_takes_the_next_number() {
        let mut printer = LinePrinter::new(ColorConfig { numbering: NumberingMode::All, ..Default::default() });
        let mut driver = AnimationDriver::new(animation(2), InstantClock::default());
        let mut out = Vec::new();
        printer.print_line(&mut out, "x\n", 0).expect("print failed");
        driver.animate(&mut out, &mut printer, "x\n", 0).expect("animate failed");
        assert_eq!(plain_text(&out), "       1  x\n       2  x\n       3  x\n");
    }
}
