use std::io::{BufRead, Write};

use crossterm::style::{Attribute, ResetColor, SetAttribute};
use crossterm::QueueableCommand;

use super::animation::{AnimationDriver, FrameClock};
use super::printer::LinePrinter;
use super::{Hue, RenderError};
use crate::config::{ColorConfig, Settings};
use crate::input::{report_failure, Source};

/// Feeds every line of every source through the printer, keeping the hue rolling
/// from one line to the next.
#[derive(Debug)]
pub(crate) struct StreamOrchestrator<C> {
    config: ColorConfig,
    printer: LinePrinter,
    animator: Option<AnimationDriver<C>>,
    hue: Hue,
}

impl<C: FrameClock> StreamOrchestrator<C> {
    pub(crate) fn new(settings: &Settings, start_hue: Hue, clock: C) -> Self {
        Self {
            config: settings.color,
            printer: LinePrinter::new(settings.color),
            animator: settings.animation.map(|animation| AnimationDriver::new(animation, clock)),
            hue: start_hue,
        }
    }

    /// Render all sources to `out`.
    ///
    /// Failing to read a source only ends that source, failing to write ends the run.
    pub(crate) fn run<W, I>(&mut self, out: &mut W, sources: I) -> Result<(), RenderError>
    where
        W: Write,
        I: IntoIterator<Item = Source>,
    {
        if self.config.plain {
            for source in sources {
                copy_source(out, source)?;
            }
            out.flush()?;
            return Ok(());
        }

        if self.config.invert {
            out.queue(SetAttribute(Attribute::Reverse))?;
        }
        for source in sources {
            self.render_source(out, source)?;
        }
        out.queue(ResetColor)?;
        out.flush()?;
        Ok(())
    }

    fn render_source<W: Write>(&mut self, out: &mut W, mut source: Source) -> Result<(), RenderError> {
        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            match source.reader.read_until(b'\n', &mut buffer) {
                Ok(_) => (),
                Err(e) => {
                    report_failure(&source.name, &e);
                    return Ok(());
                }
            }
            // An unterminated tail is never printed.
            if buffer.last() != Some(&b'\n') {
                return Ok(());
            }
            let line = decode_lossy(&buffer);
            let line_start = self.hue;
            self.printer.print_line(out, &line, line_start)?;
            if let Some(animator) = &mut self.animator {
                animator.animate(out, &mut self.printer, &line, line_start)?;
            }
            self.hue = self.hue.wrapping_add(self.config.vertical_offset);
        }
    }
}

/// Decode a line, turning every invalid byte into its own replacement character.
fn decode_lossy(bytes: &[u8]) -> String {
    let mut line = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        line.push_str(chunk.valid());
        line.extend(std::iter::repeat(char::REPLACEMENT_CHARACTER).take(chunk.invalid().len()));
    }
    line
}

/// Copy a source byte for byte.
fn copy_source<W: Write>(out: &mut W, mut source: Source) -> Result<(), RenderError> {
    loop {
        let chunk = match source.reader.fill_buf() {
            Ok([]) => return Ok(()),
            Ok(chunk) => chunk,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                report_failure(&source.name, &e);
                return Ok(());
            }
        };
        out.write_all(chunk)?;
        let length = chunk.len();
        source.reader.consume(length);
    }
}
