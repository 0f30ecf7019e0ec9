use std::io::Write;

use super::colorizer::HueColorizer;
use super::{is_blank, Hue, RenderError};
use crate::config::{ColorConfig, NumberingMode};

/// Hands out line numbers, starting at 1.
#[derive(Debug)]
pub(crate) struct LineNumberCounter {
    next: u64,
}

impl LineNumberCounter {
    pub(crate) fn new() -> Self {
        Self { next: 1 }
    }

    /// Take the next number if `line` should be numbered under `mode`
    pub(crate) fn assign(&mut self, line: &str, mode: NumberingMode) -> Option<u64> {
        let numbered = match mode {
            NumberingMode::None => false,
            NumberingMode::All => true,
            NumberingMode::NonBlank => !is_blank(line),
        };
        if !numbered {
            return None;
        }
        let number = self.next;
        self.next += 1;
        Some(number)
    }
}

impl Default for LineNumberCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Right aligned in 8 columns followed by two spaces.
pub(crate) fn format_line_number(number: u64) -> String {
    format!("{number:>8}  ")
}

/// Writes lines with every character in its own color.
#[derive(Debug)]
pub(crate) struct LinePrinter {
    config: ColorConfig,
    colorizer: HueColorizer,
    counter: LineNumberCounter,
}

impl LinePrinter {
    pub(crate) fn new(config: ColorConfig) -> Self {
        Self { config, colorizer: HueColorizer::new(), counter: LineNumberCounter::new() }
    }

    pub(crate) fn config(&self) -> &ColorConfig {
        &self.config
    }

    /// Print a line starting at `start_hue`, taking the next line number if needed.
    pub(crate) fn print_line<W: Write>(&mut self, out: &mut W, line: &str, start_hue: Hue) -> Result<(), RenderError> {
        let number = self.counter.assign(line, self.config.numbering);
        self.draw(out, line, start_hue, number)
    }

    fn draw<W: Write>(
        &self,
        out: &mut W,
        line: &str,
        start_hue: Hue,
        number: Option<u64>,
    ) -> Result<(), RenderError> {
        let prefix = number.map(format_line_number).unwrap_or_default();
        let mut hue = start_hue;
        let mut encoded = [0; 4];
        for ch in prefix.chars().chain(line.chars()) {
            out.write_all(self.colorizer.color_for(hue).as_bytes())?;
            out.write_all(ch.encode_utf8(&mut encoded).as_bytes())?;
            hue = hue.wrapping_add(self.config.frequency);
        }
        Ok(())
    }
}
