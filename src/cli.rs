use std::path::PathBuf;

use clap::Parser;

use crate::config::{AnimationConfig, ColorConfig, NumberingMode, Settings};

/// Concatenate files to standard output in rainbow colors.
///
/// With no FILE, or when FILE is -, read standard input.
#[derive(Parser, Debug)]
#[command(version, about)]
pub(crate) struct Cli {
    /// Rainbow frequency, the hue step between characters
    #[arg(short = 'F', long, default_value_t = 2, allow_negative_numbers = true)]
    pub(crate) freq: i64,

    /// Vertical offset, the hue step between lines
    #[arg(short = 'O', long, default_value_t = 2, allow_negative_numbers = true)]
    pub(crate) offset: i64,

    /// Invert the output
    #[arg(short, long)]
    pub(crate) invert: bool,

    /// Animate the output
    #[arg(short, long)]
    pub(crate) animate: bool,

    /// RNG seed, 0 means random
    #[arg(short = 'S', long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) seed: i64,

    /// Animation duration in frames
    #[arg(short, long, default_value_t = 12, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) duration: u32,

    /// Animation speed in frames per second
    #[arg(short, long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) speed: u32,

    /// Number all output lines
    #[arg(short, long)]
    pub(crate) number: bool,

    /// Number non-empty output lines, overrides --number
    #[arg(short = 'b', long)]
    pub(crate) number_nonblank: bool,

    /// Force color output even when not writing to a terminal
    #[arg(short, long)]
    pub(crate) force: bool,

    /// Files to print, options must come before them
    #[arg(value_name = "FILE", trailing_var_arg = true)]
    pub(crate) files: Vec<PathBuf>,
}

impl Cli {
    /// Turn the parsed flags into run settings.
    ///
    /// `is_terminal` says whether stdout is a terminal; color is dropped when it isn't
    /// unless forced.
    pub(crate) fn resolve(&self, is_terminal: bool) -> Settings {
        let numbering = if self.number_nonblank {
            NumberingMode::NonBlank
        } else if self.number {
            NumberingMode::All
        } else {
            NumberingMode::None
        };
        let color = ColorConfig {
            frequency: wrap_step(self.freq),
            vertical_offset: wrap_step(self.offset),
            invert: self.invert,
            plain: !is_terminal && !self.force,
            numbering,
        };
        let animation = self
            .animate
            .then_some(AnimationConfig { duration_frames: self.duration, frames_per_second: self.speed });
        // Negative seeds keep their bit pattern.
        Settings { color, animation, seed: self.seed as u64 }
    }
}

/// Reduce a step to the hue range, negative steps walk the wheel backwards.
fn wrap_step(step: i64) -> u8 {
    // rem_euclid(256) always fits in a byte.
    step.rem_euclid(256) as u8
}
