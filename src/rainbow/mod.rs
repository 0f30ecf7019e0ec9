mod animation;
mod colorizer;
mod printer;
mod stream;

use std::time::{SystemTime, UNIX_EPOCH};

pub(crate) use animation::SleepClock;
pub(crate) use colorizer::HueColorizer;
pub(crate) use stream::StreamOrchestrator;

/// A position on the color wheel. All hue math wraps around at 256.
pub(crate) type Hue = u8;

/// Moves the cursor up one line and back to the first column.
pub(crate) const CURSOR_BACK: &str = "\x1b[F";

/// Errors that can occur while writing colored output
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// Whether the reader on the other end went away
    pub(crate) fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Io(e) => e.kind() == std::io::ErrorKind::BrokenPipe,
        }
    }
}

/// A line made of nothing but its terminator.
pub(crate) fn is_blank(line: &str) -> bool {
    line == "\n"
}

/// Draw the hue the first line starts at.
///
/// A zero seed picks one from the system clock.
pub(crate) fn start_hue(seed: u64) -> Hue {
    let seed = if seed == 0 { clock_seed() } else { seed };
    fastrand::Rng::with_seed(seed).u8(..)
}

fn clock_seed() -> u64 {
    // Keeping the low 64 bits of the nanosecond count is enough to vary between runs.
    SystemTime::now().duration_since(UNIX_EPOCH).map(|elapsed| elapsed.as_nanos() as u64).unwrap_or(1)
}
