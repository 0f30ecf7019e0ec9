use std::time::Duration;

/// Which lines get a line number prefix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum NumberingMode {
    #[default]
    None,
    All,
    NonBlank,
}

/// How lines get colored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ColorConfig {
    /// Hue step between two characters
    pub(crate) frequency: u8,
    /// Hue step between two lines
    pub(crate) vertical_offset: u8,
    /// Turn on inverse video before printing anything
    pub(crate) invert: bool,
    /// Copy input through untouched
    pub(crate) plain: bool,
    pub(crate) numbering: NumberingMode,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self { frequency: 2, vertical_offset: 2, invert: false, plain: false, numbering: NumberingMode::None }
    }
}

/// How each line gets animated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AnimationConfig {
    /// Number of redraws per line
    pub(crate) duration_frames: u32,
    pub(crate) frames_per_second: u32,
}

impl AnimationConfig {
    /// The time to wait between two frames
    pub(crate) fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frames_per_second.max(1)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { duration_frames: 12, frames_per_second: 20 }
    }
}

/// Everything a run needs, resolved once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) color: ColorConfig,
    /// Animation is on when present
    pub(crate) animation: Option<AnimationConfig>,
    /// Seed for the start hue, 0 means derive it from the clock
    pub(crate) seed: u64,
}
