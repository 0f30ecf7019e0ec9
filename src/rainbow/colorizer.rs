use crossterm::style::{Color, SetForegroundColor};
use crossterm::Command;
use once_cell::unsync::OnceCell;

use super::Hue;

/// Width of one hue wheel segment.
const SEGMENT_WIDTH: u8 = 43;

/// Maps hues to true color foreground escape sequences.
///
/// Every hue is rendered at most once; later lookups hand back the cached string.
pub(crate) struct HueColorizer {
    cache: [OnceCell<String>; 256],
}

impl HueColorizer {
    pub(crate) fn new() -> Self {
        Self { cache: std::array::from_fn(|_| OnceCell::new()) }
    }

    /// Get the escape sequence that selects the color for `hue`
    pub(crate) fn color_for(&self, hue: Hue) -> &str {
        self.cache[usize::from(hue)].get_or_init(|| {
            let (r, g, b) = hue_to_rgb(hue);
            foreground_sequence(r, g, b)
        })
    }
}

impl Default for HueColorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HueColorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached = self.cache.iter().filter(|cell| cell.get().is_some()).count();
        f.debug_struct("HueColorizer").field("cached", &cached).finish()
    }
}

/// Convert a hue into RGB using a six segment wheel.
///
/// The ramp uses wrapping 8 bit arithmetic and must not be clamped.
pub(crate) fn hue_to_rgb(hue: Hue) -> (u8, u8, u8) {
    let segment = hue / SEGMENT_WIDTH;
    let remainder = hue - SEGMENT_WIDTH * segment;
    let rising = remainder.wrapping_mul(6);
    let falling = 255u8.wrapping_sub(rising);

    match segment {
        0 => (255, rising, 0),
        1 => (falling, 255, 0),
        2 => (0, 255, rising),
        3 => (0, falling, 255),
        4 => (rising, 0, 255),
        _ => (255, 0, falling),
    }
}

fn foreground_sequence(r: u8, g: u8, b: u8) -> String {
    let mut sequence = String::new();
    // Writing into a String cannot fail.
    let _ = SetForegroundColor(Color::Rgb { r, g, b }).write_ansi(&mut sequence);
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::start(0, (255, 0, 0))]
    #[case::end_of_first_segment(42, (255, 252, 0))]
    #[case::second_segment(43, (255, 255, 0))]
    #[case::third_segment(86, (0, 255, 0))]
    #[case::end_of_second_segment(85, (3, 255, 0))]
    #[case::fourth_segment(129, (0, 255, 255))]
    #[case::middle(128, (0, 255, 252))]
    #[case::fifth_segment(171, (0, 3, 255))]
    #[case::sixth_segment(215, (255, 0, 255))]
    #[case::last_segment_start(214, (252, 0, 255))]
    #[case::last(255, (255, 0, 15))]
    fn segment_boundaries(#[case] hue: u8, #[case] expected: (u8, u8, u8)) {
        assert_eq!(hue_to_rgb(hue), expected);
    }

    #[test]
    fn renders_true_color_sequence() {
        let colorizer = HueColorizer::new();
        assert_eq!(colorizer.color_for(0), "\x1b[38;2;255;0;0m");
        assert_eq!(colorizer.color_for(2), "\x1b[38;2;255;12;0m");
    }

    #[test]
    fn every_hue_is_well_formed() {
        let colorizer = HueColorizer::new();
        for hue in 0..=255u8 {
            let sequence = colorizer.color_for(hue);
            assert!(sequence.starts_with("\x1b[38;2;"), "{sequence:?}");
            assert!(sequence.ends_with('m'), "{sequence:?}");
            let channels: Vec<u8> = sequence["\x1b[38;2;".len()..sequence.len() - 1]
                .split(';')
                .map(|channel| channel.parse().expect("channel is not a number"))
                .collect();
            let (r, g, b) = hue_to_rgb(hue);
            assert_eq!(channels, vec![r, g, b]);
        }
    }

    #[test]
    fn lookups_are_memoized() {
        let colorizer = HueColorizer::new();
        let first = colorizer.color_for(200).as_ptr();
        let second = colorizer.color_for(200).as_ptr();
        assert_eq!(first, second);
    }
}
