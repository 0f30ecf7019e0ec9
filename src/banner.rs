use std::io::{self, Write};

use crossterm::style::ResetColor;
use crossterm::Command;

use crate::rainbow::{Hue, HueColorizer};

/// Color help and version text one hue step per character and per line.
pub(crate) fn rainbow_text(text: &str, start_hue: Hue, colorizer: &HueColorizer) -> String {
    let mut output = String::with_capacity(text.len() * 20);
    let mut line_start = start_hue;
    for line in text.split_inclusive('\n') {
        let mut hue = line_start;
        for ch in line.chars() {
            output.push_str(colorizer.color_for(hue));
            output.push(ch);
            hue = hue.wrapping_add(1);
        }
        line_start = line_start.wrapping_add(1);
    }
    push_reset(&mut output);
    output
}

/// Help or version text as it should be printed. Both forms end with a color reset.
pub(crate) fn render(text: &str, colored: bool) -> String {
    if colored {
        return rainbow_text(text, crate::rainbow::start_hue(0), &HueColorizer::new());
    }
    let mut output = text.to_string();
    push_reset(&mut output);
    output
}

fn push_reset(output: &mut String) {
    // Writing into a String cannot fail.
    let _ = ResetColor.write_ansi(output);
}

/// Print help or version text, in color when stdout is a terminal.
pub(crate) fn print(text: &str, colored: bool) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(render(text, colored).as_bytes())?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rainbow::testing::{capture, plain_text, Event};

    #[test]
    fn keeps_text_and_resets() {
        let text = "Usage: huecat\n\nOptions:\n";
        let output = rainbow_text(text, 10, &HueColorizer::new());
        assert_eq!(plain_text(output.as_bytes()), text);
        assert!(output.ends_with("\x1b[0m"));
    }

    #[test]
    fn uncolored_text_still_resets() {
        let text = "huecat 0.1.0\n";
        assert_eq!(render(text, false), "huecat 0.1.0\n\x1b[0m");
        assert_eq!(plain_text(render(text, true).as_bytes()), text);
    }

    #[test]
    fn each_line_starts_one_hue_later() {
        let colorizer = HueColorizer::new();
        let output = rainbow_text("ab\ncd\n", 0, &colorizer);
        let events = capture(output.as_bytes());
        let color = |hue: Hue| {
            let sequence = colorizer.color_for(hue);
            capture(sequence.as_bytes()).remove(0)
        };
        assert_eq!(events[0], color(0));
        assert_eq!(events[2], color(1));
        assert_eq!(events[6], color(1));
        assert_eq!(events[8], color(2));
        assert_eq!(events[12], Event::Reset);
    }
}
