//! Terminal feedback for judged attempts.

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use drill_core::{QualityTier, Verdict};
use std::io::{self, Write};

/// Writes tier-specific feedback, optionally colored.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print the verdict followed by a blank line.
    pub fn feedback<W: Write>(&self, out: &mut W, verdict: &Verdict) -> io::Result<()> {
        match verdict.tier {
            QualityTier::Excellent => {
                self.paint(out, Color::Green, "Correct!")?;
            }
            QualityTier::Good => {
                write!(out, "Almost correct. Right answer is: ")?;
                self.diff(out, &verdict.reference, &verdict.mask)?;
            }
            QualityTier::Mediocre => {
                write!(out, "Not bad. Right answer is: ")?;
                self.diff(out, &verdict.reference, &verdict.mask)?;
            }
            QualityTier::Wrong => {
                self.paint(out, Color::Red, "Wrong. ")?;
                write!(out, "Right answer is: ")?;
                self.paint(out, Color::Green, &verdict.reference)?;
            }
        }
        writeln!(out)?;
        writeln!(out)
    }

    /// Print `reference` with covered characters in green and the rest in red.
    ///
    /// An uncovered space between two covered characters is drawn as `_` so
    /// that words typed without a gap stand out.
    pub fn diff<W: Write>(&self, out: &mut W, reference: &str, mask: &[bool]) -> io::Result<()> {
        let chars: Vec<char> = reference.chars().collect();
        let covered = |i: usize| mask.get(i).copied().unwrap_or(false);

        for (i, ch) in chars.iter().enumerate() {
            if covered(i) {
                self.paint(out, Color::Green, ch.encode_utf8(&mut [0; 4]))?;
            } else if *ch == ' ' {
                let glued = i >= 1 && i + 1 < chars.len() && covered(i - 1) && covered(i + 1);
                self.paint(out, Color::Red, if glued { "_" } else { " " })?;
            } else {
                self.paint(out, Color::Red, ch.encode_utf8(&mut [0; 4]))?;
            }
        }
        Ok(())
    }

    fn paint<W: Write>(&self, out: &mut W, color: Color, text: &str) -> io::Result<()> {
        if self.color {
            queue!(out, SetForegroundColor(color), Print(text), ResetColor)
        } else {
            write!(out, "{text}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::{judge, Thresholds};
    use pretty_assertions::assert_eq;

    fn render(attempt: &str, reference: &str, color: bool) -> String {
        let thresholds = Thresholds::new(1.0, 0.8, 0.5).unwrap();
        let verdict = judge(attempt, &[reference], &thresholds, None).unwrap();
        let mut out = Vec::new();
        Renderer::new(color).feedback(&mut out, &verdict).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn excellent_says_correct() {
        assert_eq!(render("hello", "hello", false), "Correct!\n\n");
    }

    #[test]
    fn good_shows_reference() {
        assert_eq!(render("helo", "hello", false), "Almost correct. Right answer is: hello\n\n");
    }

    #[test]
    fn mediocre_shows_reference() {
        assert_eq!(
            render("good mornin", "good morning sir", false),
            "Not bad. Right answer is: good morning sir\n\n"
        );
    }

    #[test]
    fn wrong_shows_whole_answer() {
        assert_eq!(render("xyz", "hello", false), "Wrong. Right answer is: hello\n\n");
    }

    #[test]
    fn glued_words_show_underscore() {
        let mut out = Vec::new();
        let mask = drill_core::diff_mask("goodmorning", "good morning");
        Renderer::new(false).diff(&mut out, "good morning", &mask).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "good_morning");
    }

    #[test]
    fn missing_word_keeps_space() {
        let mut out = Vec::new();
        let mask = drill_core::diff_mask("good", "good morning");
        Renderer::new(false).diff(&mut out, "good morning", &mask).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "good morning");
    }

    #[test]
    fn colored_output_uses_escape_codes() {
        let text = render("helo", "hello", true);
        assert!(text.contains("\u{1b}["));
        assert!(text.starts_with("Almost correct. Right answer is: "));
    }
}
