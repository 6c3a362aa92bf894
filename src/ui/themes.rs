//! themes for the ui
use owo_colors::{OwoColorize, Rgb, Style};

/// rose pine "text"
const TEXT: Rgb = Rgb(224, 222, 244);
/// rose pine "subtle"
const SUBTLE: Rgb = Rgb(144, 140, 170);
/// rose pine "muted"
const MUTED: Rgb = Rgb(110, 106, 134);
/// rose pine "love"
const LOVE: Rgb = Rgb(235, 111, 146);
/// rose pine "rose"
const ROSE: Rgb = Rgb(235, 188, 186);
/// rose pine "foam"
const FOAM: Rgb = Rgb(156, 207, 216);
/// rose pine "iris"
const IRIS: Rgb = Rgb(196, 167, 231);

/// the rose pine palette, or nothing at all when colors are off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// whether to emit escape codes
    pub colored: bool,
}

impl Palette {
    /// a palette that emits escape codes
    pub const fn rose_pine() -> Self {
        Self { colored: true }
    }

    /// a palette that never emits escape codes
    pub const fn plain() -> Self {
        Self { colored: false }
    }

    /// apply a style if colors are on
    fn paint(&self, text: &str, style: Style) -> String {
        if self.colored {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    /// headings and titles
    pub fn title(&self, text: &str) -> String {
        self.paint(text, Style::new().color(IRIS).bold())
    }

    /// user ids and other primary metadata
    pub fn primary(&self, text: &str) -> String {
        self.paint(text, Style::new().color(FOAM))
    }

    /// body text
    pub fn text(&self, text: &str) -> String {
        self.paint(text, Style::new().color(TEXT))
    }

    /// secondary metadata
    pub fn subtle(&self, text: &str) -> String {
        self.paint(text, Style::new().color(SUBTLE))
    }

    /// borders and dividers
    pub fn border(&self, text: &str) -> String {
        self.paint(text, Style::new().color(MUTED))
    }

    /// like counts
    pub fn like(&self, text: &str) -> String {
        self.paint(text, Style::new().color(FOAM).bold())
    }

    /// dislike counts and failure messages
    pub fn dislike(&self, text: &str) -> String {
        self.paint(text, Style::new().color(LOVE).bold())
    }

    /// tag chips
    pub fn tag(&self, text: &str) -> String {
        self.paint(text, Style::new().color(ROSE).italic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_emits_nothing_extra() {
        let p = Palette::plain();
        assert_eq!(p.title("hi"), "hi");
        assert_eq!(p.tag("x"), "x");
    }

    #[test]
    fn test_colored_palette_wraps_text() {
        let p = Palette::rose_pine();
        let painted = p.dislike("no");

        assert!(painted.contains("\x1b["));
        assert!(painted.contains("no"));
    }
}
