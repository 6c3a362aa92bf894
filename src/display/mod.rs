//! turning screen state into terminal text
//!
//! everything here is a pure function of its inputs so it can be tested
//! without a terminal.
use {
    crate::{
        config::options::{Language, UiConfig},
        getopt,
        ui::{messages::Messages, themes::Palette},
    },
    std::fmt::Write,
};

pub mod cards;
pub mod detail;

/// the smallest width anything is rendered at
pub const MIN_WIDTH: usize = 20;

/// how to render things
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    /// the strings to use
    pub messages: &'static Messages,
    /// the colors to use
    pub palette: Palette,
    /// the total width of a card, borders included
    pub width: usize,
    /// how many body lines a card shows
    pub body_lines: usize,
    /// whether to draw icons
    pub icons: bool,
}

impl View {
    /// a view built from a ui config section, unset fields falling back to defaults
    pub fn from_ui_config(ui: &UiConfig) -> Self {
        let defaults = UiConfig::default();
        let language = ui.language.or(defaults.language).unwrap_or_default();

        Self {
            messages: Messages::for_language(language),
            palette: if ui.colors.or(defaults.colors).unwrap_or(true) {
                Palette::rose_pine()
            } else {
                Palette::plain()
            },
            width: ui.card_width.or(defaults.card_width).unwrap_or(72),
            body_lines: ui.body_lines.or(defaults.body_lines).unwrap_or(2),
            icons: ui.icons.or(defaults.icons).unwrap_or(true),
        }
    }

    /// a view built from the loaded configuration
    pub fn from_config() -> Self {
        Self::from_ui_config(&getopt!(ui))
    }

    /// an uncolored, icon-free view; handy for plain output
    pub fn plain(language: Language) -> Self {
        Self {
            messages: Messages::for_language(language),
            palette: Palette::plain(),
            width: 72,
            body_lines: 2,
            icons: false,
        }
    }

    /// cap the width, e.g. to the terminal's
    pub fn fit_width(mut self, max: usize) -> Self {
        self.width = self.width.min(max).max(MIN_WIDTH);
        self
    }

    /// the width available inside a frame
    pub fn inner_width(&self) -> usize {
        self.width.max(MIN_WIDTH) - 2
    }

    /// an icon followed by a space, or nothing when icons are off
    pub(crate) fn icon(&self, icon: &str) -> String {
        if self.icons {
            format!("{} ", icon)
        } else {
            String::new()
        }
    }
}

/// the top of a frame, with a label: `┌─ label ────`
///
/// `label` is measured before `paint` colors it, so escape codes never eat into the fill
pub(crate) fn frame_top(
    out: &mut String,
    view: &View,
    label: &str,
    paint: impl Fn(&str) -> String,
) {
    let used = 3 + label.chars().count() + 1;
    let fill = "─".repeat(view.width.max(MIN_WIDTH).saturating_sub(used));
    let _ = writeln!(
        out,
        "{}{}{}",
        view.palette.border("┌─ "),
        paint(label),
        view.palette.border(&format!(" {}", fill))
    );
}

/// a separator inside a frame: `├────`
pub(crate) fn frame_rule(out: &mut String, view: &View) {
    let fill = "─".repeat(view.width.max(MIN_WIDTH) - 1);
    let _ = writeln!(out, "{}", view.palette.border(&format!("├{}", fill)));
}

/// a line of content inside a frame: `│ content`
pub(crate) fn frame_line(out: &mut String, view: &View, content: &str) {
    let _ = writeln!(out, "{} {}", view.palette.border("│"), content);
}

/// the bottom of a frame: `└────`
pub(crate) fn frame_bottom(out: &mut String, view: &View) {
    let fill = "─".repeat(view.width.max(MIN_WIDTH) - 1);
    let _ = writeln!(out, "{}", view.palette.border(&format!("└{}", fill)));
}
