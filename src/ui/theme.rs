//! Noir theme for casefile
//! Greyscale case files with a single gold accent for the detective

use crate::case::{CaseStatus, Confidence};
use ratatui::style::{Color, Modifier, Style};

/// The noir color palette
pub struct Theme;

impl Theme {
    // ─────────────────────────────────────────────────────────────────────
    // Core greyscale palette - from brightest to darkest
    // ─────────────────────────────────────────────────────────────────────

    /// Pure white - maximum emphasis
    pub const WHITE: Color = Color::Rgb(255, 255, 255);

    /// Bright grey - primary text
    pub const GREY_100: Color = Color::Rgb(220, 220, 220);

    /// Light grey - secondary text, investigator messages
    pub const GREY_200: Color = Color::Rgb(180, 180, 180);

    /// Medium grey - muted text
    pub const GREY_300: Color = Color::Rgb(140, 140, 140);

    /// Dark grey - labels, inactive tabs
    pub const GREY_400: Color = Color::Rgb(100, 100, 100);

    /// Darker grey - borders
    pub const GREY_500: Color = Color::Rgb(70, 70, 70);

    /// Very dark grey - subtle borders
    pub const GREY_600: Color = Color::Rgb(45, 45, 45);

    /// Overlay backgrounds
    pub const GREY_700: Color = Color::Rgb(35, 35, 35);

    /// Message bubbles
    pub const GREY_800: Color = Color::Rgb(18, 18, 18);

    /// True black - deepest background
    pub const GREY_900: Color = Color::Rgb(10, 10, 10);

    /// Background color alias
    pub const BG: Color = Self::GREY_900;

    // ─────────────────────────────────────────────────────────────────────
    // Accents
    // ─────────────────────────────────────────────────────────────────────

    /// Detective gold
    pub const GOLD: Color = Color::Rgb(212, 175, 55);

    /// Dimmed gold for investigator bubbles and inactive accents
    pub const GOLD_DIM: Color = Color::Rgb(120, 100, 40);

    pub const GREEN: Color = Color::Rgb(100, 200, 100);

    pub const RED: Color = Color::Rgb(200, 100, 100);

    pub const YELLOW: Color = Color::Rgb(220, 200, 100);

    // ─────────────────────────────────────────────────────────────────────
    // Pre-built styles
    // ─────────────────────────────────────────────────────────────────────

    pub fn text() -> Style {
        Style::default().fg(Self::GREY_100)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Self::GREY_300)
    }

    pub fn text_dim() -> Style {
        Style::default().fg(Self::GREY_400)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Self::WHITE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::GREY_600)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Self::GOLD_DIM)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::GOLD)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key() -> Style {
        Style::default()
            .fg(Self::GOLD)
            .add_modifier(Modifier::BOLD)
    }

    /// Assistant replies: italic, like a voice in the margin
    pub fn assistant_text() -> Style {
        Style::default()
            .fg(Self::GREY_200)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn user_text() -> Style {
        Style::default().fg(Self::GREY_100)
    }

    pub fn status(status: CaseStatus) -> Style {
        let color = match status {
            CaseStatus::Open => Self::GOLD,
            CaseStatus::Active => Self::GREEN,
            CaseStatus::Cold => Self::GREY_300,
            CaseStatus::Solved => Self::WHITE,
        };
        Style::default().fg(color)
    }

    pub fn confidence(confidence: Confidence) -> Style {
        match confidence {
            Confidence::High => Style::default()
                .fg(Self::WHITE)
                .add_modifier(Modifier::BOLD),
            Confidence::Medium => Style::default().fg(Self::GREY_200),
            Confidence::Low => Style::default().fg(Self::GREY_400),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Glyphs
    // ─────────────────────────────────────────────────────────────────────

    pub const LOGO: &'static str = "C A S E F I L E";
    pub const TAGLINE: &'static str = "every alibi has a seam";

    pub const BULLET_FILLED: char = '●';
    pub const BULLET_EMPTY: char = '○';
    pub const BULLET_HALF: char = '◐';
    pub const ARROW_RIGHT: char = '▸';
    pub const DOT_SEPARATOR: char = '·';
    pub const GAP_MARK: &'static str = "⚠ GAP";

    /// Spinner frames - braille pattern
    pub const SPINNER_BRAILLE: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

    /// Typing indicator - three gold dots fading in turn
    pub const TYPING_DOTS: [&'static str; 4] = ["●  ", "●● ", "●●●", "   "];

    pub const SEPARATOR_THIN: &'static str = "─";
}

/// Dot gauge for clue confidence (●●○)
pub fn confidence_dots(confidence: Confidence) -> String {
    let filled = match confidence {
        Confidence::Low => 1,
        Confidence::Medium => 2,
        Confidence::High => 3,
    };
    (0..3)
        .map(|i| {
            if i < filled {
                Theme::BULLET_FILLED
            } else {
                Theme::BULLET_EMPTY
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_dots() {
        assert_eq!(confidence_dots(Confidence::Low), "●○○");
        assert_eq!(confidence_dots(Confidence::High), "●●●");
    }
}
