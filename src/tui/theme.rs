use clap::ValueEnum;
use ratatui::style::Color;

use crate::utils::terminal_prefers_dark;

/// Light or dark presentation of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

/// Appearance requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeChoice {
    /// Follow the terminal background, light when unknown
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemeChoice {
    pub fn resolve(self) -> Appearance {
        self.resolve_with(terminal_prefers_dark())
    }

    pub(crate) fn resolve_with(self, prefers_dark: bool) -> Appearance {
        match self {
            ThemeChoice::Light => Appearance::Light,
            ThemeChoice::Dark => Appearance::Dark,
            ThemeChoice::Auto if prefers_dark => Appearance::Dark,
            ThemeChoice::Auto => Appearance::Light,
        }
    }
}

/// Colors used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub appearance: Appearance,
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub selected_label: Color,
    pub status_fg: Color,
    pub status_bg: Color,
    pub error: Color,
}

impl Theme {
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self {
                appearance,
                background: Color::Rgb(243, 243, 243), // Lighter
                text: Color::Rgb(24, 24, 27),
                muted: Color::Rgb(113, 113, 122),
                border: Color::Rgb(161, 161, 170),
                highlight_fg: Color::Rgb(250, 250, 250),
                highlight_bg: Color::Rgb(16, 185, 129), // Emerald
                selected_label: Color::Rgb(5, 150, 105),
                // Dark bar on a light screen
                status_fg: Color::Rgb(250, 250, 250),
                status_bg: Color::Rgb(24, 24, 27),
                error: Color::Rgb(220, 38, 38),
            },
            Appearance::Dark => Self {
                appearance,
                background: Color::Rgb(34, 34, 34), // Darker
                text: Color::Rgb(244, 244, 245),
                muted: Color::Rgb(161, 161, 170),
                border: Color::Rgb(113, 113, 122),
                highlight_fg: Color::Rgb(250, 250, 250),
                highlight_bg: Color::Rgb(16, 185, 129),
                selected_label: Color::Rgb(52, 211, 153),
                status_fg: Color::Rgb(24, 24, 27),
                status_bg: Color::Rgb(228, 228, 231),
                error: Color::Rgb(239, 68, 68),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_choice_ignores_terminal() {
        assert_eq!(ThemeChoice::Light.resolve_with(true), Appearance::Light);
        assert_eq!(ThemeChoice::Dark.resolve_with(false), Appearance::Dark);
    }

    #[test]
    fn test_auto_follows_terminal() {
        assert_eq!(ThemeChoice::Auto.resolve_with(true), Appearance::Dark);
        assert_eq!(ThemeChoice::Auto.resolve_with(false), Appearance::Light);
    }

    #[test]
    fn test_backgrounds_match_appearance() {
        assert_eq!(Theme::for_appearance(Appearance::Light).background, Color::Rgb(243, 243, 243));
        assert_eq!(Theme::for_appearance(Appearance::Dark).background, Color::Rgb(34, 34, 34));
    }

    #[test]
    fn test_status_bar_contrasts_with_screen() {
        for appearance in [Appearance::Light, Appearance::Dark] {
            let theme = Theme::for_appearance(appearance);
            assert_ne!(theme.status_bg, theme.background);
            assert_ne!(theme.status_fg, theme.status_bg);
        }
    }
}
