//! # Theme System
//!
//! Provides a centralized color theme system for the landing page.
//!
//! ## Overview
//!
//! The [`Theme`] struct defines all colors used throughout the UI. Rendering
//! code references theme fields instead of hardcoding
//! `ratatui::style::Color` values. The active theme can be cycled at runtime
//! with `t`, and the choice is persisted to the config file.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default) - warm, dark pastel theme
//! - **Dracula** - dark theme with vivid colors
//! - **Nord** - arctic, north-bluish color palette
//! - **Gruvbox Dark** - retro groove color scheme

use ratatui::style::Color;

/// All colors used by the UI, grouped by semantic role.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Human-readable name, also the key stored in the config file.
    pub name: &'static str,

    /// Page background.
    pub bg: Color,
    /// Card backdrop (stands in for the member photo).
    pub surface: Color,

    /// Primary text color (names, body copy).
    pub fg: Color,
    /// Muted text (collapsed role text, hints, footer).
    pub fg_dim: Color,

    /// Brand label, focused card border, expanded names.
    pub accent: Color,
    /// Login button and section headings.
    pub secondary: Color,
    /// "Page not found" notice.
    pub error: Color,
}

impl Theme {
    /// Return the list of all built-in themes (order = cycle order).
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Catppuccin Mocha).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme after this one in cycle order, wrapping around.
    pub fn next(&self) -> &'static Theme {
        let index = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name == self.name)
            .map_or(0, |i| (i + 1) % BUILT_IN_THEMES.len());
        &BUILT_IN_THEMES[index]
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 4] = [
    // 0 - Catppuccin Mocha (default)
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),           // base
        surface: Color::Rgb(69, 71, 90),      // surface1
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        accent: Color::Rgb(137, 180, 250),    // blue
        secondary: Color::Rgb(249, 226, 175), // yellow
        error: Color::Rgb(243, 139, 168),     // red
    },
    // 1 - Dracula
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        surface: Color::Rgb(68, 71, 90),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253),    // cyan
        secondary: Color::Rgb(241, 250, 140), // yellow
        error: Color::Rgb(255, 85, 85),
    },
    // 2 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        surface: Color::Rgb(67, 76, 94),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),    // frost
        secondary: Color::Rgb(235, 203, 139), // yellow
        error: Color::Rgb(191, 97, 106),
    },
    // 3 - Gruvbox Dark
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        surface: Color::Rgb(80, 73, 69),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),   // blue
        secondary: Color::Rgb(250, 189, 47), // yellow
        error: Color::Rgb(251, 73, 52),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    /// Convert a catppuccin color to a ratatui Color via its RGB values.
    fn ctp(color: catppuccin::Color) -> Color {
        Color::Rgb(color.rgb.r, color.rgb.g, color.rgb.b)
    }

    #[test]
    fn test_all_themes_count() {
        assert_eq!(Theme::all().len(), 4);
    }

    #[test]
    fn test_default_is_mocha() {
        assert_eq!(Theme::default_theme().name, "Catppuccin Mocha");
    }

    #[test]
    fn test_by_name_case_insensitive() {
        assert!(Theme::by_name("catppuccin mocha").is_some());
        assert!(Theme::by_name("NORD").is_some());
        assert!(Theme::by_name("dracula").is_some());
        assert!(Theme::by_name("nonexistent").is_none());
    }

    #[test]
    fn test_catppuccin_mocha_matches_palette() {
        let mocha = catppuccin::PALETTE.mocha.colors;
        let theme = Theme::default_theme();
        assert_eq!(theme.bg, ctp(mocha.base));
        assert_eq!(theme.surface, ctp(mocha.surface1));
        assert_eq!(theme.fg, ctp(mocha.text));
        assert_eq!(theme.fg_dim, ctp(mocha.overlay0));
        assert_eq!(theme.accent, ctp(mocha.blue));
        assert_eq!(theme.secondary, ctp(mocha.yellow));
        assert_eq!(theme.error, ctp(mocha.red));
    }

    #[test]
    fn test_next_cycles_through_all_themes() {
        let mut theme = Theme::default_theme();
        let mut seen = Vec::new();
        for _ in 0..Theme::all().len() {
            seen.push(theme.name);
            theme = theme.next();
        }
        assert_eq!(theme.name, Theme::default_theme().name);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), Theme::all().len());
    }
}
