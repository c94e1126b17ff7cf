//! Catppuccin color palettes for the card.

use ratatui::style::Color;
use vitae_core::ThemeName;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,
    pub link: Color,

    // Semantic
    pub error: Color,

    // Timeline rail and card border
    pub rail: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Mocha => Self::mocha(),
            ThemeName::Latte => Self::latte(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }
}

impl Theme {
    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),       // #1e1e2e
            surface: Color::Rgb(49, 50, 68),    // #313244
            overlay: Color::Rgb(69, 71, 90),    // #45475a

            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            primary: Color::Rgb(180, 190, 254), // #b4befe (lavender)
            link: Color::Rgb(137, 180, 250),    // #89b4fa (blue)

            error: Color::Rgb(243, 139, 168), // #f38ba8 (red)

            rail: Color::Rgb(88, 91, 112),   // #585b70
            border: Color::Rgb(69, 71, 90),  // #45475a
        }
    }

    /// Catppuccin Latte theme (light theme).
    pub fn latte() -> Self {
        Self {
            base: Color::Rgb(239, 241, 245),    // #eff1f5
            surface: Color::Rgb(230, 233, 239), // #e6e9ef
            overlay: Color::Rgb(220, 224, 232), // #dce0e8

            text: Color::Rgb(76, 79, 105),    // #4c4f69
            subtext: Color::Rgb(92, 95, 119), // #5c5f77
            muted: Color::Rgb(140, 143, 161), // #8c8fa1

            primary: Color::Rgb(114, 135, 253), // #7287fd (lavender)
            link: Color::Rgb(30, 102, 245),     // #1e66f5 (blue)

            error: Color::Rgb(210, 15, 57), // #d20f39 (red)

            rail: Color::Rgb(172, 176, 190),   // #acb0be
            border: Color::Rgb(188, 192, 204), // #bcc0cc
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            surface: Color::Rgb(20, 20, 20),
            overlay: Color::Rgb(40, 40, 40),

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            primary: Color::Cyan,
            link: Color::LightBlue,

            error: Color::Red,

            rail: Color::White,
            border: Color::White,
        }
    }
}
