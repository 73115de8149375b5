use serde::{Deserialize, Serialize};

/// Color theme for the TUI. Two palettes, matching the dashboard's
/// dark/light toggle; the active one follows `DashboardState::dark`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// All color definitions for a theme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // UI element colors
    pub title: Color,
    pub subtitle: Color,
    pub selected: Color,
    pub selected_bg: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,

    // Data colors
    pub popularity: Color,
    pub tag: Color,
    pub category: Color,
    pub favorite: Color,
}

/// RGB color representation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

impl Theme {
    /// Default dark theme (Catppuccin Mocha-ish)
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0x1e1e2e),
                foreground: Color::rgb(0xcdd6f4),
                border: Color::rgb(0x45475a),
                border_focused: Color::rgb(0x89b4fa),

                title: Color::rgb(0xcba6f7),
                subtitle: Color::rgb(0xa6adc8),
                selected: Color::rgb(0x89b4fa),
                selected_bg: Color::rgb(0x313244),
                accent: Color::rgb(0xf9e2af),
                muted: Color::rgb(0x6c7086),
                error: Color::rgb(0xf38ba8),

                popularity: Color::rgb(0xf9e2af),
                tag: Color::rgb(0x94e2d5),
                category: Color::rgb(0xcba6f7),
                favorite: Color::rgb(0xf5c2e7),
            },
        }
    }

    /// Light theme for terminals with light backgrounds
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0xeff1f5),
                foreground: Color::rgb(0x4c4f69),
                border: Color::rgb(0xbcc0cc),
                border_focused: Color::rgb(0x1e66f5),

                title: Color::rgb(0x8839ef),
                subtitle: Color::rgb(0x6c6f85),
                selected: Color::rgb(0x1e66f5),
                selected_bg: Color::rgb(0xdce0e8),
                accent: Color::rgb(0xdf8e1d),
                muted: Color::rgb(0x9ca0b0),
                error: Color::rgb(0xd20f39),

                popularity: Color::rgb(0xdf8e1d),
                tag: Color::rgb(0x04a5e5),
                category: Color::rgb(0x8839ef),
                favorite: Color::rgb(0xea76cb),
            },
        }
    }

    /// Palette for the dashboard's dark flag
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Get theme by name (used for the config file's `ui.theme`)
    pub fn by_name(name: &str) -> Option<Theme> {
        match name.to_lowercase().as_str() {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
