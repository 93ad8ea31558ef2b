//! Theme management and ANSI escape sequence generation.
//!
//! Color schemes come from built-in TOML themes compiled into the binary or
//! from a custom TOML file. Colors are hex strings turned into 24-bit ANSI
//! escape sequences at render time.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `tokyo-night`: Cool dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! accent_fg = "#cba6f7"
//! chip_selected_fg = "#1e1e2e"
//! chip_selected_bg = "#a6e3a1"
//! sold_out_fg = "#f38ba8"
//! ```

use crate::domain::error::{Result, ShowfinderError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: [&str; 3] = ["catppuccin-mocha", "catppuccin-latte", "tokyo-night"];

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#cdd6f4"). `header_bg` is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, secondary card fields, status text.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Trending carousel and section labels.
    pub accent_fg: String,
    pub chip_selected_fg: String,
    pub chip_selected_bg: String,
    pub sold_out_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Returns
    ///
    /// `None` if the name is not one of [`BUILTIN_THEMES`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use showfinder::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("tokyo-night").unwrap();
    /// assert_eq!(theme.name, "tokyo-night");
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "tokyo-night" => include_str!("../../themes/tokyo-night.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ShowfinderError::Theme`] if the file cannot be read or the
    /// TOML does not describe a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ShowfinderError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| ShowfinderError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// `#rrggbb` (leading `#` optional) as RGB; anything else reads as white.
    fn parse_hex(hex: &str) -> [u8; 3] {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return [u8::MAX; 3];
        }
        match u32::from_str_radix(digits, 16) {
            Ok(rgb) => {
                let [_, r, g, b] = rgb.to_be_bytes();
                [r, g, b]
            }
            _ => [u8::MAX; 3],
        }
    }

    /// SGR 38 (foreground) or 48 (background) with a 24-bit color.
    fn truecolor(layer: u8, hex: &str) -> String {
        let [r, g, b] = Self::parse_hex(hex);
        format!("\u{1b}[{layer};2;{r};{g};{b}m")
    }

    /// Foreground escape sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        Self::truecolor(38, hex)
    }

    /// Background escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        Self::truecolor(48, hex)
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{1b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{1b}[0m"
    }

    /// Plain grayscale palette used if the default theme cannot be loaded.
    fn monochrome() -> Self {
        let gray = |hex: &str| hex.to_string();
        Self {
            name: "monochrome".to_string(),
            colors: ThemeColors {
                header_fg: gray("#ffffff"),
                header_bg: None,
                selection_fg: gray("#000000"),
                selection_bg: gray("#d0d0d0"),
                text_normal: gray("#e0e0e0"),
                text_dim: gray("#808080"),
                border: gray("#505050"),
                search_bar_border: gray("#d0d0d0"),
                match_highlight_fg: gray("#000000"),
                match_highlight_bg: gray("#ffffff"),
                empty_state_fg: gray("#ffffff"),
                accent_fg: gray("#ffffff"),
                chip_selected_fg: gray("#000000"),
                chip_selected_bg: gray("#ffffff"),
                sold_out_fg: gray("#a0a0a0"),
            },
        }
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").unwrap_or_else(|| {
            tracing::warn!("built-in default theme failed to parse, using monochrome");
            Self::monochrome()
        })
    }
}
