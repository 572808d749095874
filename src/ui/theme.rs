//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the plugin, supporting the
//! two built-in palettes and custom themes loaded from TOML files. It provides
//! utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `orderdeck-dark`: Dark slate palette (default)
//! - `orderdeck-light`: Light palette with the same status hues, darkened for contrast
//!
//! Every theme declares an [`Appearance`]. The `t` key swaps the active theme
//! for its [counterpart](Theme::counterpart) of the opposite appearance.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//! appearance = "dark"
//!
//! [colors]
//! header_fg = "#f3f4f6"
//! subtitle_fg = "#9ca3af"
//! text_normal = "#e5e7eb"
//! text_dim = "#6b7280"
//! border = "#374151"
//! price_fg = "#f9fafb"
//! search_bar_border = "#10b981"
//! match_highlight_fg = "#111827"
//! match_highlight_bg = "#fbbf24"
//! empty_state_fg = "#9ca3af"
//! scrollbar_track = "#1f2937"
//! scrollbar_thumb = "#6b7280"
//! status_awaiting_shipment = "#fb923c"
//! status_in_transit = "#60a5fa"
//! status_completed = "#34d399"
//! status_dispute = "#f87171"
//! ```
//!
//! # Example
//!
//! ```rust
//! use orderdeck::ui::theme::Theme;
//!
//! let theme = Theme::from_name("orderdeck-dark").unwrap();
//! println!("{}", Theme::fg(&theme.colors.header_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::error::{OrderdeckError, Result};
use crate::domain::TransactionStatus;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "orderdeck-dark";

const LIGHT_THEME: &str = "orderdeck-light";

/// Whether a palette is meant for a dark or a light terminal background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Dark,
    Light,
}

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Background the palette is designed for.
    #[serde(default)]
    pub appearance: Appearance,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#f3f4f6").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title color.
    pub header_fg: String,
    /// Transaction count line under the title.
    pub subtitle_fg: String,

    /// Item names and other primary text.
    pub text_normal: String,
    /// Dimmed text color (footer, ids, dates).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Price column color.
    pub price_fg: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    pub scrollbar_track: String,
    pub scrollbar_thumb: String,

    pub status_awaiting_shipment: String,
    pub status_in_transit: String,
    pub status_completed: String,
    pub status_dispute: String,
}

impl ThemeColors {
    /// Badge color for a transaction status.
    #[must_use]
    pub fn status(&self, status: TransactionStatus) -> &str {
        match status {
            TransactionStatus::AwaitingShipment => &self.status_awaiting_shipment,
            TransactionStatus::InTransit => &self.status_in_transit,
            TransactionStatus::Completed => &self.status_completed,
            TransactionStatus::Dispute => &self.status_dispute,
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `orderdeck-dark`, `orderdeck-light`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    ///
    /// # Example
    ///
    /// ```rust
    /// use orderdeck::ui::theme::{Appearance, Theme};
    ///
    /// let theme = Theme::from_name("orderdeck-light").unwrap();
    /// assert_eq!(theme.appearance, Appearance::Light);
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            DEFAULT_THEME => include_str!("../../themes/orderdeck-dark.toml"),
            LIGHT_THEME => include_str!("../../themes/orderdeck-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`OrderdeckError::Theme`] if:
    /// - The file cannot be read (file not found, permission denied, etc.)
    /// - The TOML content cannot be parsed (invalid syntax, missing fields, type mismatches)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            OrderdeckError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents).map_err(|e| {
            OrderdeckError::Theme(format!("failed to parse {}: {e}", path.display()))
        })
    }

    /// Built-in theme of the opposite appearance, used by the theme toggle.
    #[must_use]
    pub fn counterpart(&self) -> Self {
        let name = match self.appearance {
            Appearance::Dark => LIGHT_THEME,
            Appearance::Light => DEFAULT_THEME,
        };
        Self::from_name(name).unwrap_or_else(|| self.clone())
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use orderdeck::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#10b981"), "\u{1b}[38;2;16;185;129m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Palette used if the embedded default ever fails to parse.
    fn plain() -> Self {
        let grey = || "#9ca3af".to_string();
        let white = || "#f3f4f6".to_string();
        Self {
            name: DEFAULT_THEME.to_string(),
            appearance: Appearance::Dark,
            colors: ThemeColors {
                header_fg: white(),
                subtitle_fg: grey(),
                text_normal: white(),
                text_dim: grey(),
                border: grey(),
                price_fg: white(),
                search_bar_border: white(),
                match_highlight_fg: "#111827".to_string(),
                match_highlight_bg: white(),
                empty_state_fg: grey(),
                scrollbar_track: "#374151".to_string(),
                scrollbar_thumb: grey(),
                status_awaiting_shipment: white(),
                status_in_transit: white(),
                status_completed: white(),
                status_dispute: white(),
            },
        }
    }
}

impl Default for Theme {
    /// Returns the default theme (`orderdeck-dark`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use orderdeck::ui::Theme;
    ///
    /// let theme = Theme::default();
    /// assert_eq!(theme.name, "orderdeck-dark");
    /// ```
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        let dark = Theme::from_name("orderdeck-dark").unwrap();
        let light = Theme::from_name("orderdeck-light").unwrap();
        assert_eq!(dark.appearance, Appearance::Dark);
        assert_eq!(light.appearance, Appearance::Light);
        assert_ne!(dark.colors, light.colors);
    }

    #[test]
    fn counterpart_flips_appearance() {
        let dark = Theme::default();
        let light = dark.counterpart();
        assert_eq!(light.name, "orderdeck-light");
        assert_eq!(light.counterpart(), dark);
    }

    #[test]
    fn status_colors_are_distinct() {
        let colors = Theme::default().colors;
        let mut seen: Vec<&str> = TransactionStatus::ALL
            .iter()
            .map(|status| colors.status(*status))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn loads_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = include_str!("../../themes/orderdeck-light.toml")
            .replace("name = \"orderdeck-light\"", "name = \"paper\"");
        file.write_all(custom.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "paper");
        assert_eq!(theme.counterpart().name, "orderdeck-dark");
    }

    #[test]
    fn appearance_defaults_to_dark() {
        let body = include_str!("../../themes/orderdeck-dark.toml")
            .replace("appearance = \"dark\"\n", "");
        let theme: Theme = toml::from_str(&body).unwrap();
        assert_eq!(theme.appearance, Appearance::Dark);
    }

    #[test]
    fn malformed_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"\n[colors]\nheader_fg = 3\n").unwrap();
        assert!(matches!(
            Theme::from_file(file.path()),
            Err(OrderdeckError::Theme(_))
        ));
        assert!(matches!(
            Theme::from_file("/definitely/not/here.toml"),
            Err(OrderdeckError::Theme(_))
        ));
    }

    #[test]
    fn invalid_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("#000000"), "\u{1b}[48;2;0;0;0m");
    }
}
