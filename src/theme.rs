//! Colors and shared widget defaults.
//!
//! [`Palette`] is a fixed table of eight semantic colors.  Widgets and bars
//! copy colors out of it by value; nothing is derived or recomputed after
//! the table is built, so editing a color requires a full reload.
//!
//! # Example
//!
//! ```json
//! {
//!   "background": "#1a1a1a",
//!   "primary": "#5294e2"
//! }
//! ```
//!
//! Keys missing from an override fall back to the built-in palette.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A `#rgb`, `#rrggbb` or `#rrggbbaa` color string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

/// Error from parsing a color string.
#[derive(Debug, thiserror::Error)]
#[error("invalid hex color: {0:?}")]
pub struct ColorError(String);

impl HexColor {
    /// Parse and validate a color string.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').ok_or_else(|| ColorError(s.to_string()))?;
        let valid_len = matches!(digits.len(), 3 | 6 | 8);
        if !valid_len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// Built-in literals; every call site is covered by the palette tests.
    fn lit(s: &'static str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        HexColor::parse(&s).map_err(DeError::custom)
    }
}

/// Border color of the focused window in tiled layouts.
pub fn border_focus() -> HexColor {
    HexColor::lit("#00a2ff")
}

/// Border color of unfocused windows in tiled layouts.
pub fn border_normal() -> HexColor {
    HexColor::lit("#000000")
}

/// The semantic names, in table order.
pub const PALETTE_KEYS: [&str; 8] = [
    "background",
    "foreground",
    "primary",
    "secondary",
    "warning",
    "error",
    "success",
    "gray",
];

/// The color table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: HexColor,
    pub foreground: HexColor,
    pub primary: HexColor,
    pub secondary: HexColor,
    pub warning: HexColor,
    pub error: HexColor,
    pub success: HexColor,
    pub gray: HexColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: HexColor::lit("#1a1a1a"),
            foreground: HexColor::lit("#ffffff"),
            primary: HexColor::lit("#5294e2"),
            secondary: HexColor::lit("#b16286"),
            warning: HexColor::lit("#d79921"),
            error: HexColor::lit("#cc241d"),
            success: HexColor::lit("#98971a"),
            gray: HexColor::lit("#3c3836"),
        }
    }
}

impl Palette {
    /// `(name, color)` pairs in [`PALETTE_KEYS`] order.
    pub fn entries(&self) -> [(&'static str, &HexColor); 8] {
        [
            ("background", &self.background),
            ("foreground", &self.foreground),
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("warning", &self.warning),
            ("error", &self.error),
            ("success", &self.success),
            ("gray", &self.gray),
        ]
    }

    /// Look a color up by its semantic name.
    pub fn get(&self, name: &str) -> Option<&HexColor> {
        self.entries()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, color)| color)
    }
}

/// Parameters every widget inherits unless it overrides them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetDefaults {
    pub font: String,
    pub fontsize: u32,
    pub padding: u32,
    pub background: HexColor,
    pub foreground: HexColor,
}

impl WidgetDefaults {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            font: "Cascadia Code NF Bold Italic".into(),
            fontsize: 15,
            padding: 6,
            background: palette.background.clone(),
            foreground: palette.foreground.clone(),
        }
    }

    /// Defaults for host extensions (prompts, menus): an independent copy.
    pub fn extension_defaults(&self) -> Self {
        self.clone()
    }
}
