//! User overrides and the assembled configuration.
//!
//! Overrides are loaded from a JSON file
//! (`$XDG_CONFIG_HOME/tilerc/config.json`).  Every section is optional, so
//! `{}` is valid and reproduces the built-in configuration.  Unknown keys are
//! ignored.
//!
//! # Example
//!
//! ```json
//! {
//!   "terminal": "alacritty",
//!   "backend": "wayland",
//!   "colors": { "primary": "#ff79c6" },
//!   "clock": { "timezone": "Europe/Madrid" },
//!   "autostart": {
//!     "enabled": true,
//!     "script": "/home/me/bin/session-start.sh",
//!     "interpreter": "/bin/sh"
//!   }
//! }
//! ```

use crate::action::Backend;
use crate::autostart::AutostartConfig;
use crate::bar::{default_screens, ClockConfig, Screen};
use crate::groups::{default_groups, Group};
use crate::keys::{build_keys, KeyBinding};
use crate::layouts::{default_layouts, FloatingLayout, LayoutSpec};
use crate::mouse::{default_mouse, MouseBinding};
use crate::settings::Settings;
use crate::theme::{Palette, WidgetDefaults};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Terminal emulator launched by `mod+Return`.
pub const DEFAULT_TERMINAL: &str = "kitty";

/// Overrides read from the user's JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Overrides {
    /// Terminal command; defaults per backend.
    pub terminal: Option<String>,
    /// Directory holding the autostart and power-menu scripts.
    pub scripts_dir: Option<PathBuf>,
    /// Force a backend instead of detecting it.
    pub backend: Option<Backend>,
    /// Color table; missing keys keep their built-in values.
    pub colors: Palette,
    pub clock: ClockConfig,
    pub autostart: AutostartConfig,
}

impl Overrides {
    /// Load overrides from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let overrides: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(overrides)
    }

    /// The scripts directory, defaulting to `<home>/.config/qtile/scripts`.
    pub fn scripts_dir(&self, home: &Path) -> PathBuf {
        self.scripts_dir
            .clone()
            .unwrap_or_else(|| home.join(".config/qtile/scripts"))
    }
}

/// Error from loading or parsing an overrides file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);

/// The terminal used on `backend` when none is configured.
pub fn default_terminal(backend: Backend) -> &'static str {
    match backend {
        Backend::X11 => DEFAULT_TERMINAL,
        Backend::Wayland => DEFAULT_TERMINAL,
    }
}

/// Everything the host reads back from the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    pub backend: Backend,
    pub terminal: String,
    pub colors: Palette,
    pub keys: Vec<KeyBinding>,
    pub groups: Vec<Group>,
    pub layouts: Vec<LayoutSpec>,
    pub floating_layout: FloatingLayout,
    pub widget_defaults: WidgetDefaults,
    pub extension_defaults: WidgetDefaults,
    pub screens: Vec<Screen>,
    pub mouse: Vec<MouseBinding>,
    #[serde(flatten)]
    pub settings: Settings,
}

impl UserConfig {
    /// Assemble the configuration.
    ///
    /// `wmname` is usually [`resolve_wmname`](crate::qtile::host::resolve_wmname);
    /// `home` anchors the default scripts directory.
    pub fn build(overrides: &Overrides, backend: Backend, wmname: String, home: &Path) -> Self {
        let terminal = overrides
            .terminal
            .clone()
            .unwrap_or_else(|| default_terminal(backend).to_string());
        let scripts_dir = overrides.scripts_dir(home);
        let colors = overrides.colors.clone();
        let groups = default_groups();
        let keys = build_keys(&terminal, &scripts_dir, &groups);
        let widget_defaults = WidgetDefaults::from_palette(&colors);
        let extension_defaults = widget_defaults.extension_defaults();
        let screens = default_screens(&colors, &overrides.clock);

        Self {
            backend,
            terminal,
            keys,
            groups,
            layouts: default_layouts(),
            floating_layout: FloatingLayout::default(),
            widget_defaults,
            extension_defaults,
            screens,
            mouse: default_mouse(),
            settings: Settings {
                wmname,
                ..Settings::default()
            },
            colors,
        }
    }

    /// Serialize for a host bridge.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
