//! Scalar settings the host reads by name.

use serde::{Deserialize, Serialize};

/// Label used for `wmname` when the host version cannot be determined.
pub const FALLBACK_WMNAME: &str = "Qtile";

/// How the host reacts when a window requests activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusOnActivation {
    Smart,
    Focus,
    Urgent,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub dgroups_key_binder: Option<String>,
    pub dgroups_app_rules: Vec<String>,
    pub follow_mouse_focus: bool,
    pub bring_front_click: bool,
    pub floats_kept_above: bool,
    pub cursor_warp: bool,
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnActivation,
    pub reconfigure_screens: bool,
    pub auto_minimize: bool,
    pub wl_input_rules: Option<String>,
    pub wl_xcursor_theme: Option<String>,
    pub wl_xcursor_size: u32,
    /// Name reported to clients; some Java toolkits check it.
    pub wmname: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dgroups_key_binder: None,
            dgroups_app_rules: Vec::new(),
            follow_mouse_focus: true,
            bring_front_click: false,
            floats_kept_above: true,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: FocusOnActivation::Smart,
            reconfigure_screens: true,
            auto_minimize: true,
            wl_input_rules: None,
            wl_xcursor_theme: None,
            wl_xcursor_size: 24,
            wmname: FALLBACK_WMNAME.into(),
        }
    }
}

/// `"Qtile <version>"`, or [`FALLBACK_WMNAME`] when the version is unknown
/// or blank.
pub fn wmname(version: Option<&str>) -> String {
    match version.map(str::trim) {
        Some(v) if !v.is_empty() => format!("{} {}", FALLBACK_WMNAME, v),
        _ => FALLBACK_WMNAME.to_string(),
    }
}
