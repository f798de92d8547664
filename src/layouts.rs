//! Layout descriptors.
//!
//! Each [`LayoutSpec`] selects one of the host's tiling algorithms and
//! supplies its border and margin parameters.  The order of
//! [`default_layouts`] is the order `next_layout` cycles through.

use crate::theme::{border_focus, border_normal, HexColor};
use serde::{Deserialize, Serialize};

/// Border and margin parameters shared by the tiled layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderParams {
    pub border_focus: Vec<HexColor>,
    /// Left to the host default when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_normal: Option<Vec<HexColor>>,
    pub border_width: u32,
    pub margin: u32,
}

/// A tiling algorithm selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "layout")]
pub enum LayoutSpec {
    Columns(BorderParams),
    Max(BorderParams),
    Matrix(BorderParams),
}

impl LayoutSpec {
    /// The host's name for the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            LayoutSpec::Columns(_) => "columns",
            LayoutSpec::Max(_) => "max",
            LayoutSpec::Matrix(_) => "matrix",
        }
    }

    pub fn params(&self) -> &BorderParams {
        match self {
            LayoutSpec::Columns(p) | LayoutSpec::Max(p) | LayoutSpec::Matrix(p) => p,
        }
    }
}

/// Columns, then Max, then Matrix.
pub fn default_layouts() -> Vec<LayoutSpec> {
    let tiled = || BorderParams {
        border_focus: vec![border_focus()],
        border_normal: Some(vec![border_normal()]),
        border_width: 3,
        margin: 0,
    };
    vec![
        LayoutSpec::Columns(tiled()),
        LayoutSpec::Max(BorderParams {
            border_focus: vec![border_focus()],
            border_normal: None,
            border_width: 0,
            margin: 0,
        }),
        LayoutSpec::Matrix(tiled()),
    ]
}

/// A window-matching rule for the floating layout.
///
/// A rule matches when every populated field matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Match {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wm_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wm_type: Option<String>,
    /// Match windows that are transient for another window.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub transient: bool,
}

impl Match {
    pub fn wm_class(class: &str) -> Self {
        Self {
            wm_class: Some(class.into()),
            ..Self::default()
        }
    }

    pub fn title(title: &str) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn wm_type(wm_type: &str) -> Self {
        Self {
            wm_type: Some(wm_type.into()),
            ..Self::default()
        }
    }

    pub fn transient() -> Self {
        Self {
            transient: true,
            ..Self::default()
        }
    }
}

/// The host's stock rules for windows that should always float.
pub fn host_default_float_rules() -> Vec<Match> {
    let mut rules: Vec<Match> = ["utility", "notification", "toolbar", "splash", "dialog"]
        .into_iter()
        .map(Match::wm_type)
        .collect();
    rules.extend(
        [
            "file_progress",
            "confirm",
            "dialog",
            "download",
            "error",
            "notification",
            "splash",
            "toolbar",
        ]
        .into_iter()
        .map(Match::wm_class),
    );
    rules.push(Match::transient());
    rules
}

/// Layout applied to floating windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingLayout {
    pub float_rules: Vec<Match>,
}

impl Default for FloatingLayout {
    fn default() -> Self {
        let mut float_rules = host_default_float_rules();
        float_rules.extend([
            Match::wm_class("confirmreset"), // gitk
            Match::wm_class("makebranch"),   // gitk
            Match::wm_class("maketag"),      // gitk
            Match::wm_class("ssh-askpass"),
            Match::title("branchdialog"), // gitk
            Match::title("pinentry"),     // GPG key password entry
        ]);
        Self { float_rules }
    }
}
