//! Lazy actions and the types used throughout tilerc.
//!
//! This module defines the vocabulary every binding shares: [`Action`]
//! describes a deferred command the host resolves only when the bound input
//! event fires, and [`Lazy`] wraps it with an optional [`Condition`] guard.
//! [`Direction`] and [`Backend`] are the supporting data types.
//!
//! Direction and backend names are parsed leniently on the wire
//! (`"left"`, `"Left"`, `"WAYLAND"`), and serialized in lowercase.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cardinal direction used by focus, shuffle and grow layout commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions in the order the bindings declare them.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Up,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Lowercase `s` and drop whitespace and underscores.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Parse a direction string (case-insensitive).
fn parse_direction(s: &str) -> Option<Direction> {
    match normalize(s).as_str() {
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_direction(&s).ok_or_else(|| DeError::custom(format!("invalid direction: {:?}", s)))
    }
}

/// The display-server backend the host is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    X11,
    Wayland,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::X11 => write!(f, "x11"),
            Backend::Wayland => write!(f, "wayland"),
        }
    }
}

/// Error returned when a backend name is not recognised.
#[derive(Debug, thiserror::Error)]
#[error("unknown backend: {0:?} (expected \"x11\" or \"wayland\")")]
pub struct UnknownBackend(String);

impl FromStr for Backend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "x11" => Ok(Backend::X11),
            "wayland" => Ok(Backend::Wayland),
            _ => Err(UnknownBackend(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Backend {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(DeError::custom)
    }
}

/// Commands routed to the current layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutOp {
    /// Move focus to the neighbouring window.
    Focus(Direction),
    /// Move focus to the next window in the stack.
    Next,
    /// Swap the focused window with its neighbour.
    Shuffle(Direction),
    /// Grow the focused window towards a side.
    Grow(Direction),
    /// Reset all window sizes.
    Normalize,
    /// Toggle between split and unsplit sides of the stack.
    ToggleSplit,
}

/// Commands routed to the focused window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowOp {
    Kill,
    ToggleFullscreen,
    ToggleFloating,
    SetPositionFloating,
    GetPosition,
    SetSizeFloating,
    GetSize,
    BringToFront,
}

/// A deferred command object.
///
/// Nothing here is executed by tilerc: the host resolves an action when the
/// input event it is bound to occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// A command for the current layout.
    Layout(LayoutOp),
    /// A command for the focused window.
    Window(WindowOp),
    /// Run a shell command line.
    Spawn(String),
    /// Cycle to the next layout in the layout list.
    NextLayout,
    /// Reload the configuration.
    ReloadConfig,
    /// Shut the host down.
    Shutdown,
    /// Show the named group on the current screen.
    GroupToScreen(String),
    /// Send the focused window to the named group, optionally following it.
    WindowToGroup { group: String, switch_group: bool },
    /// Switch to virtual terminal `n`.
    ChangeVt(u8),
}

impl Action {
    /// The group name this action references, if any.
    pub fn group_ref(&self) -> Option<&str> {
        match self {
            Action::GroupToScreen(group) | Action::WindowToGroup { group, .. } => Some(group),
            _ => None,
        }
    }

    /// Attach a guard to this action.
    pub fn when(self, condition: Condition) -> Lazy {
        Lazy::from(self).when(condition)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Layout(op) => match op {
                LayoutOp::Focus(d) => write!(f, "layout.{}()", d),
                LayoutOp::Next => write!(f, "layout.next()"),
                LayoutOp::Shuffle(d) => write!(f, "layout.shuffle_{}()", d),
                LayoutOp::Grow(d) => write!(f, "layout.grow_{}()", d),
                LayoutOp::Normalize => write!(f, "layout.normalize()"),
                LayoutOp::ToggleSplit => write!(f, "layout.toggle_split()"),
            },
            Action::Window(op) => {
                let name = match op {
                    WindowOp::Kill => "kill",
                    WindowOp::ToggleFullscreen => "toggle_fullscreen",
                    WindowOp::ToggleFloating => "toggle_floating",
                    WindowOp::SetPositionFloating => "set_position_floating",
                    WindowOp::GetPosition => "get_position",
                    WindowOp::SetSizeFloating => "set_size_floating",
                    WindowOp::GetSize => "get_size",
                    WindowOp::BringToFront => "bring_to_front",
                };
                write!(f, "window.{}()", name)
            }
            Action::Spawn(cmd) => write!(f, "spawn({:?})", cmd),
            Action::NextLayout => write!(f, "next_layout()"),
            Action::ReloadConfig => write!(f, "reload_config()"),
            Action::Shutdown => write!(f, "shutdown()"),
            Action::GroupToScreen(group) => write!(f, "group[{:?}].toscreen()", group),
            Action::WindowToGroup {
                group,
                switch_group,
            } => write!(
                f,
                "window.togroup({:?}, switch_group={})",
                group, switch_group
            ),
            Action::ChangeVt(n) => write!(f, "core.change_vt({})", n),
        }
    }
}

/// A predicate the host evaluates before running a guarded action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// Only run when the host's core is the given backend.
    Backend(Backend),
}

impl Condition {
    /// Evaluate the guard against the running backend.
    pub fn holds(&self, backend: Backend) -> bool {
        match self {
            Condition::Backend(b) => *b == backend,
        }
    }
}

/// An [`Action`] plus an optional [`Condition`] guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lazy {
    pub action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<Condition>,
}

impl Lazy {
    /// Replace the guard.
    pub fn when(mut self, condition: Condition) -> Self {
        self.when = Some(condition);
        self
    }

    /// Whether the host would run this action on `backend`.
    ///
    /// Unguarded actions are always active.
    pub fn is_active(&self, backend: Backend) -> bool {
        match self.when {
            Some(condition) => condition.holds(backend),
            None => true,
        }
    }
}

impl From<Action> for Lazy {
    fn from(action: Action) -> Self {
        Self { action, when: None }
    }
}

impl fmt::Display for Lazy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.when {
            Some(Condition::Backend(b)) => write!(f, "{}.when(core={})", self.action, b),
            None => write!(f, "{}", self.action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_display() {
        assert_eq!(Direction::Left.to_string(), "left");
        assert_eq!(Direction::Right.to_string(), "right");
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Down.to_string(), "down");
    }

    #[test]
    fn direction_parses_leniently() {
        let d: Direction = serde_json::from_str(r#"" Left ""#).unwrap();
        assert_eq!(d, Direction::Left);
        let d: Direction = serde_json::from_str(r#""DOWN""#).unwrap();
        assert_eq!(d, Direction::Down);
        assert!(serde_json::from_str::<Direction>(r#""up-left""#).is_err());
    }

    #[test]
    fn backend_from_str() {
        assert_eq!("wayland".parse::<Backend>().unwrap(), Backend::Wayland);
        assert_eq!("X11".parse::<Backend>().unwrap(), Backend::X11);
        assert!("mir".parse::<Backend>().is_err());
        assert!("x".parse::<Backend>().is_err());
    }

    #[test]
    fn action_display_matches_host_call_syntax() {
        assert_eq!(
            Action::Layout(LayoutOp::Shuffle(Direction::Left)).to_string(),
            "layout.shuffle_left()"
        );
        assert_eq!(
            Action::Window(WindowOp::ToggleFloating).to_string(),
            "window.toggle_floating()"
        );
        assert_eq!(
            Action::Spawn("kitty".into()).to_string(),
            r#"spawn("kitty")"#
        );
        assert_eq!(
            Action::WindowToGroup {
                group: "3".into(),
                switch_group: true
            }
            .to_string(),
            r#"window.togroup("3", switch_group=true)"#
        );
    }

    #[test]
    fn group_ref_only_for_group_actions() {
        assert_eq!(Action::GroupToScreen("4".into()).group_ref(), Some("4"));
        assert_eq!(
            Action::WindowToGroup {
                group: "9".into(),
                switch_group: true
            }
            .group_ref(),
            Some("9")
        );
        assert_eq!(Action::ChangeVt(1).group_ref(), None);
        assert_eq!(Action::NextLayout.group_ref(), None);
    }

    #[test]
    fn unguarded_lazy_is_always_active() {
        let lazy = Lazy::from(Action::Shutdown);
        assert!(lazy.is_active(Backend::X11));
        assert!(lazy.is_active(Backend::Wayland));
    }

    #[test]
    fn guarded_lazy_follows_backend() {
        let lazy = Action::ChangeVt(2).when(Condition::Backend(Backend::Wayland));
        assert!(lazy.is_active(Backend::Wayland));
        assert!(!lazy.is_active(Backend::X11));
        assert_eq!(lazy.to_string(), "core.change_vt(2).when(core=wayland)");
    }

    #[test]
    fn lazy_wire_format() {
        let lazy = Lazy::from(Action::Layout(LayoutOp::Focus(Direction::Up)));
        let json = serde_json::to_string(&lazy).unwrap();
        assert_eq!(json, r#"{"action":{"Layout":{"Focus":"up"}}}"#);

        let guarded: Lazy =
            serde_json::from_str(r#"{"action":{"ChangeVt":3},"when":{"Backend":"Wayland"}}"#)
                .unwrap();
        assert_eq!(guarded.action, Action::ChangeVt(3));
        assert_eq!(guarded.when, Some(Condition::Backend(Backend::Wayland)));
    }
}
