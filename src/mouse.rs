//! Mouse bindings.

use crate::action::{Action, Lazy, WindowOp};
use crate::keys::{Modifier, MOD};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Button1,
    Button2,
    Button3,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseButton::Button1 => write!(f, "Button1"),
            MouseButton::Button2 => write!(f, "Button2"),
            MouseButton::Button3 => write!(f, "Button3"),
        }
    }
}

/// A pointer binding.
///
/// A drag runs `start` once when the button goes down and `action` on every
/// pointer motion while it is held.  A click runs `action` once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum MouseBinding {
    Drag {
        modifiers: Vec<Modifier>,
        button: MouseButton,
        action: Lazy,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<Lazy>,
    },
    Click {
        modifiers: Vec<Modifier>,
        button: MouseButton,
        action: Lazy,
    },
}

impl MouseBinding {
    pub fn button(&self) -> MouseButton {
        match self {
            MouseBinding::Drag { button, .. } | MouseBinding::Click { button, .. } => *button,
        }
    }

    pub fn action(&self) -> &Lazy {
        match self {
            MouseBinding::Drag { action, .. } | MouseBinding::Click { action, .. } => action,
        }
    }
}

/// Move with `mod+Button1`, resize with `mod+Button3`, raise with
/// `mod+Button2`.
pub fn default_mouse() -> Vec<MouseBinding> {
    vec![
        MouseBinding::Drag {
            modifiers: vec![MOD],
            button: MouseButton::Button1,
            action: Action::Window(WindowOp::SetPositionFloating).into(),
            start: Some(Action::Window(WindowOp::GetPosition).into()),
        },
        MouseBinding::Drag {
            modifiers: vec![MOD],
            button: MouseButton::Button3,
            action: Action::Window(WindowOp::SetSizeFloating).into(),
            start: Some(Action::Window(WindowOp::GetSize).into()),
        },
        MouseBinding::Click {
            modifiers: vec![MOD],
            button: MouseButton::Button2,
            action: Action::Window(WindowOp::BringToFront).into(),
        },
    ]
}
