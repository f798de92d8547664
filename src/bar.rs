//! Status bar and screen descriptors.
//!
//! A [`Bar`] is an ordered list of [`Widget`]s; list order is the
//! left-to-right rendering order.  Every color is copied out of the
//! [`Palette`] at build time.

use crate::theme::{HexColor, Palette};
use serde::{Deserialize, Serialize};

/// Settings for the clock widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// strftime-style format.
    pub format: String,
    /// IANA timezone name.
    pub timezone: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            format: "%d/%m/%y %H:%M".into(),
            timezone: "America/Bogota".into(),
        }
    }
}

/// Parameters of the group box widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupBoxParams {
    pub highlight_method: String,
    pub highlight_color: Vec<HexColor>,
    pub this_current_screen_border: HexColor,
    pub this_screen_border: HexColor,
    pub other_current_screen_border: HexColor,
    pub other_screen_border: HexColor,
    pub urgent_border: HexColor,
    pub urgent_text: HexColor,
    pub rounded: bool,
    pub margin_x: u32,
    pub margin_y: u32,
    pub padding_x: u32,
    pub padding_y: u32,
}

/// One bar widget and its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "widget")]
pub enum Widget {
    CurrentLayout {
        foreground: HexColor,
        padding: u32,
    },
    Sep {
        linewidth: u32,
        padding: u32,
        foreground: HexColor,
        background: HexColor,
    },
    GroupBox(GroupBoxParams),
    WindowName {
        foreground: HexColor,
        max_chars: u32,
        padding: u32,
    },
    TextBox {
        text: String,
        foreground: HexColor,
        padding: u32,
    },
    #[serde(rename = "CPU")]
    Cpu {
        format: String,
        /// Seconds.
        update_interval: f64,
        foreground: HexColor,
        padding: u32,
    },
    Memory {
        format: String,
        measure_mem: String,
        update_interval: f64,
        foreground: HexColor,
        padding: u32,
    },
    Net {
        format: String,
        foreground: HexColor,
        padding: u32,
    },
    Volume {
        foreground: HexColor,
        padding: u32,
    },
    Battery {
        format: String,
        foreground: HexColor,
        padding: u32,
    },
    Systray {
        icon_size: u32,
        padding: u32,
    },
    Clock {
        format: String,
        timezone: String,
        foreground: HexColor,
        padding: u32,
    },
}

impl Widget {
    /// The host's widget class name.
    pub fn kind(&self) -> &'static str {
        match self {
            Widget::CurrentLayout { .. } => "CurrentLayout",
            Widget::Sep { .. } => "Sep",
            Widget::GroupBox(_) => "GroupBox",
            Widget::WindowName { .. } => "WindowName",
            Widget::TextBox { .. } => "TextBox",
            Widget::Cpu { .. } => "CPU",
            Widget::Memory { .. } => "Memory",
            Widget::Net { .. } => "Net",
            Widget::Volume { .. } => "Volume",
            Widget::Battery { .. } => "Battery",
            Widget::Systray { .. } => "Systray",
            Widget::Clock { .. } => "Clock",
        }
    }
}

/// A bar along one edge of a screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub widgets: Vec<Widget>,
    /// Height in pixels.
    pub size: u32,
    pub background: HexColor,
    /// `[top, right, bottom, left]`.
    pub margin: [u32; 4],
    pub opacity: f64,
}

/// A physical screen and its bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Bar>,
}

fn sep(palette: &Palette, padding: u32) -> Widget {
    Widget::Sep {
        linewidth: 0,
        padding,
        foreground: palette.gray.clone(),
        background: palette.background.clone(),
    }
}

fn label(text: &str, foreground: &HexColor) -> Widget {
    Widget::TextBox {
        text: text.into(),
        foreground: foreground.clone(),
        padding: 0,
    }
}

/// The widgets of the bottom bar, left to right.
pub fn default_widgets(palette: &Palette, clock: &ClockConfig) -> Vec<Widget> {
    let fg = &palette.foreground;
    vec![
        Widget::CurrentLayout {
            foreground: palette.primary.clone(),
            padding: 10,
        },
        sep(palette, 10),
        Widget::GroupBox(GroupBoxParams {
            highlight_method: "line".into(),
            highlight_color: vec![palette.primary.clone(), palette.gray.clone()],
            this_current_screen_border: palette.primary.clone(),
            this_screen_border: palette.gray.clone(),
            other_current_screen_border: palette.gray.clone(),
            other_screen_border: palette.gray.clone(),
            urgent_border: palette.error.clone(),
            urgent_text: palette.error.clone(),
            rounded: false,
            margin_x: 0,
            margin_y: 2,
            padding_x: 8,
            padding_y: 4,
        }),
        sep(palette, 10),
        Widget::WindowName {
            foreground: palette.primary.clone(),
            max_chars: 60,
            padding: 10,
        },
        sep(palette, 10),
        label("CPU →", &palette.success),
        Widget::Cpu {
            format: "{load_percent:.0f}%".into(),
            update_interval: 2.0,
            foreground: fg.clone(),
            padding: 5,
        },
        sep(palette, 5),
        label("RAM →", &palette.warning),
        Widget::Memory {
            format: "{MemPercent:.0f}%".into(),
            measure_mem: "G".into(),
            update_interval: 2.0,
            foreground: fg.clone(),
            padding: 5,
        },
        sep(palette, 5),
        label("NET →", &palette.secondary),
        Widget::Net {
            format: "{down:.0f}{down_suffix} ↓↑ {up:.0f}{up_suffix}".into(),
            foreground: fg.clone(),
            padding: 5,
        },
        sep(palette, 5),
        label("VOL →", &palette.primary),
        Widget::Volume {
            foreground: fg.clone(),
            padding: 5,
        },
        sep(palette, 5),
        label("BAT →", &palette.success),
        Widget::Battery {
            format: "{percent:.0%}".into(),
            foreground: fg.clone(),
            padding: 5,
        },
        sep(palette, 5),
        Widget::Systray {
            icon_size: 16,
            padding: 5,
        },
        sep(palette, 5),
        label("TIME →", &palette.warning),
        Widget::Clock {
            format: clock.format.clone(),
            timezone: clock.timezone.clone(),
            foreground: fg.clone(),
            padding: 5,
        },
        sep(palette, 5),
    ]
}

/// One screen with an 18 px bottom bar.
pub fn default_screens(palette: &Palette, clock: &ClockConfig) -> Vec<Screen> {
    vec![Screen {
        bottom: Some(Bar {
            widgets: default_widgets(palette, clock),
            size: 18,
            background: palette.background.clone(),
            margin: [0, 0, 0, 0],
            opacity: 0.95,
        }),
    }]
}
