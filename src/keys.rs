//! Keyboard bindings.
//!
//! The key table is a flat ordered list built from three blocks:
//!
//! 1. the static bindings ([`static_bindings`]),
//! 2. two bindings per group ([`group_bindings`]): switch to the group, and
//!    move the focused window there and follow it,
//! 3. seven `ctrl+alt+F<n>` console switches ([`vt_bindings`]), guarded so
//!    the host only runs them on Wayland.
//!
//! Duplicate `(modifiers, key)` pairs are passed through untouched; the host
//! decides which one wins.

use crate::action::{Action, Backend, Condition, Direction, LayoutOp, Lazy, WindowOp};
use crate::groups::Group;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A keyboard modifier as the host names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// Super / Windows key.
    Mod4,
    /// Alt.
    Mod1,
    Shift,
    Control,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Mod4 => write!(f, "mod4"),
            Modifier::Mod1 => write!(f, "mod1"),
            Modifier::Shift => write!(f, "shift"),
            Modifier::Control => write!(f, "control"),
        }
    }
}

/// The main modifier used by almost every binding.
pub const MOD: Modifier = Modifier::Mod4;

pub const BRIGHT_UP: &str = "XF86MonBrightnessUp";
pub const BRIGHT_DOWN: &str = "XF86MonBrightnessDown";
pub const VOL_UP: &str = "XF86AudioRaiseVolume";
pub const VOL_DOWN: &str = "XF86AudioLowerVolume";
pub const VOL_MUTE: &str = "XF86AudioMute";

/// Number of virtual terminals reachable with `ctrl+alt+F<n>`.
pub const VT_COUNT: u8 = 7;

/// One keyboard binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub modifiers: Vec<Modifier>,
    pub key: String,
    pub action: Lazy,
    pub desc: String,
}

impl KeyBinding {
    pub fn new(
        modifiers: &[Modifier],
        key: impl Into<String>,
        action: impl Into<Lazy>,
        desc: impl Into<String>,
    ) -> Self {
        Self {
            modifiers: modifiers.to_vec(),
            key: key.into(),
            action: action.into(),
            desc: desc.into(),
        }
    }

    /// The chord in `mod4+shift+Return` form.
    pub fn chord(&self) -> String {
        self.modifiers
            .iter()
            .map(|m| m.to_string())
            .chain(std::iter::once(self.key.clone()))
            .collect::<Vec<_>>()
            .join("+")
    }
}

fn layout(op: LayoutOp) -> Action {
    Action::Layout(op)
}

fn window(op: WindowOp) -> Action {
    Action::Window(op)
}

fn spawn(cmd: impl Into<String>) -> Action {
    Action::Spawn(cmd.into())
}

/// The static bindings, in declaration order.
///
/// `terminal` is launched by `mod+Return`; the power menu script is looked
/// up in `scripts_dir`.
pub fn static_bindings(terminal: &str, scripts_dir: &Path) -> Vec<KeyBinding> {
    let mut keys = Vec::new();

    // Focus.
    for d in Direction::ALL {
        let desc = match d {
            Direction::Left => "Move focus to left".to_string(),
            Direction::Right => "Move focus to right".to_string(),
            _ => format!("Move focus {}", d),
        };
        keys.push(KeyBinding::new(&[MOD], d.to_string(), layout(LayoutOp::Focus(d)), desc));
    }
    keys.push(KeyBinding::new(
        &[MOD],
        "space",
        layout(LayoutOp::Next),
        "Move window focus to other window",
    ));

    // Shuffle.
    for d in Direction::ALL {
        let desc = match d {
            Direction::Left | Direction::Right => format!("Move window to the {}", d),
            _ => format!("Move window {}", d),
        };
        keys.push(KeyBinding::new(
            &[MOD, Modifier::Shift],
            d.to_string(),
            layout(LayoutOp::Shuffle(d)),
            desc,
        ));
    }

    // Resize.
    for d in Direction::ALL {
        let desc = match d {
            Direction::Left | Direction::Right => format!("Grow window to the {}", d),
            _ => format!("Grow window {}", d),
        };
        keys.push(KeyBinding::new(
            &[MOD, Modifier::Control],
            d.to_string(),
            layout(LayoutOp::Grow(d)),
            desc,
        ));
    }
    keys.push(KeyBinding::new(
        &[MOD],
        "n",
        layout(LayoutOp::Normalize),
        "Reset all window sizes",
    ));

    keys.push(KeyBinding::new(
        &[MOD, Modifier::Shift],
        "Return",
        layout(LayoutOp::ToggleSplit),
        "Toggle between split and unsplit sides of stack",
    ));
    keys.push(KeyBinding::new(&[MOD], "Return", spawn(terminal), "Launch terminal"));

    let power_menu = scripts_dir.join("rofi-power-menu.sh");
    keys.push(KeyBinding::new(
        &[MOD],
        "p",
        spawn(format!("bash {}", power_menu.display())),
        "Abrir menú de energía",
    ));

    keys.extend([
        KeyBinding::new(&[MOD], "Tab", Action::NextLayout, "Toggle between layouts"),
        KeyBinding::new(&[MOD], "q", window(WindowOp::Kill), "Kill focused window"),
        KeyBinding::new(
            &[MOD],
            "f",
            window(WindowOp::ToggleFullscreen),
            "Toggle fullscreen on the focused window",
        ),
        KeyBinding::new(
            &[MOD],
            "t",
            window(WindowOp::ToggleFloating),
            "Toggle floating on the focused window",
        ),
        KeyBinding::new(&[MOD, Modifier::Control], "r", Action::ReloadConfig, "Reload the config"),
        KeyBinding::new(&[MOD, Modifier::Control], "q", Action::Shutdown, "Shutdown Qtile"),
    ]);

    keys.extend([
        KeyBinding::new(
            &[MOD],
            "e",
            spawn("rofi -i -show drun -modi drun -show-icons"),
            "Lanzador rofi",
        ),
        KeyBinding::new(
            &[MOD],
            "w",
            spawn("rofi -i -show window -modi drun -show-icons"),
            "Lanzador rofi ventanas",
        ),
        KeyBinding::new(&[], BRIGHT_UP, spawn("brightnessctl set 10%+"), "Subir brillo"),
        KeyBinding::new(&[], BRIGHT_DOWN, spawn("brightnessctl set 10%-"), "Bajar brillo"),
        KeyBinding::new(
            &[],
            VOL_UP,
            spawn("amixer -D 'default' sset Master 10%+"),
            "Subir volumen",
        ),
        KeyBinding::new(
            &[],
            VOL_DOWN,
            spawn("amixer -D 'default' sset Master 10%-"),
            "Bajar volumen",
        ),
        KeyBinding::new(
            &[],
            VOL_MUTE,
            spawn("amixer -D 'default' sset Master toggle"),
            "Mute",
        ),
    ]);

    keys
}

/// Two bindings per group: `mod+<name>` switches to it, `mod+shift+<name>`
/// moves the focused window there and follows it.
pub fn group_bindings(groups: &[Group]) -> Vec<KeyBinding> {
    groups
        .iter()
        .flat_map(|g| {
            [
                KeyBinding::new(
                    &[MOD],
                    g.name.clone(),
                    Action::GroupToScreen(g.name.clone()),
                    format!("Switch to group {}", g.name),
                ),
                KeyBinding::new(
                    &[MOD, Modifier::Shift],
                    g.name.clone(),
                    Action::WindowToGroup {
                        group: g.name.clone(),
                        switch_group: true,
                    },
                    format!("Switch to & move focused window to group {}", g.name),
                ),
            ]
        })
        .collect()
}

/// `ctrl+alt+F1` … `ctrl+alt+F7`, only active on Wayland.
pub fn vt_bindings() -> Vec<KeyBinding> {
    (1..=VT_COUNT)
        .map(|vt| {
            KeyBinding::new(
                &[Modifier::Control, Modifier::Mod1],
                format!("f{}", vt),
                Action::ChangeVt(vt).when(Condition::Backend(Backend::Wayland)),
                format!("Switch to VT{}", vt),
            )
        })
        .collect()
}

/// The full key table: static bindings, then group bindings, then VT
/// bindings.
pub fn build_keys(terminal: &str, scripts_dir: &Path, groups: &[Group]) -> Vec<KeyBinding> {
    let mut keys = static_bindings(terminal, scripts_dir);
    keys.extend(group_bindings(groups));
    keys.extend(vt_bindings());
    keys
}

/// Bindings the host would actually run on `backend`.
pub fn active_bindings(
    keys: &[KeyBinding],
    backend: Backend,
) -> impl Iterator<Item = &KeyBinding> {
    keys.iter().filter(move |k| k.action.is_active(backend))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::{default_groups, GROUP_NAMES};
    use std::path::PathBuf;

    fn scripts() -> PathBuf {
        PathBuf::from("/home/user/.config/qtile/scripts")
    }

    fn table() -> Vec<KeyBinding> {
        build_keys("kitty", &scripts(), &default_groups())
    }

    #[test]
    fn static_table_size_and_order() {
        let keys = static_bindings("kitty", &scripts());
        assert_eq!(keys.len(), 30);
        assert_eq!(keys[0].chord(), "mod4+left");
        assert_eq!(keys[4].chord(), "mod4+space");
        assert_eq!(keys[5].chord(), "mod4+shift+left");
        assert_eq!(keys[9].chord(), "mod4+control+left");
        assert_eq!(keys[13].chord(), "mod4+n");
        assert_eq!(keys.last().unwrap().key, VOL_MUTE);
    }

    #[test]
    fn terminal_and_power_menu() {
        let keys = static_bindings("alacritty", &scripts());
        let term = keys.iter().find(|k| k.chord() == "mod4+Return").unwrap();
        assert_eq!(term.action.action, Action::Spawn("alacritty".into()));
        let power = keys.iter().find(|k| k.chord() == "mod4+p").unwrap();
        assert_eq!(
            power.action.action,
            Action::Spawn("bash /home/user/.config/qtile/scripts/rofi-power-menu.sh".into())
        );
        assert_eq!(power.desc, "Abrir menú de energía");
    }

    #[test]
    fn launcher_and_media_descriptions() {
        let keys = static_bindings("kitty", &scripts());
        let desc = |chord: &str| keys.iter().find(|k| k.chord() == chord).unwrap().desc.clone();
        assert_eq!(desc("mod4+e"), "Lanzador rofi");
        assert_eq!(desc("mod4+w"), "Lanzador rofi ventanas");
        assert_eq!(desc(BRIGHT_UP), "Subir brillo");
        assert_eq!(desc(BRIGHT_DOWN), "Bajar brillo");
        assert_eq!(desc(VOL_UP), "Subir volumen");
        assert_eq!(desc(VOL_DOWN), "Bajar volumen");
        assert_eq!(desc(VOL_MUTE), "Mute");
    }

    #[test]
    fn media_keys_have_no_modifiers() {
        let keys = static_bindings("kitty", &scripts());
        for name in [BRIGHT_UP, BRIGHT_DOWN, VOL_UP, VOL_DOWN, VOL_MUTE] {
            let k = keys.iter().find(|k| k.key == name).unwrap();
            assert!(k.modifiers.is_empty(), "{} has modifiers", name);
        }
    }

    #[test]
    fn every_group_referenced_exactly_twice() {
        let keys = table();
        for name in GROUP_NAMES {
            let refs: Vec<&KeyBinding> = keys
                .iter()
                .filter(|k| k.action.action.group_ref() == Some(name))
                .collect();
            assert_eq!(refs.len(), 2, "group {}", name);
            assert_eq!(refs[0].action.action, Action::GroupToScreen(name.into()));
            assert_eq!(refs[1].modifiers, vec![MOD, Modifier::Shift]);
        }
    }

    #[test]
    fn blocks_are_concatenated_in_order() {
        let keys = table();
        assert_eq!(keys.len(), 30 + 18 + 7);
        assert_eq!(keys[30].chord(), "mod4+1");
        assert_eq!(keys[31].chord(), "mod4+shift+1");
        assert_eq!(keys[47].chord(), "mod4+shift+9");
        assert_eq!(keys[48].chord(), "control+mod1+f1");
        assert_eq!(keys[54].chord(), "control+mod1+f7");
    }

    #[test]
    fn vt_bindings_are_wayland_only() {
        let vts = vt_bindings();
        assert_eq!(vts.len(), 7);
        for (i, k) in vts.iter().enumerate() {
            assert_eq!(k.action.action, Action::ChangeVt(i as u8 + 1));
            assert_eq!(k.desc, format!("Switch to VT{}", i + 1));
        }

        let keys = table();
        assert_eq!(active_bindings(&keys, Backend::Wayland).count(), 55);
        assert_eq!(active_bindings(&keys, Backend::X11).count(), 48);
    }

    #[test]
    fn duplicates_are_not_diagnosed() {
        let groups = vec![Group::new("1"), Group::new("1")];
        let keys = group_bindings(&groups);
        assert_eq!(keys.len(), 4);
        assert_eq!(keys[0], keys[2]);
    }
}
