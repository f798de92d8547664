//! **tilerc** — a declarative configuration for a tiling window manager.
//!
//! The crate produces the values a window-manager host reads at startup:
//! key bindings, groups, layouts, screens with their bar widgets, mouse
//! bindings, a color table and scalar settings.  It also carries the one
//! side effect the configuration has, launching the user's autostart script.
//! Layouting, input dispatch and rendering stay with the host.
//!
//! # Architecture
//!
//! The crate is organised around two traits:
//!
//! * [`traits::Host`] — abstracts backend detection and version lookup so
//!   configuration assembly is not coupled to a live session.
//! * [`traits::ScriptLauncher`] — abstracts process spawning so the
//!   [`autostart`] hook can be exercised without running anything.
//!
//! Concrete implementations live in [`qtile`].  [`config::UserConfig`] ties
//! the declarative modules together.

pub mod action;
pub mod autostart;
pub mod bar;
pub mod config;
pub mod groups;
pub mod keys;
pub mod layouts;
pub mod mouse;
pub mod qtile;
pub mod settings;
pub mod theme;
pub mod traits;
