//! Qtile-specific implementations.
//!
//! This module provides the concrete [`Host`](crate::traits::Host) backed by
//! the session environment and the `qtile` executable, and the
//! [`ScriptLauncher`](crate::traits::ScriptLauncher) backed by
//! [`std::process::Command`].
//!
//! Nothing outside this module should run external programs directly.

pub mod host;
pub mod launcher;
