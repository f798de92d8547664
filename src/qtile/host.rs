//! [`Host`] implementation for a running Qtile session.
//!
//! The backend is inferred from the session environment
//! (`WAYLAND_DISPLAY`, `XDG_SESSION_TYPE`, `DISPLAY`); the version comes from
//! `qtile --version`.

use crate::action::Backend;
use crate::settings;
use crate::traits::Host;
use log::{debug, warn};
use std::process::{Command, Stdio};

/// Qtile host handle.
///
/// Nothing is queried eagerly; each method call inspects the environment or
/// runs a short-lived `qtile` process.
pub struct QtileHost {
    executable: String,
}

/// Errors that can occur when querying the host.
#[derive(Debug, thiserror::Error)]
#[error("qtile host error: {0}")]
pub struct QtileHostError(String);

impl Default for QtileHost {
    fn default() -> Self {
        Self::new()
    }
}

impl QtileHost {
    pub fn new() -> Self {
        Self::with_executable("qtile")
    }

    /// Use a different `qtile` executable (name on `$PATH` or full path).
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

/// Decide the backend from the session variables.
///
/// A Wayland display wins over an X display, since XWayland sessions set
/// both.
pub fn backend_from_env(
    wayland_display: Option<&str>,
    session_type: Option<&str>,
    display: Option<&str>,
) -> Option<Backend> {
    let set = |v: Option<&str>| v.is_some_and(|s| !s.trim().is_empty());
    if set(wayland_display) {
        return Some(Backend::Wayland);
    }
    if let Some(kind) = session_type.and_then(|s| s.parse::<Backend>().ok()) {
        return Some(kind);
    }
    if set(display) {
        return Some(Backend::X11);
    }
    None
}

impl Host for QtileHost {
    type Error = QtileHostError;

    fn backend(&self) -> Result<Backend, Self::Error> {
        let var = |name: &str| std::env::var(name).ok();
        let wayland = var("WAYLAND_DISPLAY");
        let session = var("XDG_SESSION_TYPE");
        let display = var("DISPLAY");
        backend_from_env(wayland.as_deref(), session.as_deref(), display.as_deref())
            .ok_or_else(|| QtileHostError("no graphical session detected".into()))
    }

    fn version(&self) -> Result<String, Self::Error> {
        let output = Command::new(&self.executable)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| QtileHostError(format!("run {} --version: {}", self.executable, e)))?;
        if !output.status.success() {
            return Err(QtileHostError(format!(
                "{} --version exited with {}",
                self.executable, output.status
            )));
        }
        let version = String::from_utf8(output.stdout)
            .map_err(|e| QtileHostError(format!("utf-8: {}", e)))?
            .trim()
            .to_string();
        if version.is_empty() {
            return Err(QtileHostError("empty version string".into()));
        }
        debug!("host version {}", version);
        Ok(version)
    }
}

/// The `wmname` setting for `host`, falling back to a constant label when
/// the version cannot be obtained.
pub fn resolve_wmname<H: Host>(host: &H) -> String {
    match host.version() {
        Ok(v) => settings::wmname(Some(&v)),
        Err(e) => {
            warn!("could not determine host version ({}), using fallback name", e);
            settings::wmname(None)
        }
    }
}
