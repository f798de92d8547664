//! Core traits that decouple tilerc from the running host and from the
//! operating system's process spawning.
//!
//! [`Host`] is implemented by [`QtileHost`](crate::qtile::host::QtileHost);
//! [`ScriptLauncher`] by [`SystemLauncher`](crate::qtile::launcher::SystemLauncher).
//! Tests substitute recording doubles for both (see the `autostart` and
//! `qtile::host` test modules).

use crate::action::Backend;
use std::ffi::OsStr;
use std::path::Path;

/// Abstraction over the window-manager host the configuration is loaded
/// into.
pub trait Host {
    /// The error type produced by this host.
    type Error: std::error::Error + Send + 'static;

    /// The display-server backend the host core runs on.
    fn backend(&self) -> Result<Backend, Self::Error>;

    /// The host's version string (e.g. `"0.31.0"`).
    fn version(&self) -> Result<String, Self::Error>;
}

/// Starts external programs without waiting for them.
///
/// # Contract
///
/// * [`spawn`](ScriptLauncher::spawn) returns once the process has been
///   launched (or launching failed); it never waits for completion.
/// * Nothing is retried.
pub trait ScriptLauncher {
    /// The error type produced by this launcher.
    type Error: std::error::Error + Send + 'static;

    /// Launch `program` with `args`, with no stdin and discarded stdout.
    fn spawn(&self, program: &Path, args: &[&OsStr]) -> Result<(), Self::Error>;
}
