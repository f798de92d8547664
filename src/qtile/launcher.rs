//! [`ScriptLauncher`] backed by [`std::process::Command`].

use crate::traits::ScriptLauncher;
use log::debug;
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

/// Launches real processes and reaps them on a detached thread.
///
/// The child's stdout is discarded so it never interleaves with our own
/// output; stderr is inherited.
#[derive(Debug, Clone, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptLauncher for SystemLauncher {
    type Error = std::io::Error;

    fn spawn(&self, program: &Path, args: &[&OsStr]) -> Result<(), Self::Error> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .spawn()?;
        let pid = child.id();
        debug!("spawned {} (pid {})", program.display(), pid);

        // Reap the child so it does not linger as a zombie.
        std::thread::spawn(move || match child.wait() {
            Ok(status) => debug!("pid {} exited with {}", pid, status),
            Err(e) => debug!("wait on pid {} failed: {}", pid, e),
        });
        Ok(())
    }
}
