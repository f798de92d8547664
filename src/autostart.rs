//! Startup hook that launches the user's autostart script.
//!
//! The hook is best effort.  It resolves the script path and picks one of
//! three paths:
//!
//! * **absent** (or not a regular file): nothing happens;
//! * **executable**: the script is launched directly, and if that fails for
//!   any reason it is launched again through the interpreter;
//! * **not executable**: the script is launched through the interpreter.
//!
//! The script is not awaited, nothing is retried, and failures are logged
//! and swallowed so that a broken script never blocks host startup.

use crate::traits::ScriptLauncher;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Interpreter used when the script cannot be executed directly.
pub const DEFAULT_INTERPRETER: &str = "/bin/bash";

/// File name of the autostart script inside the scripts directory.
pub const SCRIPT_NAME: &str = "autostart.sh";

/// Autostart settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutostartConfig {
    /// Set to `false` to skip the hook entirely.
    pub enabled: bool,
    /// Script to run; defaults to `<scripts_dir>/autostart.sh`.
    pub script: Option<PathBuf>,
    /// Interpreter for the fallback path.
    pub interpreter: PathBuf,
}

impl Default for AutostartConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            script: None,
            interpreter: PathBuf::from(DEFAULT_INTERPRETER),
        }
    }
}

impl AutostartConfig {
    /// The script path, resolved against `scripts_dir` when unset.
    pub fn script_path(&self, scripts_dir: &Path) -> PathBuf {
        self.script
            .clone()
            .unwrap_or_else(|| scripts_dir.join(SCRIPT_NAME))
    }
}

/// What the hook ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutostartOutcome {
    /// No script at the resolved path.
    Missing,
    /// The script was launched directly.
    Direct,
    /// The script was launched through the interpreter.
    Interpreted,
    /// Every launch attempt failed.
    Failed,
}

/// True when any of the owner, group or other execute bits is set.
///
/// This looks at the mode only, not at whether the current user may execute
/// the file.  A script executable only by someone else is still tried
/// directly; the spawn then fails and the interpreter path takes over.
fn is_executable(mode: u32) -> bool {
    mode & 0o111 != 0
}

/// Run the autostart hook for `script`.
///
/// Never fails; see the module docs for the decision rules.
pub fn run<L: ScriptLauncher>(script: &Path, interpreter: &Path, launcher: &L) -> AutostartOutcome {
    let meta = match std::fs::metadata(script) {
        Ok(meta) if meta.is_file() => meta,
        Ok(_) => {
            warn!("autostart: {} is not a regular file, skipping", script.display());
            return AutostartOutcome::Missing;
        }
        Err(e) => {
            debug!("autostart: {} not found ({})", script.display(), e);
            return AutostartOutcome::Missing;
        }
    };

    if is_executable(meta.permissions().mode()) {
        match launcher.spawn(script, &[]) {
            Ok(()) => {
                info!("autostart: launched {}", script.display());
                return AutostartOutcome::Direct;
            }
            Err(e) => warn!(
                "autostart: direct launch of {} failed ({}), retrying with {}",
                script.display(),
                e,
                interpreter.display()
            ),
        }
    } else {
        debug!("autostart: {} is not executable", script.display());
    }

    match launcher.spawn(interpreter, &[script.as_os_str()]) {
        Ok(()) => {
            info!(
                "autostart: launched {} via {}",
                script.display(),
                interpreter.display()
            );
            AutostartOutcome::Interpreted
        }
        Err(e) => {
            warn!(
                "autostart: could not launch {} via {}: {}",
                script.display(),
                interpreter.display(),
                e
            );
            AutostartOutcome::Failed
        }
    }
}

/// Run the hook as configured, unless disabled.
pub fn run_configured<L: ScriptLauncher>(
    config: &AutostartConfig,
    scripts_dir: &Path,
    launcher: &L,
) -> Option<AutostartOutcome> {
    if !config.enabled {
        info!("autostart disabled");
        return None;
    }
    let script = config.script_path(scripts_dir);
    Some(run(&script, &config.interpreter, launcher))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::ffi::OsStr;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Monotonic counter to generate unique script paths per test.
    static TEST_ID: AtomicU32 = AtomicU32::new(0);

    fn tmp_script_path() -> PathBuf {
        let id = TEST_ID.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "tilerc-autostart-test-{}-{}.sh",
            std::process::id(),
            id
        ))
    }

    fn write_script(mode: u32) -> PathBuf {
        let path = tmp_script_path();
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[derive(Debug, thiserror::Error)]
    #[error("launch refused")]
    struct Refused;

    /// Records launches; fails the first `fail_first` of them.
    #[derive(Default)]
    struct MockLauncher {
        fail_first: usize,
        fail_all: bool,
        calls: RefCell<Vec<(PathBuf, Vec<PathBuf>)>>,
    }

    impl ScriptLauncher for MockLauncher {
        type Error = Refused;

        fn spawn(&self, program: &Path, args: &[&OsStr]) -> Result<(), Refused> {
            let mut calls = self.calls.borrow_mut();
            calls.push((
                program.to_path_buf(),
                args.iter().map(PathBuf::from).collect(),
            ));
            if self.fail_all || calls.len() <= self.fail_first {
                Err(Refused)
            } else {
                Ok(())
            }
        }
    }

    fn interpreter() -> &'static Path {
        Path::new("/bin/sh")
    }

    #[test]
    fn any_execute_bit_counts() {
        assert!(is_executable(0o100));
        assert!(is_executable(0o010));
        assert!(is_executable(0o001));
        assert!(!is_executable(0o644));
    }

    #[test]
    fn missing_script_does_nothing() {
        let launcher = MockLauncher::default();
        let outcome = run(&tmp_script_path(), interpreter(), &launcher);
        assert_eq!(outcome, AutostartOutcome::Missing);
        assert!(launcher.calls.borrow().is_empty());
    }

    #[test]
    fn executable_script_is_launched_directly() {
        let script = write_script(0o755);
        let launcher = MockLauncher::default();
        let outcome = run(&script, interpreter(), &launcher);
        assert_eq!(outcome, AutostartOutcome::Direct);
        let calls = launcher.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, script);
        assert!(calls[0].1.is_empty());
        let _ = std::fs::remove_file(&script);
    }

    #[test]
    fn non_executable_script_goes_through_interpreter() {
        let script = write_script(0o644);
        let launcher = MockLauncher::default();
        let outcome = run(&script, interpreter(), &launcher);
        assert_eq!(outcome, AutostartOutcome::Interpreted);
        let calls = launcher.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, interpreter());
        assert_eq!(calls[0].1, vec![script.clone()]);
        let _ = std::fs::remove_file(&script);
    }

    #[test]
    fn failed_direct_launch_falls_back_to_interpreter() {
        let script = write_script(0o755);
        let launcher = MockLauncher {
            fail_first: 1,
            ..MockLauncher::default()
        };
        let outcome = run(&script, interpreter(), &launcher);
        assert_eq!(outcome, AutostartOutcome::Interpreted);
        let calls = launcher.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, script);
        assert_eq!(calls[1].0, interpreter());
        let _ = std::fs::remove_file(&script);
    }

    #[test]
    fn total_failure_is_swallowed() {
        let script = write_script(0o755);
        let launcher = MockLauncher {
            fail_all: true,
            ..MockLauncher::default()
        };
        let outcome = run(&script, interpreter(), &launcher);
        assert_eq!(outcome, AutostartOutcome::Failed);
        assert_eq!(launcher.calls.borrow().len(), 2);
        let _ = std::fs::remove_file(&script);
    }

    #[test]
    fn directory_is_treated_as_missing() {
        let launcher = MockLauncher::default();
        let outcome = run(&std::env::temp_dir(), interpreter(), &launcher);
        assert_eq!(outcome, AutostartOutcome::Missing);
        assert!(launcher.calls.borrow().is_empty());
    }

    #[test]
    fn disabled_hook_is_skipped() {
        let config = AutostartConfig {
            enabled: false,
            ..AutostartConfig::default()
        };
        let launcher = MockLauncher::default();
        assert_eq!(run_configured(&config, Path::new("/tmp"), &launcher), None);
        assert!(launcher.calls.borrow().is_empty());
    }

    #[test]
    fn script_path_defaults_to_scripts_dir() {
        let config = AutostartConfig::default();
        assert_eq!(
            config.script_path(Path::new("/home/u/.config/qtile/scripts")),
            PathBuf::from("/home/u/.config/qtile/scripts/autostart.sh")
        );
        let custom = AutostartConfig {
            script: Some(PathBuf::from("/opt/start.sh")),
            ..AutostartConfig::default()
        };
        assert_eq!(custom.script_path(Path::new("/x")), PathBuf::from("/opt/start.sh"));
    }
}
