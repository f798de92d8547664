//! Entry point for **tilerc**.
//!
//! Loads the user's overrides, detects the host backend and version,
//! assembles the configuration, prints it when asked, and runs the autostart
//! hook.  The autostart script's stdout is discarded so `--dump` output stays
//! valid JSON.
//!
//! # Flags
//!
//! * `--dump` — print the assembled configuration as JSON on stdout.
//! * `--pretty` — pretty-print the JSON (implies `--dump`).
//! * `--no-autostart` — skip the autostart hook.
//! * `--backend <x11|wayland>` — force a backend instead of detecting it.

use log::{error, info, warn};
use std::path::PathBuf;
use tilerc::action::Backend;
use tilerc::autostart;
use tilerc::config::{Overrides, UserConfig};
use tilerc::qtile::host::{resolve_wmname, QtileHost};
use tilerc::qtile::launcher::SystemLauncher;
use tilerc::traits::Host;

/// The user's home directory, `/tmp` when `$HOME` is unset.
fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".into()))
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/tilerc`).
fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"));
    base.join("tilerc")
}

/// Try to load overrides from `$XDG_CONFIG_HOME/tilerc/config.json`,
/// falling back to compiled-in defaults.
fn load_overrides() -> Overrides {
    let path = config_dir().join("config.json");
    match Overrides::load(&path) {
        Ok(o) => {
            info!("loaded overrides from {}", path.display());
            o
        }
        Err(e) => {
            info!("no overrides ({}), using defaults", e);
            Overrides::default()
        }
    }
}

/// Command-line flags.
#[derive(Debug, Default)]
struct Args {
    dump: bool,
    pretty: bool,
    no_autostart: bool,
    backend: Option<Backend>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dump" => parsed.dump = true,
            "--pretty" => {
                parsed.dump = true;
                parsed.pretty = true;
            }
            "--no-autostart" => parsed.no_autostart = true,
            "--backend" => {
                let value = args.next().ok_or("--backend needs a value")?;
                parsed.backend = Some(value.parse().map_err(|e| format!("{}", e))?);
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(parsed)
}

fn main() {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            error!("{}", e);
            eprintln!("usage: tilerc [--dump] [--pretty] [--no-autostart] [--backend x11|wayland]");
            std::process::exit(2);
        }
    };

    let overrides = load_overrides();
    let host = QtileHost::new();

    let backend = match args.backend.or(overrides.backend) {
        Some(b) => b,
        None => host.backend().unwrap_or_else(|e| {
            warn!("{}, assuming x11", e);
            Backend::X11
        }),
    };
    info!("backend: {}", backend);

    let wmname = resolve_wmname(&host);

    let home = home_dir();
    let config = UserConfig::build(&overrides, backend, wmname, &home);
    info!(
        "{} keys, {} groups, {} layouts, {} screen(s)",
        config.keys.len(),
        config.groups.len(),
        config.layouts.len(),
        config.screens.len()
    );

    // Dump first so a host bridge reading stdout gets the JSON whole.
    if args.dump {
        match config.to_json(args.pretty) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("failed to serialize configuration: {}", e);
                std::process::exit(1);
            }
        }
    }

    if !args.no_autostart {
        let scripts_dir = overrides.scripts_dir(&home);
        if let Some(outcome) =
            autostart::run_configured(&overrides.autostart, &scripts_dir, &SystemLauncher::new())
        {
            info!("autostart: {:?}", outcome);
        }
    }
}
