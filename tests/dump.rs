//! End-to-end checks of the `tilerc` binary.

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::Command;

/// A throwaway home with an autostart script that writes to stdout.
fn noisy_home(tag: &str) -> PathBuf {
    let home = std::env::temp_dir().join(format!("tilerc-dump-{}-{}", tag, std::process::id()));
    let scripts = home.join(".config/qtile/scripts");
    std::fs::create_dir_all(&scripts).unwrap();
    let script = scripts.join("autostart.sh");
    std::fs::write(&script, "#!/bin/sh\necho AUTOSTART_NOISE\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    home
}

fn dump(home: &PathBuf, extra: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_tilerc"))
        .args(["--dump", "--backend", "x11"])
        .args(extra)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn dump_stays_valid_json_when_autostart_prints() {
    let home = noisy_home("compact");
    let out = dump(&home, &[]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(!stdout.contains("AUTOSTART_NOISE"), "stdout: {}", stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["backend"], "x11");
    assert_eq!(value["keys"].as_array().map(|k| k.len()), Some(55));

    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn pretty_dump_parses() {
    let home = noisy_home("pretty");
    let out = dump(&home, &["--pretty"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["wmname"].as_str().map(|s| s.starts_with("Qtile")), Some(true));
    let _ = std::fs::remove_dir_all(&home);
}
