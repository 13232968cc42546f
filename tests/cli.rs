// tests/cli.rs
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Runs the binary from `dir`, with logging silenced.
fn space_rover(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_space-rover"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .output()
        .expect("binary runs")
}

/// Fresh empty working directory, so no stray `space-rover.toml` is picked up.
fn workdir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("space-rover-cli-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let _ = std::fs::remove_file(dir.join("space-rover.toml"));
    dir
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).trim().to_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).trim().to_owned()
}

#[test]
fn test_prints_final_pose_as_json() {
    let out = space_rover(&workdir("json"), &["FFRFF"]);
    assert_eq!(out.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "x": 2.0, "y": 2.0, "direction": "East" })
    );
}

#[test]
fn test_out_of_bounds_exits_with_failure() {
    let out = space_rover(&workdir("bounds"), &["FFFFFF"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).ends_with("Command: F Step: 6"), "{}", stderr(&out));
    assert!(stdout(&out).is_empty());
}

#[test]
fn test_invalid_symbols_exit_with_failure() {
    let out = space_rover(&workdir("symbols"), &["FFX"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stderr(&out), "Command contains invalid symbols");
}

#[test]
fn test_usage_errors() {
    let dir = workdir("usage");

    // --config without a path
    let out = space_rover(&dir, &["FFRFF", "--config"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).is_empty());

    // more than one command line
    let out = space_rover(&dir, &["FFRFF", "L"]);
    assert_eq!(out.status.code(), Some(2));

    // no command line at all
    let out = space_rover(&dir, &[]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_help_is_not_a_command_line() {
    let out = space_rover(&workdir("help"), &["--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("Usage"));
}

#[test]
fn test_reads_config_from_working_directory() {
    let dir = workdir("fallback");
    std::fs::write(
        dir.join("space-rover.toml"),
        r#"
[grid]
width = 5.0
height = 5.0

[rover]
step_size = 2.0

[rover.position]
x = 1.0
y = 1.0
direction = "East"

[rover.commands]
forward = "F"
backward = "B"
left = "L"
right = "R"
"#,
    )
    .unwrap();

    let out = space_rover(&dir, &["F"]);
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "x": 3.0, "y": 1.0, "direction": "East" })
    );
}

#[test]
fn test_explicit_invalid_config_exits_with_config_code() {
    let dir = workdir("badconfig");
    let path = dir.join("bad.toml");
    std::fs::write(
        &path,
        r#"
[grid]
width = 5.0
height = 5.0

[rover]
step_size = 0.0

[rover.position]
x = 0.0
y = 0.0
direction = "North"
"#,
    )
    .unwrap();

    let out = space_rover(&dir, &["--config", path.to_str().unwrap(), "F"]);
    assert_eq!(out.status.code(), Some(3));
    assert!(stdout(&out).is_empty());
}

#[test]
fn test_missing_config_file_exits_with_config_code() {
    let out = space_rover(&workdir("missing"), &["--config", "nope.toml", "F"]);
    assert_eq!(out.status.code(), Some(3));
}
