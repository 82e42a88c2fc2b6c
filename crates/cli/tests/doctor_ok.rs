use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    let toml = r###"
version = 1
profile = "default"

[profiles.default]
vault_root = "/tmp/v"
daily_dir = "Journal"

[memo]
post_format = { type = "header", level = 3 }
section = "## Log"
timestamp_format = "%H:%M"
"###;
    write_file(&cfg, toml);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dmemo"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   dmemo doctor"))
        .stdout(predicate::str::contains("profile: default"))
        .stdout(predicate::str::contains("vault_root: /tmp/v"))
        .stdout(predicate::str::contains("daily_dir: Journal"))
        .stdout(predicate::str::contains("post_format: header:3"))
        .stdout(predicate::str::contains("section: ## Log"))
        .stdout(predicate::str::contains("timestamp_format: %H:%M"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("daymemo").join("config.toml");
    write_file(
        &cfg_path,
        r#"
version = 1
profile = "default"
[profiles.default]
vault_root = "/tmp/v"
"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dmemo"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   dmemo doctor"))
        .stdout(predicate::str::contains("vault_root: /tmp/v"))
        .stdout(predicate::str::contains("post_format: codeblock"))
        .stdout(predicate::str::contains("section: (end of file)"));
}
