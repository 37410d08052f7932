//! CLI tests for the `roster` binary.
//!
//! Spawns the binary with a temp config and scripted stdin, then checks exit
//! codes and rendered output.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use roster::exit_codes;
use roster::io::config::load_config;
use roster::test_support::TestConfig;

fn roster_cmd(config: &TestConfig) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_roster"));
    cmd.current_dir(config.root()).arg("--config").arg(config.path());
    cmd
}

fn run_shell(config: &TestConfig, script: &str) -> Output {
    let mut child = roster_cmd(config)
        .arg("shell")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn roster shell");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(script.as_bytes())
        .expect("write script");
    child.wait_with_output().expect("wait for roster shell")
}

#[test]
fn init_writes_loadable_default_config() {
    let config = TestConfig::empty().expect("config");
    let status = roster_cmd(&config).arg("init").status().expect("roster init");
    assert_eq!(status.code(), Some(exit_codes::OK));

    let cfg = load_config(config.path()).expect("load written config");
    assert!(cfg.confirm_deletes);
    assert_eq!(cfg.seed.len(), 2);
}

#[test]
fn validate_rejects_duplicate_seed_ids() {
    let config = TestConfig::with_contents(
        r#"
[[seed]]
id = 1
name = "A"
email = "a@example.com"
age = 20
course = "C"
phone = "1"
address = "X"

[[seed]]
id = 1
name = "B"
email = "b@example.com"
age = 20
course = "C"
phone = "2"
address = "Y"
"#,
    )
    .expect("config");

    let output = roster_cmd(&config).arg("validate").output().expect("roster validate");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("duplicate id 1"), "stderr: {stderr}");
}

#[test]
fn shell_session_adds_and_deletes() {
    let config = TestConfig::with_contents("confirm_deletes = true\n").expect("config");
    let script = "\
add
set name Grace Hopper
set email grace@example.com
set age 85
set course Computer Science
set phone +1 555 0199
set address Arlington, VA
submit
delete 1
yes
list
quit
";

    let output = run_shell(&config, script);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Added student 3"), "stdout: {stdout}");
    assert!(stdout.contains("Deleted student 1 (John Doe)"));
    let last_table = stdout.rsplit("Students List").next().expect("table");
    assert!(last_table.starts_with(" (2 students)"));
    assert!(last_table.contains("Grace Hopper"));
    assert!(!last_table.contains("John Doe"));
}

#[test]
fn shell_ends_cleanly_on_eof() {
    let config = TestConfig::with_contents("seed = []\n").expect("config");
    let output = run_shell(&config, "");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No students found"));
}

#[test]
fn list_json_prints_seed() {
    let config = TestConfig::empty().expect("config");
    let output = roster_cmd(&config)
        .args(["list", "--json"])
        .output()
        .expect("roster list");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let students: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(students[0]["email"], "john.doe@example.com");
    assert_eq!(students[1]["age"], 22);
}
