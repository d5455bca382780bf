use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn trimmer() -> Command {
    Command::cargo_bin("claude-trimmer").unwrap()
}

#[test]
fn test_oneshot_rejoins_wrapped_text() {
    trimmer()
        .arg("--no-copy")
        .arg("  hello\nworld  \n\n  next para")
        .assert()
        .success()
        .stdout("hello world\n\nnext para\n")
        .stderr(predicate::str::contains("[Copied to clipboard]").not());
}

#[test]
fn test_oneshot_joins_arguments_with_spaces() {
    trimmer()
        .args(["--no-copy", "fix the", "build  ", "please"])
        .assert()
        .success()
        .stdout("fix the build   please\n");
}

#[test]
fn test_oneshot_list_text_after_double_dash() {
    trimmer()
        .args(["--no-copy", "--", "- item one\nstill one\n- item two"])
        .assert()
        .success()
        .stdout("- item one still one\n- item two\n");
}

#[test]
fn test_oneshot_whitespace_only_fails() {
    trimmer()
        .args(["--no-copy", "   ", "\n"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("No input provided."));
}

#[test]
fn test_oneshot_empty_argument_fails() {
    trimmer()
        .args(["--no-copy", ""])
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn test_piped_input_is_cleaned() {
    trimmer()
        .arg("--no-copy")
        .write_stdin("  Done.\n  Next sentence.\n\n  foo (\n  bar)\n")
        .assert()
        .success()
        .stdout("Done.\nNext sentence.\n\nfoo (\nbar)\n");
}

#[test]
fn test_piped_blank_input_exits_cleanly() {
    trimmer()
        .arg("--no-copy")
        .write_stdin("\n   \n")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No input provided.").not());
}

#[test]
fn test_empty_stdin_without_arguments_exits_cleanly() {
    trimmer()
        .write_stdin("")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Error").not());
}

#[test]
fn test_config_can_disable_copy() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.json");
    fs::write(&config_path, r#"{"copy_to_clipboard": false}"#).unwrap();

    trimmer()
        .arg("--config")
        .arg(&config_path)
        .arg("wrapped\nline")
        .assert()
        .success()
        .stdout("wrapped line\n")
        .stderr(predicate::str::contains("[Copied to clipboard]").not());
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    trimmer()
        .arg("--config")
        .arg(temp_dir.path().join("absent.json"))
        .arg("text")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_reserved_newline_key_in_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.json");
    fs::write(&config_path, r#"{"newline_key": "d"}"#).unwrap();

    trimmer()
        .arg("--config")
        .arg(&config_path)
        .arg("text")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("reserved"));
}

#[test]
fn test_version_flag() {
    trimmer()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(concat!(
            "claude-trimmer ",
            env!("CARGO_PKG_VERSION")
        )));
}
