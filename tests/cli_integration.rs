use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ITEM: &str = r#"{"id":"1","email":"a@x.com","age":30}"#;

fn userlist(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("userlist").unwrap();
    cmd.env("USERLIST_HOME", home).env_remove("USERLIST_LOG");
    cmd
}

fn run_op(home: &Path, file: &Path, op: &str, extra: &[&str]) -> assert_cmd::assert::Assert {
    userlist(home)
        .arg("-operation")
        .arg(op)
        .arg("-fileName")
        .arg(file)
        .args(extra)
        .assert()
}

#[test]
fn test_add_list_find_remove_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("users.json");
    fs::write(&file, "").unwrap();

    run_op(temp_dir.path(), &file, "add", &["-item", ITEM])
        .success()
        .stdout("");

    run_op(temp_dir.path(), &file, "list", &[])
        .success()
        .stdout(format!("[{}]", ITEM));

    run_op(temp_dir.path(), &file, "findById", &["-id", "1"])
        .success()
        .stdout(ITEM);

    run_op(temp_dir.path(), &file, "findById", &["-id", "9"])
        .success()
        .stdout("");

    run_op(temp_dir.path(), &file, "remove", &["-id", "1"])
        .success()
        .stdout("");

    run_op(temp_dir.path(), &file, "list", &[])
        .success()
        .stdout("[]");
}

#[test]
fn test_list_creates_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("fresh.json");

    run_op(temp_dir.path(), &file, "list", &[])
        .success()
        .stdout("");
    assert!(file.exists());
}

#[test]
fn test_list_prints_file_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("users.json");
    let raw = "[\n  {\"id\": \"1\", \"email\": \"a@x.com\", \"age\": 30}\n]\n";
    fs::write(&file, raw).unwrap();

    run_op(temp_dir.path(), &file, "list", &[])
        .success()
        .stdout(raw);
}

#[test]
fn test_duplicate_add_keeps_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("users.json");
    run_op(temp_dir.path(), &file, "add", &["-item", ITEM]).success();
    let before = fs::read(&file).unwrap();

    run_op(
        temp_dir.path(),
        &file,
        "add",
        &["-item", r#"{"id":"1","email":"other@x.com","age":1}"#],
    )
    .success()
    .stdout(predicate::str::contains("id 1 is already taken"));

    assert_eq!(fs::read(&file).unwrap(), before);
}

#[test]
fn test_remove_missing_reports_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("users.json");
    run_op(temp_dir.path(), &file, "add", &["-item", ITEM]).success();
    let before = fs::read(&file).unwrap();

    run_op(temp_dir.path(), &file, "remove", &["-id", "7"])
        .success()
        .stdout(predicate::str::contains("Item with id 7 not found"));

    assert_eq!(fs::read(&file).unwrap(), before);
}

#[test]
fn test_missing_operation_fails_without_touching_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("users.json");

    userlist(temp_dir.path())
        .arg("-fileName")
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("specify -operation argument"));

    assert!(!file.exists());
}

#[test]
fn test_missing_file_name_fails() {
    let temp_dir = TempDir::new().unwrap();

    userlist(temp_dir.path())
        .args(["-operation", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("specify -fileName argument"));
}

#[test]
fn test_invalid_operation_fails() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("users.json");

    run_op(temp_dir.path(), &file, "update", &[])
        .failure()
        .stderr(predicate::str::contains("Invalid operation: update"));

    assert!(!file.exists());
}

#[test]
fn test_corrupt_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("users.json");
    fs::write(&file, "[{\"id\":").unwrap();

    run_op(temp_dir.path(), &file, "findById", &["-id", "1"])
        .failure()
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn test_double_dash_flags_work_too() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("users.json");

    userlist(temp_dir.path())
        .arg("--operation=add")
        .arg(format!("--fileName={}", file.display()))
        .arg("--item")
        .arg(ITEM)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), format!("[{}]", ITEM));
}

#[test]
fn test_pretty_config_is_honoured() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("users.json");
    fs::write(temp_dir.path().join("config.json"), r#"{"pretty": true}"#).unwrap();

    run_op(temp_dir.path(), &file, "add", &["-item", ITEM]).success();

    let written = fs::read_to_string(&file).unwrap();
    assert!(written.starts_with("[\n  {\n"));

    run_op(temp_dir.path(), &file, "findById", &["-id", "1"])
        .success()
        .stdout(ITEM);
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("users.json");
    run_op(temp_dir.path(), &file, "add", &["-item", ITEM]).success();

    run_op(temp_dir.path(), &file, "findById", &["-id", "1", "-verbose"])
        .success()
        .stdout(ITEM)
        .stderr(predicate::str::contains("dispatching"));
}
