use assert_cmd::Command;
use predicates::prelude::*;

fn contacts(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("contacts").unwrap();
    cmd.current_dir(dir)
        .env_remove("CONTACT_BOOK_DIR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_save_and_reload() {
    let temp_dir = tempfile::tempdir().unwrap();

    contacts(temp_dir.path())
        .write_stdin("add\nAlice\n1234567890\nalice@gmail.com\nsave\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the Contact Manager!"))
        .stdout(predicate::str::contains("Contact added successfully."))
        .stdout(predicate::str::contains("Contacts saved. Exiting..."));

    assert!(temp_dir.path().join("contacts.json").exists());
    assert!(temp_dir.path().join("contacts-audit.log").exists());

    contacts(temp_dir.path())
        .write_stdin("view\nall\nsave\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("1234567890"))
        .stdout(predicate::str::contains("alice@gmail.com"));
}

#[test]
fn test_empty_save_then_view_all() {
    let temp_dir = tempfile::tempdir().unwrap();

    contacts(temp_dir.path())
        .write_stdin("save\n")
        .assert()
        .success();

    contacts(temp_dir.path())
        .write_stdin("view\nall\nsave\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts available."))
        .stdout(predicate::str::contains("Error loading contacts").not());
}

#[test]
fn test_corrupt_file_still_exits_zero() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("contacts.json"), "garbage").unwrap();

    contacts(temp_dir.path())
        .write_stdin("view\nall\nsave\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error loading contacts: "))
        .stdout(predicate::str::contains("No contacts available."));
}

#[test]
fn test_closed_stdin_exits_zero_without_saving() {
    let temp_dir = tempfile::tempdir().unwrap();

    contacts(temp_dir.path())
        .write_stdin("add\nAlice\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input closed. Exiting without saving."));

    assert!(!temp_dir.path().join("contacts.json").exists());
}

#[test]
fn test_data_dir_flag_and_no_audit() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("book");

    contacts(temp_dir.path())
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--no-audit")
        .write_stdin("add\nBob\n0987654321\nbob@gmail.com\nsave\n")
        .assert()
        .success();

    assert!(data_dir.join("contacts.json").exists());
    assert!(!data_dir.join("contacts-audit.log").exists());
    assert!(!temp_dir.path().join("contacts.json").exists());
}

#[test]
fn test_logs_stay_off_stdout() {
    let temp_dir = tempfile::tempdir().unwrap();

    contacts(temp_dir.path())
        .arg("--verbose")
        .write_stdin("save\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("saving contacts"));
}

#[test]
fn test_invalid_utf8_input_is_not_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut script: Vec<u8> = b"view\n\xff\xfe\n".to_vec();
    script.extend_from_slice(b"\xff\xfe\nadd\nAlice\n1234567890\nalice@gmail.com\nsave\n");

    contacts(temp_dir.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command. Please try again."))
        .stdout(predicate::str::contains("Contact added successfully."))
        .stdout(predicate::str::contains("Contacts saved. Exiting..."));

    let saved = std::fs::read_to_string(temp_dir.path().join("contacts.json")).unwrap();
    assert!(saved.contains("alice@gmail.com"));
}
