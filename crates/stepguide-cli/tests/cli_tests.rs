use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a resources directory with the given images
fn create_cli_test_environment(images: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    for name in images {
        fs::write(temp_dir.path().join(name), b"fake image").expect("Failed to write image");
    }
    temp_dir
}

/// Helper function to create a Command with --no-color and the resources
/// directory set
fn stepguide_cmd(resources: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stepguide").expect("Failed to find stepguide binary");
    cmd.arg("--no-color")
        .arg("--resources-dir")
        .arg(resources);
    cmd
}

#[test]
fn test_cli_overview_empty_state() {
    let temp_dir = create_cli_test_environment(&[]);

    stepguide_cmd(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No assembly steps found in"));
}

#[test]
fn test_cli_steps_lists_in_name_order() {
    let temp_dir = create_cli_test_environment(&["02-top.png", "01-base.jpg", "notes.txt"]);
    fs::write(temp_dir.path().join("01-base.txt"), "Base").expect("Failed to write text");

    stepguide_cmd(temp_dir.path())
        .arg("steps")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "1. 01-base.jpg\n2. 02-top.png (no description)\n",
        ));
}

#[test]
fn test_cli_steps_json() {
    let temp_dir = create_cli_test_environment(&["a.png"]);

    stepguide_cmd(temp_dir.path())
        .args(["steps", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"index\": 0"))
        .stdout(predicate::str::contains("a.png"));
}

#[test]
fn test_cli_steps_json_reports_descriptions() {
    let temp_dir = create_cli_test_environment(&["a.png", "b.png"]);
    fs::write(temp_dir.path().join("b.txt"), "Fit the door.").expect("Failed to write text");

    let output = stepguide_cmd(temp_dir.path())
        .args(["steps", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).expect("Expected UTF-8 output");
    let first = output.find("\"has_description\": false").expect("Missing step 1 flag");
    let second = output.find("\"has_description\": true").expect("Missing step 2 flag");
    assert!(first < second);
    assert!(output.contains("\"number\": 2"));
}

#[test]
fn test_cli_show_step_with_placeholder() {
    let temp_dir = create_cli_test_environment(&["a.png"]);

    stepguide_cmd(temp_dir.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Step 1 of 1"))
        .stdout(predicate::str::contains("Description for step 1"))
        .stdout(predicate::str::contains("(file not found)"));
}

#[test]
fn test_cli_show_step_with_description() {
    let temp_dir = create_cli_test_environment(&["a.png", "b.png"]);
    fs::write(temp_dir.path().join("b.txt"), "  Fit the door.  \n").expect("Failed to write");

    stepguide_cmd(temp_dir.path())
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Step 2 of 2"))
        .stdout(predicate::str::contains("Fit the door."));
}

#[test]
fn test_cli_show_missing_step_fails() {
    let temp_dir = create_cli_test_environment(&["a.png"]);

    stepguide_cmd(temp_dir.path())
        .args(["show", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Step 5 does not exist"));
}

#[test]
fn test_cli_notes_workflow() {
    let temp_dir = create_cli_test_environment(&["a.png"]);
    let root = temp_dir.path();

    stepguide_cmd(root)
        .args(["notes", "add", "1", "  Bolt 3 is loose  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added note 1 on step 1"))
        .stdout(predicate::str::contains("Bolt 3 is loose"));

    stepguide_cmd(root)
        .args(["notes", "add", "1", "Second remark"])
        .assert()
        .success();

    stepguide_cmd(root)
        .args(["notes", "edit", "1", "1", "Bolt 3 fixed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated note 1 on step 1"));

    stepguide_cmd(root)
        .args(["notes", "delete", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted note 2 on step 1"));

    stepguide_cmd(root)
        .args(["notes", "list", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Notes for step 1"))
        .stdout(predicate::str::contains("1. **"))
        .stdout(predicate::str::contains("Bolt 3 fixed"))
        .stdout(predicate::str::contains("Second remark").not());

    let content = fs::read_to_string(root.join("notes_step1.txt")).expect("Failed to read");
    assert_eq!(content.lines().count(), 1);
    assert!(content.starts_with('['));
    assert!(content.trim_end().ends_with("] Bolt 3 fixed"));
}

#[test]
fn test_cli_blank_note_is_rejected() {
    let temp_dir = create_cli_test_environment(&["a.png"]);

    stepguide_cmd(temp_dir.path())
        .args(["notes", "add", "1", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note text cannot be empty"));

    assert!(!temp_dir.path().join("notes_step1.txt").exists());
}

#[test]
fn test_cli_edit_invalid_position() {
    let temp_dir = create_cli_test_environment(&["a.png"]);

    stepguide_cmd(temp_dir.path())
        .args(["notes", "edit", "1", "3", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No note at position"));
}

#[test]
fn test_cli_zero_step_number_is_rejected() {
    let temp_dir = create_cli_test_environment(&["a.png"]);

    stepguide_cmd(temp_dir.path())
        .args(["notes", "list", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("numbering starts at 1"));
}

#[test]
fn test_cli_export_and_import() {
    let temp_dir = create_cli_test_environment(&["a.png", "b.png"]);
    let root = temp_dir.path();
    fs::write(
        root.join("notes_step1.txt"),
        "[01.02.2024 03:04] from file\n",
    )
    .expect("Failed to write notes");

    let exported = stepguide_cmd(root)
        .args(["notes", "export", "1"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[01.02.2024 03:04] from file\n"))
        .get_output()
        .stdout
        .clone();

    let import_file = root.join("import.txt");
    fs::write(&import_file, exported).expect("Failed to write import file");

    stepguide_cmd(root)
        .args(["notes", "import", "2"])
        .arg(&import_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 notes into step 2"));

    let content = fs::read_to_string(root.join("notes_step2.txt")).expect("Failed to read");
    assert_eq!(content, "[01.02.2024 03:04] from file\n");
}

#[test]
fn test_cli_browse_session() {
    let temp_dir = create_cli_test_environment(&["a.png", "b.png"]);

    stepguide_cmd(temp_dir.path())
        .arg("browse")
        .write_stdin("n\nadd check hinge\nnotes\nn\nn\np\np\np\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Assembly instructions"))
        .stdout(predicate::str::contains("2 steps available."))
        .stdout(predicate::str::contains("# Step 1 of 2"))
        .stdout(predicate::str::contains("Added note 1 on step 1"))
        .stdout(predicate::str::contains("check hinge"))
        .stdout(predicate::str::contains("# Step 2 of 2"));

    let content =
        fs::read_to_string(temp_dir.path().join("notes_step1.txt")).expect("Failed to read");
    assert!(content.ends_with("] check hinge\n"));
}

#[test]
fn test_cli_browse_reports_errors_and_continues() {
    let temp_dir = create_cli_test_environment(&["a.png"]);

    stepguide_cmd(temp_dir.path())
        .arg("browse")
        .write_stdin("add too early\nfly\ng 4\nn\nadd  \ndelete 1\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No step selected"))
        .stdout(predicate::str::contains("Unknown command: fly"))
        .stdout(predicate::str::contains("Step 4 does not exist"))
        .stdout(predicate::str::contains("Note text cannot be empty"))
        .stdout(predicate::str::contains("No note at position 0"));
}

#[test]
fn test_cli_browse_empty_resources() {
    let temp_dir = create_cli_test_environment(&[]);

    stepguide_cmd(temp_dir.path())
        .arg("browse")
        .write_stdin("n\nnotes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No assembly steps found in"))
        .stdout(predicate::str::contains("No step selected"));
}
