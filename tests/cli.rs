use std::fs;

use assert_cmd::Command;

mod common;

use common::{write_config_files, write_image_stub};

#[test]
fn runs() {
    let mut cmd = Command::cargo_bin("jointlabel").unwrap();
    cmd.assert().success();
}

#[test]
fn outputs_tool_name() {
    let mut cmd = Command::cargo_bin("jointlabel").unwrap();
    cmd.arg("-V");
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("jointlabel 0.2.0"));
}

// Show subcommand tests

#[test]
fn show_without_a_sidecar_reports_none() {
    let temp = tempfile::tempdir().unwrap();
    let image = temp.path().join("dog.png");
    write_image_stub(&image);

    let mut cmd = Command::cargo_bin("jointlabel").unwrap();
    cmd.arg("show").arg(&image);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("No label file"));
}

#[test]
fn show_prints_joints_tags_and_box() {
    let temp = tempfile::tempdir().unwrap();
    let image = temp.path().join("dog.png");
    write_image_stub(&image);
    fs::write(
        temp.path().join("dog.png.label"),
        r#"{"Joints":[{"name":"head","x-coordinate":12,"y-coordinate":34}],"Tags":{"breed":"husky"},"Bounding box":{"x":"5","y":"5","w":"45","h":"75"}}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("jointlabel").unwrap();
    cmd.arg("show").arg(&image);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("head: (12, 34)"))
        .stdout(predicates::str::contains("breed: husky"))
        .stdout(predicates::str::contains("Bounding box: (5, 5)-(50, 80)"));
}

#[test]
fn show_fails_on_a_corrupt_sidecar() {
    let temp = tempfile::tempdir().unwrap();
    let image = temp.path().join("dog.png");
    write_image_stub(&image);
    fs::write(temp.path().join("dog.png.label"), "not json").unwrap();

    let mut cmd = Command::cargo_bin("jointlabel").unwrap();
    cmd.arg("show").arg(&image);
    cmd.assert().failure();
}

// Validate subcommand tests

#[test]
fn validate_clean_directory_passes() {
    let temp = tempfile::tempdir().unwrap();
    write_config_files(temp.path());
    let image = temp.path().join("dog.png");
    write_image_stub(&image);
    fs::write(
        temp.path().join("dog.png.label"),
        r#"{"Joints":[{"name":"head","x-coordinate":1,"y-coordinate":2}],"Tags":{"breed":"husky"},"Bounding box":{}}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("jointlabel").unwrap();
    cmd.arg("validate")
        .arg(temp.path())
        .arg("--config-dir")
        .arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("no issues found"));
}

#[test]
fn validate_reports_unknown_joint_names() {
    let temp = tempfile::tempdir().unwrap();
    write_config_files(temp.path());
    let image = temp.path().join("dog.png");
    write_image_stub(&image);
    fs::write(
        temp.path().join("dog.png.label"),
        r#"{"Joints":[{"name":"wing","x-coordinate":1,"y-coordinate":2}]}"#,
    )
    .unwrap();

    // Unknown names are warnings: the run passes unless --strict.
    let mut cmd = Command::cargo_bin("jointlabel").unwrap();
    cmd.arg("validate")
        .arg(temp.path())
        .arg("--config-dir")
        .arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("UnknownJointName"));

    let mut cmd = Command::cargo_bin("jointlabel").unwrap();
    cmd.arg("validate")
        .arg(temp.path())
        .arg("--config-dir")
        .arg(temp.path())
        .arg("--strict");
    cmd.assert().failure();
}

#[test]
fn validate_turns_parse_failures_into_report_errors() {
    let temp = tempfile::tempdir().unwrap();
    write_config_files(temp.path());
    let image = temp.path().join("dog.png");
    write_image_stub(&image);
    fs::write(temp.path().join("dog.png.label"), "not json").unwrap();

    let mut cmd = Command::cargo_bin("jointlabel").unwrap();
    cmd.arg("validate")
        .arg(temp.path())
        .arg("--config-dir")
        .arg(temp.path());
    cmd.assert()
        .failure()
        .stdout(predicates::str::contains("UnreadableLabelFile"));
}

#[test]
fn validate_without_config_files_fails() {
    let temp = tempfile::tempdir().unwrap();
    let image = temp.path().join("dog.png");
    write_image_stub(&image);

    let mut cmd = Command::cargo_bin("jointlabel").unwrap();
    cmd.arg("validate")
        .arg(temp.path())
        .arg("--config-dir")
        .arg(temp.path());
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("JointNames.txt"));
}
