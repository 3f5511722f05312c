// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DIFF: &str = "\
diff --git a/src/app.js b/src/app.js
@@ -1,2 +1,3 @@
 function main() {
+  console.log('debug');
 }
";

fn prb(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("prb").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn version_prints_name_and_version() {
    let dir = TempDir::new().unwrap();
    prb(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("prb "));
}

#[test]
fn review_from_stdin_prints_report() {
    let dir = TempDir::new().unwrap();
    prb(&dir)
        .arg("review")
        .write_stdin(DIFF)
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall risk"))
        .stdout(predicate::str::contains("src/app.js"))
        .stdout(predicate::str::contains("console.log"));
}

#[test]
fn review_json_output_uses_wire_names() {
    let dir = TempDir::new().unwrap();
    prb(&dir)
        .args(["review", "--format", "json"])
        .write_stdin(DIFF)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"result\""))
        .stdout(predicate::str::contains("\"missingTests\""))
        .stdout(predicate::str::contains("\"policyId\""))
        .stdout(predicate::str::contains("\"nitpick\""));
}

#[test]
fn blank_input_is_diff_required() {
    let dir = TempDir::new().unwrap();
    prb(&dir)
        .arg("review")
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("diff_required"));
}

#[test]
fn garbage_input_is_diff_empty() {
    let dir = TempDir::new().unwrap();
    prb(&dir)
        .arg("review")
        .write_stdin("hello world\nnot a diff\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("diff_empty"));
}

#[test]
fn unknown_provider_is_rejected() {
    let dir = TempDir::new().unwrap();
    prb(&dir)
        .args(["review", "--provider", "crystal-ball"])
        .write_stdin(DIFF)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid_provider"));
}

#[test]
fn stats_counts_lines_and_files() {
    let dir = TempDir::new().unwrap();
    prb(&dir)
        .arg("stats")
        .write_stdin(DIFF)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 files changed"))
        .stdout(predicate::str::contains("+1"))
        .stdout(predicate::str::contains("-0"));
}

#[test]
fn failing_policy_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("prb.toml");
    std::fs::write(
        &config,
        "[policy]\nid = \"strict\"\nrequire_tests_for_source_changes = true\n",
    )
    .unwrap();

    prb(&dir)
        .arg("review")
        .write_stdin(DIFF)
        .assert()
        .failure()
        .stdout(predicate::str::contains("strict"))
        .stdout(predicate::str::contains("Tests are required"));
}

#[test]
fn no_policy_flag_skips_policy() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("prb.toml");
    std::fs::write(
        &config,
        "[policy]\nid = \"strict\"\nrequire_tests_for_source_changes = true\n",
    )
    .unwrap();

    prb(&dir)
        .args(["review", "--no-policy"])
        .write_stdin(DIFF)
        .assert()
        .success()
        .stdout(predicate::str::contains("no policy applied"));
}

#[test]
fn init_writes_config() {
    let dir = TempDir::new().unwrap();
    prb(&dir).arg("init").assert().success();
    assert!(dir.path().join("prb.toml").exists());

    // Second run without --force refuses to overwrite.
    prb(&dir).arg("init").assert().failure();
    prb(&dir).args(["init", "--force"]).assert().success();
}
