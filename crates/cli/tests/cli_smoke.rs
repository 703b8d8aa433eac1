//! CLI smoke tests for tsbuild.
//!
//! These tests run the binary against throwaway project directories and
//! verify exit codes and the observable output contract. The real
//! TypeScript compiler is never required: the `--compiler` flag points at
//! harmless stand-ins.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the tsbuild binary.
fn tsbuild_cmd() -> Command {
    cargo_bin_cmd!("tsbuild")
}

/// Create a temp project with a README and an existing build directory.
fn temp_project(readme: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("README.md"), readme).unwrap();
    std::fs::create_dir(temp.path().join("build")).unwrap();
    temp
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
    tsbuild_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
    tsbuild_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tsbuild"));
}

// =============================================================================
// Full sequence
// =============================================================================

#[test]
#[cfg(unix)]
fn full_run_copies_readme_byte_identical() {
    let readme = "# my-package\n\nSome docs with unicode: ⚛\n";
    let temp = temp_project(readme);

    tsbuild_cmd()
        .current_dir(temp.path())
        .args(["--compiler", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Done!"));

    let copied = std::fs::read(temp.path().join("build/README.md")).unwrap();
    assert_eq!(copied, readme.as_bytes());
}

#[test]
#[cfg(unix)]
fn completion_line_has_timestamp() {
    let temp = temp_project("# pkg\n");

    tsbuild_cmd()
        .current_dir(temp.path())
        .args(["--compiler", "true"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Done! \d{2}:\d{2}:\d{2}").unwrap());
}

#[test]
#[cfg(unix)]
fn stale_copy_is_replaced() {
    let temp = temp_project("# fresh\n");
    std::fs::write(temp.path().join("build/README.md"), "# stale\n").unwrap();

    tsbuild_cmd()
        .current_dir(temp.path())
        .args(["--compiler", "true"])
        .assert()
        .success();

    let copied = std::fs::read_to_string(temp.path().join("build/README.md")).unwrap();
    assert_eq!(copied, "# fresh\n");
}

#[test]
#[cfg(unix)]
fn verbose_flag_logs_the_sequence() {
    let temp = temp_project("# pkg\n");

    tsbuild_cmd()
        .current_dir(temp.path())
        .args(["--verbose", "--compiler", "true"])
        .assert()
        .success()
        .stderr(predicate::str::contains("starting build sequence"));
}

// =============================================================================
// Compiler failures are not fatal
// =============================================================================

#[test]
#[cfg(unix)]
fn failing_compiler_still_exits_zero() {
    let temp = temp_project("# pkg\n");

    tsbuild_cmd()
        .current_dir(temp.path())
        .args(["--compiler", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Done!"));
}

#[test]
fn missing_compiler_still_exits_zero() {
    let temp = temp_project("# pkg\n");

    tsbuild_cmd()
        .current_dir(temp.path())
        .args(["--compiler", "tsbuild-test-no-such-compiler"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Done!"));
}

// =============================================================================
// Copy failures are fatal
// =============================================================================

#[test]
#[cfg(unix)]
fn missing_build_dir_fails_without_done_line() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("README.md"), "# pkg\n").unwrap();

    tsbuild_cmd()
        .current_dir(temp.path())
        .args(["--compiler", "true"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Done!").not())
        .stderr(predicate::str::contains("Failed to copy"));
}

#[test]
#[cfg(unix)]
fn missing_readme_fails_without_done_line() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("build")).unwrap();

    tsbuild_cmd()
        .current_dir(temp.path())
        .args(["--compiler", "true"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Done!").not());
}
