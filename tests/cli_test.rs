// file: tests/cli_test.rs
// version: 1.0.0
// guid: 7d41b2e9-3c06-4f8a-a5d2-90e1c4b7f358

//! Integration tests for the ubuntu-drivers binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BANNER: &str = "Devices:\n\nFor more information about usage, try `ubuntu-drivers --help`.\n";

/// Helper to get an ubuntu-drivers command
fn drivers() -> Command {
    let mut cmd = Command::cargo_bin("ubuntu-drivers").unwrap();
    cmd.env_remove("NO_COLOR");
    cmd
}

// ============================================================================
// Command output
// ============================================================================

#[test]
fn test_no_subcommand_prints_banner() {
    drivers().assert().success().stdout(BANNER);
}

#[test]
fn test_debug_prints_debug() {
    drivers().arg("debug").assert().success().stdout("debug\n");
}

#[test]
fn test_debug_independent_of_root_options() {
    drivers()
        .args(["--logfile-log-level", "FATAL", "--stdout-log-level", "ERROR", "debug"])
        .assert()
        .success()
        .stdout("debug\n");
}

#[test]
fn test_install_with_package_and_flags() {
    drivers()
        .args(["install", "nvidia-driver", "--recommended", "--sources=FREE"])
        .assert()
        .success()
        .stdout("install\n");
}

#[test]
fn test_list_with_flags() {
    drivers()
        .args(["list", "--gpgpu", "--no-oem", "--include-dkms"])
        .assert()
        .success()
        .stdout("list\n");
}

#[test]
fn test_repeated_invocations_identical() {
    let first = drivers().args(["list", "--recommended"]).output().unwrap();
    let second = drivers().args(["list", "--recommended"]).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}

// ============================================================================
// Usage errors
// ============================================================================

#[test]
fn test_invalid_sources_rejected() {
    for command in ["install", "list"] {
        drivers()
            .args([command, "--sources=UNKNOWN"])
            .assert()
            .failure()
            .code(2)
            .stdout("")
            .stderr(predicate::str::contains("--sources"));
    }
}

#[test]
fn test_invalid_log_level_rejected() {
    drivers()
        .args(["--stdout-log-level=BOGUS", "debug"])
        .assert()
        .failure()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("--stdout-log-level"));
}

#[test]
fn test_unknown_option_rejected() {
    drivers()
        .args(["install", "--frobnicate"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("--frobnicate"));
}

#[test]
fn test_list_takes_no_package_name() {
    drivers()
        .args(["list", "nvidia-driver"])
        .assert()
        .failure()
        .stdout("");
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_logfile_receives_info_messages() {
    let tmp = TempDir::new().unwrap();
    let logfile = tmp.path().join("drivers.log");

    drivers()
        .arg("--logfile")
        .arg(&logfile)
        .args(["install", "nvidia-driver"])
        .assert()
        .success()
        .stdout("install\n");

    let content = std::fs::read_to_string(&logfile).unwrap();
    assert!(content.contains("Installing drivers for nvidia-driver"));
    assert!(!content.contains("Driver selection"));
}

#[test]
fn test_logfile_debug_level() {
    let tmp = TempDir::new().unwrap();
    let logfile = tmp.path().join("drivers.log");

    drivers()
        .arg("--logfile")
        .arg(&logfile)
        .args(["--logfile-log-level", "DEBUG", "list", "--sources", "FREE"])
        .assert()
        .success()
        .stdout("list\n");

    let content = std::fs::read_to_string(&logfile).unwrap();
    assert!(content.contains("Listing drivers from FREE sources"));
    assert!(content.contains("Driver selection"));
    assert!(content.contains("nonfree=false"));
}

#[test]
fn test_logfile_in_missing_directory_is_not_fatal() {
    let tmp = TempDir::new().unwrap();
    let logfile = tmp.path().join("missing").join("drivers.log");

    drivers()
        .args(["--stdout-log-level", "WARN", "--logfile"])
        .arg(&logfile)
        .arg("debug")
        .assert()
        .success()
        .stdout("debug\n")
        .stderr(predicate::str::contains("Failed to open logfile"));

    assert!(!logfile.exists());
}

#[test]
fn test_console_log_lines_go_to_stderr() {
    drivers()
        .args(["--stdout-log-level", "DEBUG", "list"])
        .assert()
        .success()
        .stdout("list\n")
        .stderr(predicate::str::contains("Driver selection"));
}

#[test]
fn test_output_exact_under_any_logging_options() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing").join("drivers.log");
    let missing = missing.to_str().unwrap();
    let writable = tmp.path().join("drivers.log");
    let writable = writable.to_str().unwrap();

    let commands: &[(&[&str], &str)] = &[
        (&[], BANNER),
        (&["debug"], "debug\n"),
        (&["install", "nvidia-driver", "--gpgpu"], "install\n"),
        (&["list", "--include-dkms"], "list\n"),
    ];
    let root_options: &[&[&str]] = &[
        &["--stdout-log-level", "INFO"],
        &["--stdout-log-level", "DEBUG"],
        &["--stdout-log-level", "DEBUG", "--logfile", missing],
        &["--stdout-log-level", "INFO", "--logfile", writable, "--logfile-log-level", "DEBUG"],
    ];

    for options in root_options {
        for (args, expected) in commands {
            drivers()
                .args(*options)
                .args(*args)
                .assert()
                .success()
                .stdout(*expected);
        }
    }
}

// ============================================================================
// Help
// ============================================================================

#[test]
fn test_root_help_shows_option_groups() {
    drivers()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Standard output logging"))
        .stdout(predicate::str::contains("Logfile"))
        .stdout(predicate::str::contains("FATAL"));
}

#[test]
fn test_install_help_shows_option_groups() {
    drivers()
        .args(["install", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic Usage"))
        .stdout(predicate::str::contains("Graphics drivers"))
        .stdout(predicate::str::contains("OEM packages"));
}

#[test]
fn test_no_color_falls_back_to_plain_help() {
    drivers()
        .env("NO_COLOR", "1")
        .args(["install", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--include-dkms"))
        .stdout(predicate::str::contains("Graphics drivers").not());
}

#[test]
fn test_version() {
    drivers()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
