#![cfg(unix)]

use std::fs;
use std::os::unix::fs::{symlink, PermissionsExt};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_generic_subcommand");

/// `<tmp>/bin/tool` -> generic_subcommand, plus whatever scripts a test adds.
fn tool_family() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let bin = tmp.path().join("bin");
    fs::create_dir_all(&bin).unwrap();
    symlink(BIN, bin.join("tool")).unwrap();
    (tmp, bin)
}

fn add_script(dir: &Path, name: &str, body: &str) {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn run(program: &Path, args: &[&str]) -> Output {
    // A script written by one test can be briefly held open by a sibling
    // test's fork; retry on ETXTBSY instead of failing spuriously.
    let mut attempts = 0;
    loop {
        let out = Command::new(program)
            .args(args)
            .env("PATH", "/usr/bin:/bin")
            .env_remove("ARGPOINTS_LOG")
            .output()
            .unwrap();
        attempts += 1;
        if attempts == 5 || !stderr(&out).contains("errno=26") {
            return out;
        }
        std::thread::sleep(std::time::Duration::from_millis(50));
    }
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn direct_invocation_is_refused() {
    let out = run(Path::new(BIN), &["anything"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(
        stderr(&out).contains("meant to be symlinked and not directly executed"),
        "{}",
        stderr(&out)
    );
}

#[test]
fn symlinked_dispatcher_execs_sibling_subcommand() {
    let (_tmp, bin) = tool_family();
    add_script(&bin, "tool-hello", "echo \"hello $*\"\nexit 3");

    let out = run(&bin.join("tool"), &["hello", "-h", "world"]);

    assert_eq!(stdout(&out), "hello -h world\n");
    assert_eq!(out.status.code(), Some(3));
}

#[test]
fn subcommand_sees_its_own_name_as_argv0() {
    let (_tmp, bin) = tool_family();
    // A script's $0 is its path, so use a real binary that reports argv[0]:
    // the dispatcher itself names its version line after it.
    symlink(BIN, bin.join("tool-greet")).unwrap();

    let out = run(&bin.join("tool"), &["greet", "--version"]);

    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(
        stdout(&out),
        format!("{:<17}: {}\n", "greet", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn version_flag_prints_name_and_version() {
    let (_tmp, bin) = tool_family();

    let out = run(&bin.join("tool"), &["--version"]);

    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        format!("{:<17}: {}\n", "tool", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn help_lists_available_subcommands() {
    let (_tmp, bin) = tool_family();
    add_script(&bin, "tool-build", "true");
    add_script(&bin, "tool-build-docs", "true");
    add_script(&bin, "tool-test", "true");

    let out = run(&bin.join("tool"), &["--help"]);

    assert!(out.status.success());
    assert!(
        stdout(&out).contains("Available subcommands: build test"),
        "{}",
        stdout(&out)
    );
}

#[test]
fn missing_subcommand_prints_usage_and_fails() {
    let (_tmp, bin) = tool_family();

    let out = run(&bin.join("tool"), &[]);

    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("Usage: tool"), "{err}");
    assert!(err.contains("subcommand is required"), "{err}");
}

#[test]
fn unknown_subcommand_fails_with_message() {
    let (_tmp, bin) = tool_family();

    let out = run(&bin.join("tool"), &["nope"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(
        stderr(&out).contains("Tool command `tool-nope` not found."),
        "{}",
        stderr(&out)
    );
}

#[test]
fn non_executable_subcommand_fails_with_message() {
    let (_tmp, bin) = tool_family();
    fs::write(bin.join("tool-locked"), "#!/bin/sh\n").unwrap();
    fs::set_permissions(bin.join("tool-locked"), fs::Permissions::from_mode(0o644)).unwrap();

    let out = run(&bin.join("tool"), &["locked"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(
        stderr(&out).contains("Tool command `tool-locked` is not executable."),
        "{}",
        stderr(&out)
    );
}

#[test]
fn unlaunchable_subcommand_reports_errno() {
    let (_tmp, bin) = tool_family();
    // interpreter does not exist, so execve itself fails with ENOENT
    fs::write(bin.join("tool-broken"), "#!/nonexistent/interpreter\n").unwrap();
    fs::set_permissions(bin.join("tool-broken"), fs::Permissions::from_mode(0o755)).unwrap();

    let out = run(&bin.join("tool"), &["broken"]);

    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("Error executing Tool command broken:"), "{err}");
    assert!(err.contains("errno=2"), "{err}");
}
