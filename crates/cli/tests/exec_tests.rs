// Integration tests for the dbgkit binary: exec, list-commands, and the
// piped console.
// Run with: cargo test -p dbgkit-cli --test exec_tests -- --nocapture
//
// Manual smoke test (requires a real TTY; cannot be automated):
//   dbgkit repl --snapshot tests/fixtures/demo.json
//   Verify: banner prints, Tab completes "dm"/"mbr" and field names,
//   Up recalls history, Ctrl-D exits with the terminal restored.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use dbgkit_cli::exit_codes::{
    EXIT_COMMAND_FAILED, EXIT_SNAPSHOT_UNREADABLE, EXIT_SUCCESS, EXIT_USAGE,
};

fn dbgkit() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dbgkit"));
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd
}

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/demo.json")
}

// ---------------------------------------------------------------------------
// exec: dm prints one line per expression
// ---------------------------------------------------------------------------

#[test]
fn exec_prints_expression_values() {
    let output = dbgkit()
        .args([
            "exec",
            "--snapshot",
            fixture_path().to_str().unwrap(),
            "dm nconn, hostname",
            "dm listener.addr.port",
        ])
        .output()
        .expect("dbgkit exec");

    assert!(output.status.success(), "exit code: {:?}\nstderr: {}",
        output.status, String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "nconn = 42\nhostname = \"web-1\"\nlistener.addr.port = 80\n"
    );
}

#[test]
fn exec_renders_aggregates_braced() {
    let output = dbgkit()
        .args([
            "exec",
            "--snapshot",
            fixture_path().to_str().unwrap(),
            "dm ports, uptime",
        ])
        .output()
        .expect("dbgkit exec");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "ports = {80, 443}\nuptime = 3600.5\n"
    );
}

// ---------------------------------------------------------------------------
// exec: a bad expression marks its own line; the batch still exits 0
// ---------------------------------------------------------------------------

#[test]
fn exec_bad_expression_reports_inline() {
    let output = dbgkit()
        .args([
            "exec",
            "--snapshot",
            fixture_path().to_str().unwrap(),
            "dm nconn, ghost, listener.stats",
        ])
        .output()
        .expect("dbgkit exec");

    assert!(output.status.success(), "dm never aborts on expression failures");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "nconn = 42\nghost = <error>\nlistener.stats = <error>\n"
    );
}

// ---------------------------------------------------------------------------
// exec: mbr field selection and default listing
// ---------------------------------------------------------------------------

#[test]
fn exec_mbr_requested_fields() {
    let output = dbgkit()
        .args([
            "exec",
            "--snapshot",
            fixture_path().to_str().unwrap(),
            "mbr listener fd backlog",
        ])
        .output()
        .expect("dbgkit exec");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "fd = 7\nbacklog = 128\n"
    );
}

#[test]
fn exec_mbr_lists_all_fields_by_default() {
    let output = dbgkit()
        .args([
            "exec",
            "--snapshot",
            fixture_path().to_str().unwrap(),
            "mbr listener",
        ])
        .output()
        .expect("dbgkit exec");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "fd = 7\nbacklog = 128\naddr = {host = \"0.0.0.0\", port = 80}\nstats = <error>\n"
    );
}

// ---------------------------------------------------------------------------
// exec: command-level failures stop the batch and set the exit code
// ---------------------------------------------------------------------------

#[test]
fn exec_usage_error_stops_the_batch() {
    let output = dbgkit()
        .args([
            "exec",
            "--snapshot",
            fixture_path().to_str().unwrap(),
            "mbr",
            "dm nconn",
        ])
        .output()
        .expect("dbgkit exec");

    assert_eq!(output.status.code(), Some(EXIT_COMMAND_FAILED as i32));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Usage: mbr <obj> [field1 field2 ...]\n",
        "the second line must not run"
    );
}

#[test]
fn exec_unknown_command_fails() {
    let output = dbgkit()
        .args([
            "exec",
            "--snapshot",
            fixture_path().to_str().unwrap(),
            "pq nconn",
        ])
        .output()
        .expect("dbgkit exec");

    assert_eq!(output.status.code(), Some(EXIT_COMMAND_FAILED as i32));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("undefined command: \"pq\""), "got: {}", stdout);
}

#[test]
fn exec_mbr_eval_failure_aborts() {
    let output = dbgkit()
        .args([
            "exec",
            "--snapshot",
            fixture_path().to_str().unwrap(),
            "mbr ghost fd",
        ])
        .output()
        .expect("dbgkit exec");

    assert_eq!(output.status.code(), Some(EXIT_COMMAND_FAILED as i32));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cannot evaluate \"ghost\""), "got: {}", stdout);
}

// ---------------------------------------------------------------------------
// exec: snapshot problems are CLI errors on stderr
// ---------------------------------------------------------------------------

#[test]
fn exec_missing_snapshot_fails() {
    let output = dbgkit()
        .args(["exec", "--snapshot", "/nonexistent/cap.json", "dm x"])
        .output()
        .expect("dbgkit exec");

    assert_eq!(output.status.code(), Some(EXIT_SNAPSHOT_UNREADABLE as i32));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: cannot load snapshot"), "got: {}", stderr);
    assert!(stderr.contains("hint:"), "got: {}", stderr);
}

#[test]
fn exec_malformed_snapshot_fails() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("garbage.json");
    std::fs::write(&path, "not a capture").expect("write garbage file");

    let output = dbgkit()
        .args(["exec", "--snapshot", path.to_str().unwrap(), "dm x"])
        .output()
        .expect("dbgkit exec");

    assert_eq!(output.status.code(), Some(EXIT_SNAPSHOT_UNREADABLE as i32));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: cannot load snapshot"), "got: {}", stderr);
}

#[test]
fn exec_snapshot_from_environment() {
    let output = dbgkit()
        .env("DBGKIT_SNAPSHOT", fixture_path())
        .args(["exec", "dm nconn"])
        .output()
        .expect("dbgkit exec");

    assert!(output.status.success(), "stderr: {}",
        String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "nconn = 42\n");
}

// ---------------------------------------------------------------------------
// list-commands
// ---------------------------------------------------------------------------

#[test]
fn list_commands_shows_registered() {
    let output = dbgkit()
        .args(["list-commands"])
        .output()
        .expect("dbgkit list-commands");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dm"), "got: {}", stdout);
    assert!(stdout.contains("mbr"), "got: {}", stdout);
    assert!(stdout.contains("data"), "category column, got: {}", stdout);
    assert!(stdout.contains("user"), "category column, got: {}", stdout);
}

#[test]
fn no_subcommand_prints_usage() {
    let output = dbgkit().output().expect("dbgkit");

    assert_eq!(output.status.code(), Some(EXIT_SUCCESS as i32));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: dbgkit"), "got: {}", stderr);
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let output = dbgkit()
        .args(["exec", "--nope", "dm x"])
        .output()
        .expect("dbgkit exec --nope");

    // clap renders the message and exits 2 on its own
    assert_eq!(output.status.code(), Some(EXIT_USAGE as i32));
}

// ---------------------------------------------------------------------------
// repl: piped stdin runs lines without a terminal
// ---------------------------------------------------------------------------

fn repl_with_input(input: &str) -> std::process::Output {
    let mut child = dbgkit()
        .args(["repl", "--snapshot", fixture_path().to_str().unwrap()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn dbgkit repl");
    child
        .stdin
        .as_mut()
        .expect("child stdin")
        .write_all(input.as_bytes())
        .expect("write to child stdin");
    child.wait_with_output().expect("wait for dbgkit repl")
}

#[test]
fn repl_piped_lines_execute() {
    let output = repl_with_input("dm nconn\nbogus\nmbr listener fd\n");

    assert!(output.status.success(), "stderr: {}",
        String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "nconn = 42\nundefined command: \"bogus\"\nfd = 7\n",
        "errors print inline and the console keeps going"
    );
}

#[test]
fn repl_piped_quit_stops() {
    let output = repl_with_input("dm nconn\nquit\ndm uptime\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("nconn = 42"), "got: {}", stdout);
    assert!(!stdout.contains("uptime"), "quit must stop the console, got: {}", stdout);
}

#[test]
fn repl_piped_help_lists_commands() {
    let output = repl_with_input("help\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dm"), "got: {}", stdout);
    assert!(stdout.contains("mbr"), "got: {}", stdout);
    assert!(stdout.contains("console words"), "got: {}", stdout);
}
