use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

const BIN: &str = env!("CARGO_BIN_EXE_streamlog");

fn write_script(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp script");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp script");
    file
}

fn run_with_stdin(input: &str) -> Output {
    let mut child = Command::new(BIN)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env_remove("RUST_LOG")
        .spawn()
        .expect("Failed to spawn binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for binary")
}

#[test]
fn test_runs_script_file() {
    let script = write_script("XADD s a 1\nXADD s b 2\nXLEN s\nXRANGE s 1 +\n");

    let output = Command::new(BIN)
        .arg(script.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute process");

    assert!(output.status.success(), "binary failed: {output:?}");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "0\n1\n2\n1) 1\n\t1) b:2\n\n"
    );
}

#[test]
fn test_reads_commands_from_stdin() {
    let output = run_with_stdin("XADD logs msg \"hello world\"\nXREAD STREAMS logs 0\n");

    assert!(output.status.success(), "binary failed: {output:?}");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "0\n1) \"logs\"\n\t0) 0\n\t\t1) msg:hello world\n"
    );
}

#[test]
fn test_command_errors_go_to_stderr_and_exit_cleanly() {
    let output = run_with_stdin("XBOGUS\nXLEN s\n");

    assert!(output.status.success(), "binary failed: {output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("(error) Unknown command: XBOGUS"),
        "Unexpected stderr: {stderr:?}"
    );
}

#[test]
fn test_missing_script_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("does-not-exist.txt");

    let output = Command::new(BIN)
        .arg(&missing)
        .output()
        .expect("Failed to execute process");

    assert!(!output.status.success(), "expected a failure exit status");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("cannot open script"),
        "Unexpected error message: {stderr:?}"
    );
}

#[test]
fn test_debug_logging_stays_off_stdout() {
    let script = write_script("XADD s k v\nXTRIM s MAXLEN 0\n");

    let output = Command::new(BIN)
        .arg(script.path())
        .args(["--log-level", "debug"])
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute process");

    assert!(output.status.success(), "binary failed: {output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0\n1\n");
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("trimmed stream"),
        "expected debug logs on stderr"
    );
}
