use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Run the CLI binary with an isolated HOME for session storage.
pub fn run_cli(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fixadmin"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI with the given content piped to stdin.
#[allow(dead_code)]
pub fn run_cli_with_input(args: &[&str], home: &Path, input: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fixadmin"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.stdin(Stdio::piped());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn().expect("Failed to spawn CLI");
    child
        .stdin
        .as_mut()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write to stdin");

    child.wait_with_output().expect("Failed to wait for CLI")
}

/// Run the CLI and expect success.
#[allow(dead_code)]
pub fn run_cli_success(args: &[&str], home: &Path) -> String {
    let output = run_cli(args, home);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Path of the session record under an isolated HOME.
pub fn session_file(home: &Path) -> PathBuf {
    home.join("data").join("fixwell-admin").join("session.json")
}
