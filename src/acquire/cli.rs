//! External command execution.
//!
//! Runs the discovery script and similar helpers, with a bounded runtime and
//! bounded output.

use super::AcquireError;
use colored::Colorize;
use regex::Regex;
use std::process::{Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Stdout larger than this aborts the command.
const MAX_OUTPUT_BYTES: usize = 500_000;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run a shell command and return its stdout.
///
/// The command string is split on spaces, with quoted substrings preserved.
/// The child is killed once `timeout` expires.
///
/// # Arguments
/// * `cmd` - The command string to execute
/// * `timeout` - Wall-clock bound on the child's runtime
///
/// # Returns
/// * `Ok(String)` - The stdout output on success
/// * `Err(AcquireError::SourceUnavailable)` - If the command cannot be
///   spawned, fails, times out, or produces too much output
pub fn run(cmd: &str, timeout: Duration) -> Result<String, AcquireError> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let argv: Vec<&str> = split_and_strip(cmd);
    log::trace!("split argv={:?}", argv);
    if argv.is_empty() || argv[0].is_empty() {
        return Err(AcquireError::SourceUnavailable(format!(
            "empty command: {cmd:?}"
        )));
    }

    // Build command and add args
    let mut command = Command::new(argv[0]);
    for arg in argv.iter().skip(1) {
        command.arg(arg);
    }
    command.stdout(Stdio::piped()).stderr(Stdio::piped());

    let mut child = command.spawn().map_err(|e| {
        log::error!("Command spawn failed: {}", e);
        AcquireError::SourceUnavailable(format!("failed to start {}: {e}", argv[0]))
    })?;

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(_)) => break,
            Ok(None) => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    log::warn!(
                        "{timed_out} after {secs}s: {cmd}",
                        timed_out = "timed out".on_red(),
                        secs = timeout.as_secs(),
                        cmd = cmd.on_blue()
                    );
                    return Err(AcquireError::SourceUnavailable(format!(
                        "command timed out after {}s: {cmd}",
                        timeout.as_secs()
                    )));
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Err(e) => {
                return Err(AcquireError::SourceUnavailable(format!(
                    "failed waiting for {cmd}: {e}"
                )));
            }
        }
    }

    let output = child
        .wait_with_output()
        .map_err(|e| AcquireError::SourceUnavailable(format!("failed reading output: {e}")))?;

    if output.status.success() {
        log::debug!("Success cmd: {cmd}");
        log::debug!("Success output.stdout.len(): {}", output.stdout.len());
        log::debug!("Success output.status.code(): {:?}", output.status.code());

        if output.stdout.len() > MAX_OUTPUT_BYTES {
            return Err(AcquireError::SourceUnavailable(format!(
                "response too large: {} bytes for command: {:?}",
                output.stdout.len(),
                argv
            )));
        }
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(AcquireError::SourceUnavailable(format!(
            "command failed: {}",
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8(output.stdout)
        .map_err(|e| AcquireError::SourceUnavailable(format!("invalid UTF-8 output: {e}")))?;

    Ok(stdout)
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}
