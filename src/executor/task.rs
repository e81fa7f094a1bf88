//! Single run execution
//!
//! Invokes the target command once as a child process and classifies the
//! result.

use std::process::ExitStatus;
use std::time::Instant;
use tokio::process::Command;
use tracing::debug;

use crate::models::{CommandLine, RunOutcome};

/// Run the command once, capturing stdout and stderr.
///
/// Exit status 0 is a pass. A non-zero exit, termination by signal, or a
/// failure to start the process at all (missing executable, permission
/// denied) is a fail with the error detail recorded on the outcome.
pub async fn run_once(command: &CommandLine, run_index: usize) -> RunOutcome {
    debug!("run {} starting: {}", run_index, command);

    let start = Instant::now();
    let output = Command::new(command.program())
        .args(command.args())
        .output()
        .await;
    let duration_ms = start.elapsed().as_millis() as u64;

    match output {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

            if output.status.success() {
                RunOutcome::pass(run_index, duration_ms, stdout, stderr)
            } else {
                RunOutcome::fail(
                    run_index,
                    duration_ms,
                    describe_status(output.status),
                    stdout,
                    stderr,
                )
            }
        }
        Err(e) => RunOutcome::fail(
            run_index,
            duration_ms,
            format!("failed to start {}: {}", command.program(), e),
            String::new(),
            String::new(),
        ),
    }
}

fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit status {code}"),
        // No code means the child was killed by a signal.
        None => format!("terminated abnormally: {status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;

    #[tokio::test]
    async fn test_zero_exit_is_pass() {
        let cmd = CommandLine::parse("true").unwrap();
        let outcome = run_once(&cmd, 0).await;

        assert!(outcome.is_success());
        assert!(outcome.error.is_none());
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_fail() {
        let cmd = CommandLine::parse("false").unwrap();
        let outcome = run_once(&cmd, 1).await;

        assert!(!outcome.is_success());
        assert!(outcome.error.unwrap().contains("exit status 1"));
    }

    #[tokio::test]
    async fn test_stdout_is_captured() {
        let cmd = CommandLine::parse("echo hello world").unwrap();
        let outcome = run_once(&cmd, 2).await;

        assert!(outcome.is_success());
        assert_eq!(outcome.stdout, "hello world\n");
    }

    #[tokio::test]
    async fn test_spawn_failure_is_fail() {
        let cmd = CommandLine::parse("/no/such/executable-zzz").unwrap();
        let outcome = run_once(&cmd, 3).await;

        assert!(!outcome.is_success());
        assert!(outcome.error.unwrap().contains("failed to start"));
    }

    #[tokio::test]
    async fn test_stderr_and_exit_code_of_script() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("failing.sh");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "#!/bin/sh").unwrap();
        writeln!(file, "echo boom >&2").unwrap();
        writeln!(file, "exit 3").unwrap();
        drop(file);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

        let cmd = CommandLine::parse(path.to_str().unwrap()).unwrap();
        let outcome = run_once(&cmd, 4).await;

        assert!(!outcome.is_success());
        assert!(outcome.error.unwrap().contains("exit status 3"));
        assert_eq!(outcome.stderr, "boom\n");
    }
}
