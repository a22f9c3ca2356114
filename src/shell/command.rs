//! Child process execution.

use crate::error::{EnsureError, Result};
use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Interval between `try_wait` polls while a child is running.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A program plus its arguments, run without a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Executable name or path.
    pub program: String,

    /// Arguments passed verbatim.
    pub args: Vec<String>,

    /// Kill the child after this long (None = wait forever).
    pub timeout: Option<Duration>,
}

impl Invocation {
    /// Create an invocation with no timeout.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            timeout: None,
        }
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Space-joined command line, for logs and error messages.
    pub fn display(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Execute an invocation, capturing stdout and stderr.
///
/// A non-zero exit is `Ok` with `success == false`. Spawn failures return
/// [`EnsureError::CommandLaunch`]; an expired timeout kills the child and
/// returns [`EnsureError::CommandTimedOut`].
pub fn execute(invocation: &Invocation) -> Result<CommandResult> {
    let start = Instant::now();
    let command_line = invocation.display();

    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    tracing::trace!("spawning: {}", command_line);

    let mut child = cmd.spawn().map_err(|e| EnsureError::CommandLaunch {
        command: command_line.clone(),
        message: e.to_string(),
    })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    // Drain both pipes off-thread so a verbose child never blocks on a full pipe.
    let stdout_handle = thread::spawn(move || read_all(stdout));
    let stderr_handle = thread::spawn(move || read_all(stderr));

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if let Some(timeout) = invocation.timeout {
                    if start.elapsed() > timeout {
                        let _ = child.kill();
                        let _ = child.wait();
                        // Grandchildren may still hold the pipes open, so the
                        // reader threads are detached rather than joined.
                        drop(stdout_handle);
                        drop(stderr_handle);
                        return Err(EnsureError::CommandTimedOut {
                            command: command_line,
                            secs: whole_secs(timeout),
                        });
                    }
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(e) => {
                let _ = child.kill();
                return Err(EnsureError::CommandLaunch {
                    command: command_line,
                    message: e.to_string(),
                });
            }
        }
    };

    let stdout = stdout_handle.join().unwrap_or_default();
    let stderr = stderr_handle.join().unwrap_or_default();
    let duration = start.elapsed();

    if status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Seconds in `timeout`, rounded up so sub-second limits never read as 0.
fn whole_secs(timeout: Duration) -> u64 {
    timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0)
}

fn read_all<R: Read>(pipe: Option<R>) -> String {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        let _ = pipe.read_to_end(&mut buf);
    }
    String::from_utf8_lossy(&buf).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str) -> Invocation {
        Invocation::new("sh", vec!["-c".to_string(), script.to_string()])
    }

    #[test]
    fn display_joins_program_and_args() {
        let inv = Invocation::new(
            "python3",
            vec!["-m".into(), "pip".into(), "install".into(), "numpy".into()],
        );
        assert_eq!(inv.display(), "python3 -m pip install numpy");
    }

    #[test]
    fn with_timeout_sets_timeout() {
        let inv = Invocation::new("true", vec![]).with_timeout(Duration::from_secs(5));
        assert_eq!(inv.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn missing_program_is_launch_error() {
        let inv = Invocation::new("pyensure-definitely-not-a-real-binary", vec![]);
        let err = execute(&inv).unwrap_err();
        assert!(matches!(err, EnsureError::CommandLaunch { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn execute_successful_command() {
        let result = execute(&sh("echo hello")).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_failing_command_captures_stderr() {
        let result = execute(&sh("echo broken >&2; exit 3")).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert!(result.stderr.contains("broken"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_kills_on_timeout() {
        let inv = sh("sleep 5").with_timeout(Duration::from_millis(200));
        let start = Instant::now();
        let err = execute(&inv).unwrap_err();
        assert!(matches!(err, EnsureError::CommandTimedOut { .. }));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn timeout_does_not_wait_for_grandchildren() {
        // The shell forks `sleep` instead of exec'ing it, so the pipes stay
        // open after the shell itself is killed.
        let inv = sh("sleep 5; true").with_timeout(Duration::from_millis(200));
        let start = Instant::now();
        let err = execute(&inv).unwrap_err();
        assert!(matches!(err, EnsureError::CommandTimedOut { .. }));
        assert!(start.elapsed() < Duration::from_secs(3));
    }

    #[cfg(unix)]
    #[test]
    fn sub_second_timeout_reports_one_second() {
        let inv = sh("sleep 5").with_timeout(Duration::from_millis(200));
        match execute(&inv) {
            Err(EnsureError::CommandTimedOut { secs, .. }) => assert_eq!(secs, 1),
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[test]
    fn whole_secs_rounds_up() {
        assert_eq!(whole_secs(Duration::from_secs(120)), 120);
        assert_eq!(whole_secs(Duration::from_millis(200)), 1);
        assert_eq!(whole_secs(Duration::from_millis(1500)), 2);
    }

    #[cfg(unix)]
    #[test]
    fn command_result_tracks_duration() {
        let result = execute(&sh("echo fast")).unwrap();
        assert!(result.duration.as_millis() < 5000);
    }
}
