use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local};
use parrot_core::current_local_time;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;

use crate::error::RelayError;

pub const DEFAULT_RELAY_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
/// Captured outcome of one subordinate invocation.
pub struct ExecutionResult {
    exit_code: i32,
    stdout: String,
    stderr: String,
    timed_out: bool,
    timestamp: DateTime<Local>,
}

impl ExecutionResult {
    pub fn new(
        exit_code: i32,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
        timed_out: bool,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            timed_out,
            timestamp,
        }
    }

    /// A finished run stamped with the current wall-clock time.
    pub fn completed(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::new(exit_code, stdout, stderr, false, current_local_time())
    }

    /// A run that was killed at the budget; no output is retained.
    pub fn timed_out() -> Self {
        Self::new(-1, String::new(), String::new(), true, current_local_time())
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    pub fn is_timed_out(&self) -> bool {
        self.timed_out
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }

    pub fn success(&self) -> bool {
        !self.timed_out && self.exit_code == 0
    }
}

#[async_trait]
/// Trait contract for running the parameter printer with relay arguments.
pub trait ParamsInvoker: Send + Sync {
    /// Runs the printer. Non-zero exits are results, not errors.
    ///
    /// [`ProcessInvoker`] reports timeouts and non-zero exits through the
    /// returned [`ExecutionResult`]. Invokers that cannot produce a result,
    /// such as a remote runner that only sees a failure status, return
    /// [`RelayError::SubordinateTimeout`] or [`RelayError::SubordinateFault`]
    /// instead; the relay renders both forms identically.
    async fn invoke(&self, args: &[String]) -> Result<ExecutionResult, RelayError>;

    /// Shell-quoted command line shown in transcript messages.
    fn command_line(&self, args: &[String]) -> String;

    fn timeout(&self) -> Duration;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where the printer lives and how long a run may take.
pub struct RelayConfig {
    pub program: PathBuf,
    pub launcher: Vec<String>,
    pub timeout: Duration,
}

impl RelayConfig {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            launcher: Vec::new(),
            timeout: DEFAULT_RELAY_TIMEOUT,
        }
    }

    /// Prefix words run before the program, e.g. an interpreter.
    pub fn with_launcher(mut self, launcher: Vec<String>) -> Self {
        self.launcher = launcher;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Clone)]
/// Runs the printer as a child process via `tokio::process`.
pub struct ProcessInvoker {
    config: RelayConfig,
}

impl ProcessInvoker {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    fn build_command(&self, args: &[String]) -> Command {
        let mut command = match self.config.launcher.split_first() {
            Some((launcher, launcher_args)) => {
                let mut command = Command::new(launcher);
                command.args(launcher_args).arg(&self.config.program);
                command
            }
            None => Command::new(&self.config.program),
        };
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }

    fn spawn_target(&self) -> &Path {
        match self.config.launcher.first() {
            Some(launcher) => Path::new(launcher),
            None => self.config.program.as_path(),
        }
    }
}

#[async_trait]
impl ParamsInvoker for ProcessInvoker {
    async fn invoke(&self, args: &[String]) -> Result<ExecutionResult, RelayError> {
        if names_a_path(&self.config.program) && !self.config.program.exists() {
            return Err(RelayError::SubordinateNotFound {
                path: self.config.program.clone(),
            });
        }

        let mut child = self
            .build_command(args)
            .spawn()
            .map_err(|error| match error.kind() {
                ErrorKind::NotFound => RelayError::SubordinateNotFound {
                    path: self.spawn_target().to_path_buf(),
                },
                _ => RelayError::Unexpected(format!(
                    "failed to spawn {}: {error}",
                    self.spawn_target().display()
                )),
            })?;
        tracing::debug!(
            pid = child.id().unwrap_or_default(),
            args = args.len(),
            "spawned parameter printer"
        );

        let mut stdout_task = drain_stream(child.stdout.take());
        let mut stderr_task = drain_stream(child.stderr.take());

        // The budget covers both the exit and the end of both streams.
        let run = tokio::time::timeout(self.config.timeout, async {
            let status = child.wait().await?;
            let stdout = (&mut stdout_task).await.unwrap_or_default();
            let stderr = (&mut stderr_task).await.unwrap_or_default();
            Ok::<_, std::io::Error>((status, stdout, stderr))
        })
        .await;

        match run {
            Ok(Ok((status, stdout, stderr))) => Ok(ExecutionResult::completed(
                exit_code_of(status),
                stdout,
                stderr,
            )),
            Ok(Err(error)) => {
                stdout_task.abort();
                stderr_task.abort();
                kill_and_reap(&mut child).await;
                Err(RelayError::Unexpected(format!(
                    "failed while waiting for {}: {error}",
                    self.config.program.display()
                )))
            }
            Err(_) => {
                stdout_task.abort();
                stderr_task.abort();
                kill_and_reap(&mut child).await;
                tracing::warn!(
                    timeout_ms = self.config.timeout.as_millis() as u64,
                    "parameter printer exceeded its budget"
                );
                Ok(ExecutionResult::timed_out())
            }
        }
    }

    fn command_line(&self, args: &[String]) -> String {
        let program = self.config.program.display().to_string();
        let words = self
            .config
            .launcher
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(program.as_str()))
            .chain(args.iter().map(String::as_str));
        shell_words::join(words)
    }

    fn timeout(&self) -> Duration {
        self.config.timeout
    }
}

/// Bare names like `print-params` are left to the `PATH` lookup done at spawn.
fn names_a_path(program: &Path) -> bool {
    program.components().count() > 1 || program.is_absolute()
}

async fn kill_and_reap(child: &mut Child) {
    // `id()` is `None` once the child has been reaped.
    if child.id().is_none() {
        return;
    }
    if let Err(error) = child.kill().await {
        tracing::warn!(%error, "failed to kill parameter printer");
    }
}

fn drain_stream<R>(stream: Option<R>) -> JoinHandle<String>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let Some(mut stream) = stream else {
            return String::new();
        };
        let mut buffer = Vec::new();
        if let Err(error) = stream.read_to_end(&mut buffer).await {
            tracing::debug!(%error, "failed to drain child stream");
        }
        String::from_utf8_lossy(&buffer).into_owned()
    })
}

fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}
