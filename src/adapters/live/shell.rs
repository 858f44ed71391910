//! Live hook executor using `tokio::process`.

use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::ports::{HookExecutor, PortError, StepFuture};

/// Runs hook commands through the system shell with inherited stdio.
pub struct LiveHookExecutor {
    cwd: PathBuf,
}

impl LiveHookExecutor {
    /// Creates an executor that runs commands from `cwd`.
    #[must_use]
    pub fn new(cwd: &Path) -> Self {
        Self { cwd: cwd.to_path_buf() }
    }
}

impl HookExecutor for LiveHookExecutor {
    fn execute<'a>(&'a self, command: &'a str) -> StepFuture<'a> {
        Box::pin(async move {
            tracing::debug!(command, cwd = %self.cwd.display(), "Running hook");
            let status = Command::new("sh")
                .arg("-c")
                .arg(command)
                .current_dir(&self.cwd)
                .status()
                .await
                .map_err(|e| -> PortError { format!("Failed to spawn \"{command}\": {e}").into() })?;

            if !status.success() {
                return Err(format!("Error occurred during executing \"{command}\" command").into());
            }
            Ok(())
        })
    }
}
