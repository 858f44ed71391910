//! Optional hook commands as always-runnable steps.

use crate::config::CommandSpec;
use crate::ports::{HookExecutor, PortError};

/// A hook that is either configured or not. `Absent` runs as a successful no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookCommand<'a> {
    /// A configured command.
    Present(&'a str),
    /// Nothing configured.
    Absent,
}

impl<'a> From<Option<&'a CommandSpec>> for HookCommand<'a> {
    fn from(spec: Option<&'a CommandSpec>) -> Self {
        spec.map_or(Self::Absent, |command| Self::Present(command.as_str()))
    }
}

impl HookCommand<'_> {
    /// Runs the hook through `executor`, or succeeds immediately when absent.
    ///
    /// # Errors
    ///
    /// Returns the executor's failure for a present command.
    pub async fn run(self, executor: &dyn HookExecutor) -> Result<(), PortError> {
        match self {
            Self::Present(command) => executor.execute(command).await,
            Self::Absent => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::StepFuture;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingExecutor {
        commands: Mutex<Vec<String>>,
    }

    impl HookExecutor for RecordingExecutor {
        fn execute<'a>(&'a self, command: &'a str) -> StepFuture<'a> {
            self.commands.lock().unwrap().push(command.to_string());
            Box::pin(async { Ok(()) })
        }
    }

    #[tokio::test]
    async fn absent_hook_is_a_no_op() {
        let executor = RecordingExecutor::default();

        HookCommand::from(None::<&CommandSpec>).run(&executor).await.unwrap();

        assert!(executor.commands.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn present_hook_runs_its_command() {
        let executor = RecordingExecutor::default();
        let spec = "node prelink.js".to_string();

        HookCommand::from(Some(&spec)).run(&executor).await.unwrap();

        assert_eq!(*executor.commands.lock().unwrap(), vec!["node prelink.js".to_string()]);
    }
}
