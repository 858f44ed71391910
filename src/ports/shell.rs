//! Hook executor port for running lifecycle commands.

use super::StepFuture;

/// Runs hook commands declared by dependencies.
pub trait HookExecutor: Send + Sync {
    /// Runs `command` to completion.
    ///
    /// The returned future fails if the command cannot be spawned or exits
    /// unsuccessfully.
    fn execute<'a>(&'a self, command: &'a str) -> StepFuture<'a>;
}
