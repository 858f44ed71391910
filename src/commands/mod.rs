//! Command dispatch and handlers.

pub mod config;
pub mod link;

use std::env;
use std::path::{self, Path};

use crate::cli::{Cli, Command};
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the project root cannot be determined or the
/// selected command handler fails. A relative `--root` is resolved against the current directory.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let root = match &cli.root {
        Some(root) => path::absolute(root)
            .map_err(|e| format!("Failed to resolve project root {}: {e}", root.display()))?,
        None => env::current_dir()
            .map_err(|e| format!("Failed to determine the current directory: {e}"))?,
    };
    let ctx = ServiceContext::live(&root);
    dispatch_with_context(&cli.command, &ctx, &root)
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    root: &Path,
) -> Result<(), String> {
    match command {
        Command::Link { package, platforms } => {
            link::run_with_context(ctx, root, package.as_deref(), platforms.as_deref())
        }
        Command::Config => config::run_with_context(ctx, root),
    }
}
