//! `rnlink link` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::link::LinkPipeline;
use crate::project::ProjectContext;

/// Execute the `link` command against the project at `root`.
///
/// Platform names are matched case-insensitively.
///
/// # Errors
///
/// Returns an error string if the project cannot be resolved, the package is
/// unknown, or a link step fails.
pub fn run_with_context(
    ctx: &ServiceContext,
    root: &Path,
    package: Option<&str>,
    platforms: Option<&[String]>,
) -> Result<(), String> {
    let project = ProjectContext::load(ctx, root).map_err(|e| e.to_string())?;
    let platforms: Option<Vec<String>> =
        platforms.map(|names| names.iter().map(|name| name.trim().to_lowercase()).collect());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;

    runtime
        .block_on(LinkPipeline::new(ctx, &project).run(package, platforms.as_deref()))
        .map_err(|e| e.to_string())
}
