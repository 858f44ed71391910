//! `rnlink config` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::project::ProjectContext;

/// Execute the `config` command: print the resolved project as pretty JSON.
///
/// # Errors
///
/// Returns an error string if resolution or serialization fails.
pub fn run_with_context(ctx: &ServiceContext, root: &Path) -> Result<(), String> {
    let project = ProjectContext::load(ctx, root).map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(&project)
        .map_err(|e| format!("Failed to serialize project configuration: {e}"))?;
    println!("{json}");
    Ok(())
}
