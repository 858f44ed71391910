//! Linking every dependency of the project.

use super::{LinkError, LinkPipeline, Stage};
use crate::context::ServiceContext;
use crate::project::{PlatformMap, ProjectContext};

/// Links every dependency in name order, then the project's own assets.
///
/// A failing dependency is logged and does not stop the others.
///
/// # Errors
///
/// Returns [`LinkError::LinkAll`] naming every dependency that failed, along
/// with any project asset failure. When only the project's assets fail,
/// returns [`LinkError::Pipeline`].
pub async fn link_all(
    ctx: &ServiceContext,
    project: &ProjectContext,
    platforms: &PlatformMap,
) -> Result<(), LinkError> {
    let pipeline = LinkPipeline::new(ctx, project);
    let mut failed = Vec::new();

    for (name, dependency) in &project.dependencies {
        tracing::info!(package = %name, "Linking dependency");
        if let Err(err) = pipeline.link_dependency(platforms, dependency).await {
            tracing::error!(package = %name, "{err}");
            failed.push(name.clone());
        }
    }

    let assets = ctx.assets.link_assets(platforms, &project.project, &project.project.assets).await;

    match (assets, failed.is_empty()) {
        (Ok(()), true) => Ok(()),
        (Err(e), true) => Err(LinkError::Pipeline { stage: Stage::AssetLink, reason: e.to_string() }),
        (assets, false) => {
            Err(LinkError::LinkAll { failed, assets: assets.err().map(|e| e.to_string()) })
        }
    }
}
