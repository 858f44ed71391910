//! Live linkers that report what they wire into each platform.
//!
//! Native project files are not edited here; each step logs the platforms it
//! covers so a run can be audited.

use crate::config::ProjectConfig;
use crate::ports::{AssetLinker, NativeLinker, StepFuture};
use crate::project::{Dependency, PlatformMap};

/// Native linker that logs the per-platform configuration it would apply.
pub struct ReportingNativeLinker;

impl NativeLinker for ReportingNativeLinker {
    fn link_dependency<'a>(
        &'a self,
        platforms: &'a PlatformMap,
        _project: &'a ProjectConfig,
        dependency: &'a Dependency,
    ) -> StepFuture<'a> {
        Box::pin(async move {
            for platform in platforms.keys() {
                match dependency.config.dependency.platforms.get(platform) {
                    Some(Some(settings)) => tracing::info!(
                        package = %dependency.name,
                        platform = %platform,
                        keys = settings.len(),
                        "Linking native code"
                    ),
                    _ => tracing::debug!(
                        package = %dependency.name,
                        platform = %platform,
                        "No native configuration, skipping"
                    ),
                }
            }
            Ok(())
        })
    }
}

/// Asset linker that logs the assets it would copy per platform.
pub struct ReportingAssetLinker;

impl AssetLinker for ReportingAssetLinker {
    fn link_assets<'a>(
        &'a self,
        platforms: &'a PlatformMap,
        _project: &'a ProjectConfig,
        assets: &'a [String],
    ) -> StepFuture<'a> {
        Box::pin(async move {
            if assets.is_empty() {
                return Ok(());
            }
            for platform in platforms.keys() {
                tracing::info!(platform = %platform, count = assets.len(), "Linking assets");
            }
            Ok(())
        })
    }
}
