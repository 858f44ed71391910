//! The single-dependency link pipeline.
//!
//! Four steps run strictly in order: `prelink` hook, native linking,
//! `postlink` hook, asset linking. The first failure stops the pipeline and is
//! wrapped once into [`LinkError::Pipeline`]. Completed steps are not undone.

use std::fmt;

use super::{link_all, normalize_package_name, HookCommand, LinkError};
use crate::context::ServiceContext;
use crate::ports::PortError;
use crate::project::{Dependency, PlatformMap, ProjectContext};

/// One step of the link pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The dependency's `prelink` hook.
    Prelink,
    /// Native-code linking.
    NativeLink,
    /// The dependency's `postlink` hook.
    Postlink,
    /// Asset linking.
    AssetLink,
}

impl Stage {
    /// Execution order.
    pub const ORDER: [Self; 4] = [Self::Prelink, Self::NativeLink, Self::Postlink, Self::AssetLink];

    /// Stable name used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prelink => "prelink",
            Self::NativeLink => "native-link",
            Self::Postlink => "postlink",
            Self::AssetLink => "asset-link",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keeps only the platforms named in `filter`; no filter keeps everything.
#[must_use]
pub fn filter_platforms(platforms: &PlatformMap, filter: Option<&[String]>) -> PlatformMap {
    let Some(names) = filter else {
        return platforms.clone();
    };
    platforms
        .iter()
        .filter(|(name, _)| names.iter().any(|wanted| wanted == *name))
        .map(|(name, module)| (name.clone(), module.clone()))
        .collect()
}

/// Links dependencies of one project.
pub struct LinkPipeline<'a> {
    ctx: &'a ServiceContext,
    project: &'a ProjectContext,
}

impl<'a> LinkPipeline<'a> {
    /// Creates a pipeline over the given ports and project.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, project: &'a ProjectContext) -> Self {
        Self { ctx, project }
    }

    /// Links the package named by `raw_package_name`, or every dependency when it is `None`.
    ///
    /// A trailing `@version` or `@tag` on the name is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::UnknownDependency`] before running anything if the
    /// package is not a dependency, or the wrapped failure of the first step
    /// that failed.
    pub async fn run(
        &self,
        raw_package_name: Option<&str>,
        platform_filter: Option<&[String]>,
    ) -> Result<(), LinkError> {
        let platforms = filter_platforms(&self.project.platforms, platform_filter);

        let Some(raw_package_name) = raw_package_name else {
            tracing::debug!("No package name provided, will attempt to link all possible packages.");
            return link_all(self.ctx, self.project, &platforms).await;
        };

        let package_name = normalize_package_name(raw_package_name);
        let dependency = self
            .project
            .dependencies
            .get(package_name)
            .ok_or_else(|| LinkError::UnknownDependency { name: package_name.to_string() })?;

        tracing::debug!(package = raw_package_name, "Package to link");
        self.link_dependency(&platforms, dependency).await
    }

    /// Runs the four steps for `dependency` against `platforms`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Pipeline`] carrying the first failing step's message.
    pub async fn link_dependency(
        &self,
        platforms: &PlatformMap,
        dependency: &Dependency,
    ) -> Result<(), LinkError> {
        for stage in Stage::ORDER {
            tracing::debug!(package = %dependency.name, %stage, "Running link step");
            self.run_stage(stage, platforms, dependency)
                .await
                .map_err(|e| LinkError::Pipeline { stage, reason: e.to_string() })?;
        }
        Ok(())
    }

    async fn run_stage(
        &self,
        stage: Stage,
        platforms: &PlatformMap,
        dependency: &Dependency,
    ) -> Result<(), PortError> {
        let project = &self.project.project;
        match stage {
            Stage::Prelink => {
                HookCommand::from(dependency.hook("prelink")).run(self.ctx.hooks.as_ref()).await
            }
            Stage::NativeLink => self.ctx.native.link_dependency(platforms, project, dependency).await,
            Stage::Postlink => {
                HookCommand::from(dependency.hook("postlink")).run(self.ctx.hooks.as_ref()).await
            }
            Stage::AssetLink => {
                self.ctx.assets.link_assets(platforms, project, dependency.assets()).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::fakes::{dependency, project, FakePorts};

    #[test]
    fn filter_keeps_only_named_platforms() {
        let project = project(Vec::new());

        let filtered = filter_platforms(&project.platforms, Some(&["ios".to_string()]));
        assert_eq!(filtered.keys().collect::<Vec<_>>(), vec!["ios"]);

        let unknown = filter_platforms(&project.platforms, Some(&["windows".to_string()]));
        assert!(unknown.is_empty());

        let unfiltered = filter_platforms(&project.platforms, None);
        assert_eq!(unfiltered, project.platforms);
    }

    #[tokio::test]
    async fn runs_all_steps_in_order() {
        let ports = FakePorts::default();
        let ctx = ports.context();
        let project = project(vec![dependency("lib", Some("pre"), Some("post"), &["a.ttf"])]);

        LinkPipeline::new(&ctx, &project).run(Some("lib"), None).await.unwrap();

        assert_eq!(
            ports.calls(),
            vec![
                "hook:pre",
                "native:lib:android,ios",
                "hook:post",
                "assets:android,ios:a.ttf",
            ]
        );
    }

    #[tokio::test]
    async fn absent_hooks_are_skipped() {
        let ports = FakePorts::default();
        let ctx = ports.context();
        let project = project(vec![dependency("lib", None, None, &[])]);

        LinkPipeline::new(&ctx, &project).run(Some("lib"), None).await.unwrap();

        assert_eq!(ports.calls(), vec!["native:lib:android,ios", "assets:android,ios:"]);
    }

    #[tokio::test]
    async fn version_suffix_and_platform_filter_apply() {
        let ports = FakePorts::default();
        let ctx = ports.context();
        let project = project(vec![dependency("lib", None, None, &[])]);

        LinkPipeline::new(&ctx, &project)
            .run(Some("lib@1.2.3"), Some(&["ios".to_string()]))
            .await
            .unwrap();

        assert_eq!(ports.calls(), vec!["native:lib:ios", "assets:ios:"]);
    }

    #[tokio::test]
    async fn unknown_dependency_runs_nothing() {
        let ports = FakePorts::default();
        let ctx = ports.context();
        let project = project(vec![dependency("lib", Some("pre"), Some("post"), &[])]);

        let err = LinkPipeline::new(&ctx, &project).run(Some("other@latest"), None).await.unwrap_err();

        assert!(matches!(err, LinkError::UnknownDependency { ref name } if name == "other"));
        assert!(err.to_string().contains("Make sure that the package you are trying to link"));
        assert!(ports.calls().is_empty());
    }

    #[tokio::test]
    async fn failed_prelink_stops_the_pipeline() {
        let ports = FakePorts { failing_hook: Some("pre".into()), ..FakePorts::default() };
        let ctx = ports.context();
        let project = project(vec![dependency("lib", Some("pre"), Some("post"), &["a.ttf"])]);

        let err = LinkPipeline::new(&ctx, &project).run(Some("lib"), None).await.unwrap_err();

        assert!(matches!(err, LinkError::Pipeline { stage: Stage::Prelink, .. }));
        let message = err.to_string();
        assert!(message.contains("Something went wrong while linking"));
        assert!(message.contains("hook \"pre\" exploded"));
        assert!(message.contains(crate::link::error::ISSUES_URL));
        assert_eq!(ports.calls(), vec!["hook:pre"]);
    }

    #[tokio::test]
    async fn failed_native_link_skips_later_steps() {
        let ports = FakePorts { fail_native: true, ..FakePorts::default() };
        let ctx = ports.context();
        let project = project(vec![dependency("lib", Some("pre"), Some("post"), &["a.ttf"])]);

        let err = LinkPipeline::new(&ctx, &project).run(Some("lib"), None).await.unwrap_err();

        assert!(matches!(err, LinkError::Pipeline { stage: Stage::NativeLink, .. }));
        assert_eq!(ports.calls(), vec!["hook:pre", "native:lib:android,ios"]);
    }

    #[tokio::test]
    async fn failed_asset_link_is_wrapped() {
        let ports = FakePorts { fail_assets: true, ..FakePorts::default() };
        let ctx = ports.context();
        let project = project(vec![dependency("lib", None, Some("post"), &["a.ttf"])]);

        let err = LinkPipeline::new(&ctx, &project).run(Some("lib"), None).await.unwrap_err();

        assert!(matches!(err, LinkError::Pipeline { stage: Stage::AssetLink, .. }));
        assert!(err.to_string().contains("asset linking failed"));
    }
}
