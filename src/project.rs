//! Process-wide project context: resolved config, platforms and dependencies.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::config::{
    CommandSpec, ConfigResolver, DependencyConfig, PlatformModule, ProjectConfig, ResolveError,
};
use crate::context::ServiceContext;

/// Platforms available to link against, keyed by platform name.
pub type PlatformMap = BTreeMap<String, PlatformModule>;

/// Platforms every project supports without any configuration.
pub const BUILTIN_PLATFORMS: [&str; 2] = ["ios", "android"];

/// An installed dependency together with its validated configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dependency {
    /// Package name.
    pub name: String,
    /// Directory the package is installed in.
    pub root: PathBuf,
    /// Validated configuration.
    #[serde(flatten)]
    pub config: DependencyConfig,
}

impl Dependency {
    /// Returns the command configured for hook `name`, if any.
    #[must_use]
    pub fn hook(&self, name: &str) -> Option<&CommandSpec> {
        self.config.dependency.hook(name)
    }

    /// Returns the assets this dependency declares.
    #[must_use]
    pub fn assets(&self) -> &[String] {
        &self.config.dependency.assets
    }
}

/// Everything a command needs to know about the project it runs in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectContext {
    /// Project root directory.
    pub root: PathBuf,
    /// Resolved project configuration.
    pub project: ProjectConfig,
    /// Platforms available to the project.
    pub platforms: PlatformMap,
    /// Installed dependencies keyed by package name.
    pub dependencies: BTreeMap<String, Dependency>,
}

impl ProjectContext {
    /// Resolves the project at `root` and every dependency installed in it.
    ///
    /// Only installed packages become dependencies. One listed under the
    /// project configuration's `dependencies` uses that entry as is; its own
    /// files are not read. Entries for packages that are not installed are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns the first resolution failure, unchanged.
    pub fn load(ctx: &ServiceContext, root: &Path) -> Result<Self, ResolveError> {
        let resolver = ConfigResolver::new(ctx, root);
        let project = resolver.resolve_project_config()?;
        let installed =
            ctx.packages.installed(root).map_err(|e| ResolveError::Packages(e.to_string()))?;

        let mut dependencies = BTreeMap::new();
        for package in installed {
            let config = if let Some(declared) = project.dependencies.get(&package.name) {
                tracing::debug!(package = %package.name, "Using configuration declared by the project");
                declared.clone()
            } else {
                resolver.resolve_dependency(&package.root)?
            };
            dependencies.insert(
                package.name.clone(),
                Dependency { name: package.name, root: package.root, config },
            );
        }

        let platforms = collect_platforms(&project, dependencies.values());
        Ok(Self { root: root.to_path_buf(), project, platforms, dependencies })
    }
}

/// Built-in platforms, overlaid by project settings, overlaid by dependency-provided platforms.
#[must_use]
pub fn collect_platforms<'a>(
    project: &ProjectConfig,
    dependencies: impl IntoIterator<Item = &'a Dependency>,
) -> PlatformMap {
    let mut platforms: PlatformMap = BUILTIN_PLATFORMS
        .iter()
        .map(|name| ((*name).to_string(), Value::Object(serde_json::Map::new())))
        .collect();
    for (name, settings) in &project.platforms {
        platforms.insert(name.clone(), Value::Object(settings.clone()));
    }
    for dependency in dependencies {
        if let Some(provided) = &dependency.config.platforms {
            for (name, module) in provided {
                platforms.insert(name.clone(), module.clone());
            }
        }
    }
    platforms
}
