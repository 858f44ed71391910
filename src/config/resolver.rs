//! Produces validated project and dependency configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::discovery::{read_manifest, ConfigDiscovery, DiscoveredConfig, SearchOptions, MANIFEST};
use super::legacy::{self, LegacyDependencyDescriptor, LEGACY_KEY};
use super::{DependencyConfig, PlatformModule, ProjectConfig, ResolveError};
use crate::context::ServiceContext;

/// Resolves configuration for one project.
///
/// All reads go through `ctx.fs`; nothing is written. Validation failures are
/// returned unchanged as [`ResolveError::Validation`].
pub struct ConfigResolver<'a> {
    ctx: &'a ServiceContext,
    project_root: PathBuf,
}

impl<'a> ConfigResolver<'a> {
    /// Creates a resolver for the project rooted at `project_root`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, project_root: &Path) -> Self {
        Self { ctx, project_root: project_root.to_path_buf() }
    }

    /// Resolves the project configuration.
    ///
    /// Searches from the project root upward with no boundary. A missing
    /// configuration counts as an empty one. When the configuration does not
    /// set `reactNativePath`, the locator fills it in.
    ///
    /// # Errors
    ///
    /// Returns an error if a candidate file is unreadable, validation fails,
    /// or `react-native` cannot be located.
    pub fn resolve_project_config(&self) -> Result<ProjectConfig, ResolveError> {
        let found = ConfigDiscovery::new(self.ctx.fs.as_ref())
            .search(SearchOptions { search_from: &self.project_root, stop_at: None })?;
        let raw = found.map_or_else(|| Value::Object(Map::new()), |found| found.raw);

        let user = self.ctx.schema.validate_project(Some(&raw))?;

        let react_native_path = match &user.react_native_path {
            Some(path) => path.clone(),
            None => self
                .ctx
                .react_native
                .locate(&self.project_root)
                .map_err(|e| ResolveError::ReactNativePath(e.to_string()))?,
        };
        Ok(ProjectConfig::from_user(user, react_native_path))
    }

    /// Resolves a dependency's own configuration, never looking above `root`.
    ///
    /// When nothing is found the schema decides what an absent configuration means.
    ///
    /// # Errors
    ///
    /// Returns an error if a candidate file is unreadable or validation fails.
    pub fn resolve_dependency_config(&self, root: &Path) -> Result<DependencyConfig, ResolveError> {
        let found = self.discover_dependency(root)?;
        self.validate_dependency_source(found.as_ref())
    }

    /// Resolves the legacy `rnpm` descriptor from `<root>/package.json`.
    ///
    /// Returns `Ok(None)` when the manifest has no legacy descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest or the referenced platform definition
    /// cannot be read, or if the migrated configuration fails validation.
    pub fn resolve_legacy_dependency_config(
        &self,
        root: &Path,
    ) -> Result<Option<DependencyConfig>, ResolveError> {
        let manifest = read_manifest(self.ctx.fs.as_ref(), root)?;
        let raw = match manifest.get(LEGACY_KEY) {
            None | Some(Value::Null) => return Ok(None),
            Some(raw) => raw.clone(),
        };
        let descriptor: LegacyDependencyDescriptor =
            serde_json::from_value(raw).map_err(|e| ResolveError::Parse {
                path: root.join(MANIFEST),
                message: format!("invalid \"{LEGACY_KEY}\" entry: {e}"),
            })?;
        tracing::debug!(root = %root.display(), "Migrating legacy dependency configuration");

        let adapted = legacy::adapt(&descriptor);
        let mut config = self.ctx.schema.validate_dependency(Some(&adapted.config))?;
        if let Some(relative) = adapted.platform_module {
            config.platforms = Some(self.load_platform_module(&root.join(relative))?);
        }
        Ok(Some(config))
    }

    /// Resolves a dependency from whichever single source applies.
    ///
    /// A configuration file found within `root` wins and the legacy descriptor
    /// is then never read. Without one, the legacy descriptor is used if
    /// present; otherwise the absent configuration is validated. Sources are
    /// never merged.
    ///
    /// # Errors
    ///
    /// Returns the failure of whichever source was selected.
    pub fn resolve_dependency(&self, root: &Path) -> Result<DependencyConfig, ResolveError> {
        if let Some(found) = self.discover_dependency(root)? {
            return self.validate_dependency_source(Some(&found));
        }
        if let Some(config) = self.resolve_legacy_dependency_config(root)? {
            return Ok(config);
        }
        self.validate_dependency_source(None)
    }

    fn discover_dependency(&self, root: &Path) -> Result<Option<DiscoveredConfig>, ResolveError> {
        ConfigDiscovery::new(self.ctx.fs.as_ref())
            .search(SearchOptions { search_from: root, stop_at: Some(root) })
    }

    fn validate_dependency_source(
        &self,
        found: Option<&DiscoveredConfig>,
    ) -> Result<DependencyConfig, ResolveError> {
        self.ctx
            .schema
            .validate_dependency(found.map(|found| &found.raw))
            .map_err(ResolveError::from)
    }

    /// Loads a platform definition document. Its entries are not validated.
    fn load_platform_module(
        &self,
        path: &Path,
    ) -> Result<BTreeMap<String, PlatformModule>, ResolveError> {
        let contents = self
            .ctx
            .fs
            .read_to_string(path)
            .map_err(|e| ResolveError::Read { path: path.to_path_buf(), message: e.to_string() })?;
        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => Ok(map.into_iter().collect()),
            Ok(_) => Err(ResolveError::Parse {
                path: path.to_path_buf(),
                message: "platform definition must be an object".to_string(),
            }),
            Err(e) => Err(ResolveError::Parse { path: path.to_path_buf(), message: e.to_string() }),
        }
    }
}
