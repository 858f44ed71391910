//! Project and dependency configuration.
//!
//! Raw configuration is discovered on disk ([`discovery`]), migrated from the
//! legacy `rnpm` manifest key when needed ([`legacy`]), checked by a
//! [`schema::ConfigSchema`] and finally handed out by the [`ConfigResolver`].
//! Nothing outside this module ever sees unvalidated configuration.

pub mod discovery;
pub mod error;
pub mod legacy;
pub mod resolver;
pub mod schema;

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

pub use error::{FieldError, ResolveError, ValidationError};
pub use resolver::ConfigResolver;
pub use schema::{ConfigSchema, StandardSchema};

/// A hook or plugin command. Hooks are run as shell commands.
pub type CommandSpec = String;

/// Per-platform settings declared by a project or a dependency.
pub type PlatformConfig = serde_json::Map<String, Value>;

/// A platform definition contributed by a dependency. Passed through untouched.
pub type PlatformModule = Value;

/// How a dependency wires itself into a consuming project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DependencySettings {
    /// Native settings per platform; `None` means the platform was listed but left empty.
    pub platforms: BTreeMap<String, Option<PlatformConfig>>,
    /// Asset paths, relative to the dependency root.
    pub assets: Vec<String>,
    /// Lifecycle hooks keyed by hook name (`prelink`, `postlink`, ...).
    pub hooks: BTreeMap<String, Option<CommandSpec>>,
    /// Free-form parameters, keyed by name.
    pub params: BTreeMap<String, Value>,
}

impl DependencySettings {
    /// Returns the command configured for `name`, if any.
    #[must_use]
    pub fn hook(&self, name: &str) -> Option<&CommandSpec> {
        self.hooks.get(name).and_then(Option::as_ref)
    }
}

/// Validated configuration of a single installed dependency.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DependencyConfig {
    /// Settings describing how the dependency links into a project.
    pub dependency: DependencySettings,
    /// Extra CLI commands (plugins) the dependency provides.
    pub commands: Vec<CommandSpec>,
    /// Platforms the dependency adds to the project, if it defines any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<BTreeMap<String, PlatformModule>>,
}

/// Project configuration exactly as validated, before defaults that need I/O are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectUserConfig {
    /// Per-dependency configuration declared by the project itself.
    pub dependencies: BTreeMap<String, DependencyConfig>,
    /// Extra CLI commands declared by the project.
    pub commands: Vec<CommandSpec>,
    /// Per-platform project settings.
    pub platforms: BTreeMap<String, PlatformConfig>,
    /// Project-level asset paths.
    pub assets: Vec<String>,
    /// Location of the `react-native` package, when set explicitly.
    pub react_native_path: Option<PathBuf>,
}

/// Fully resolved project configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Per-dependency configuration declared by the project itself.
    pub dependencies: BTreeMap<String, DependencyConfig>,
    /// Extra CLI commands declared by the project.
    pub commands: Vec<CommandSpec>,
    /// Per-platform project settings.
    pub platforms: BTreeMap<String, PlatformConfig>,
    /// Project-level asset paths.
    pub assets: Vec<String>,
    /// Location of the `react-native` package. Always set.
    pub react_native_path: PathBuf,
}

impl ProjectConfig {
    /// Completes a validated user config with the resolved `react-native` location.
    #[must_use]
    pub fn from_user(user: ProjectUserConfig, react_native_path: PathBuf) -> Self {
        Self {
            dependencies: user.dependencies,
            commands: user.commands,
            platforms: user.platforms,
            assets: user.assets,
            react_native_path,
        }
    }
}
