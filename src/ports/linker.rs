//! Native-code and asset linking ports.
//!
//! How a platform's native project files are edited is up to the adapter; the
//! pipeline only decides when each step runs.

use super::StepFuture;
use crate::config::ProjectConfig;
use crate::project::{Dependency, PlatformMap};

/// Wires a dependency's native code into the project.
pub trait NativeLinker: Send + Sync {
    /// Links `dependency` for every platform in `platforms`.
    fn link_dependency<'a>(
        &'a self,
        platforms: &'a PlatformMap,
        project: &'a ProjectConfig,
        dependency: &'a Dependency,
    ) -> StepFuture<'a>;
}

/// Copies declared assets into the project.
pub trait AssetLinker: Send + Sync {
    /// Links `assets` for every platform in `platforms`.
    fn link_assets<'a>(
        &'a self,
        platforms: &'a PlatformMap,
        project: &'a ProjectConfig,
        assets: &'a [String],
    ) -> StepFuture<'a>;
}
