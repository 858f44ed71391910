//! Service context bundling all port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::config::{ConfigSchema, StandardSchema};
use crate::ports::{
    AssetLinker, FileSystem, HookExecutor, NativeLinker, PackageIndex, ReactNativeLocator,
};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Tests swap single
/// fields using struct update syntax over [`ServiceContext::live`].
pub struct ServiceContext {
    /// Filesystem for reading configuration and manifests, shared with the live adapters.
    pub fs: Arc<dyn FileSystem>,
    /// Schema used to validate every configuration value.
    pub schema: Box<dyn ConfigSchema>,
    /// Locator for the `react-native` package.
    pub react_native: Box<dyn ReactNativeLocator>,
    /// Index of installed dependency packages.
    pub packages: Box<dyn PackageIndex>,
    /// Executor for lifecycle hook commands.
    pub hooks: Box<dyn HookExecutor>,
    /// Native-code linker.
    pub native: Box<dyn NativeLinker>,
    /// Asset linker.
    pub assets: Box<dyn AssetLinker>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for the project at `project_root`.
    #[must_use]
    pub fn live(project_root: &Path) -> Self {
        use crate::adapters::live::filesystem::LiveFileSystem;
        use crate::adapters::live::linker::{ReportingAssetLinker, ReportingNativeLinker};
        use crate::adapters::live::packages::ManifestPackageIndex;
        use crate::adapters::live::react_native::NodeModulesLocator;
        use crate::adapters::live::shell::LiveHookExecutor;

        let fs: Arc<dyn FileSystem> = Arc::new(LiveFileSystem);
        Self {
            react_native: Box::new(NodeModulesLocator::new(Arc::clone(&fs))),
            packages: Box::new(ManifestPackageIndex::new(Arc::clone(&fs))),
            fs,
            schema: Box::new(StandardSchema),
            hooks: Box::new(LiveHookExecutor::new(project_root)),
            native: Box::new(ReportingNativeLinker),
            assets: Box::new(ReportingAssetLinker),
        }
    }
}
