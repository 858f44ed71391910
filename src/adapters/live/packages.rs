//! Live package index reading the project manifest.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::ports::{FileSystem, InstalledPackage, PackageIndex, PortError};

/// Lists the manifest's `dependencies` that are present under `node_modules`.
pub struct ManifestPackageIndex {
    fs: Arc<dyn FileSystem>,
}

impl ManifestPackageIndex {
    /// Creates an index reading manifests through `fs`.
    #[must_use]
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl PackageIndex for ManifestPackageIndex {
    fn installed(&self, project_root: &Path) -> Result<Vec<InstalledPackage>, PortError> {
        let manifest_path = project_root.join("package.json");
        if !self.fs.exists(&manifest_path) {
            tracing::debug!(path = %manifest_path.display(), "No project manifest, no dependencies");
            return Ok(Vec::new());
        }
        let contents = self.fs.read_to_string(&manifest_path)?;
        let manifest: Value = serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse {}: {e}", manifest_path.display()))?;

        let Some(declared) = manifest.get("dependencies").and_then(Value::as_object) else {
            return Ok(Vec::new());
        };
        let mut packages = Vec::new();
        for name in declared.keys() {
            let root = project_root.join("node_modules").join(name);
            if self.fs.exists(&root.join("package.json")) {
                packages.push(InstalledPackage { name: name.clone(), root });
            } else {
                tracing::debug!(package = %name, "Declared but not installed, skipping");
            }
        }
        Ok(packages)
    }
}
