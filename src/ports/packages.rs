//! Package index port for enumerating installed dependencies.

use std::path::{Path, PathBuf};

use super::PortError;

/// A dependency package installed in the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    /// Package name as declared in the project manifest.
    pub name: String,
    /// Directory the package is installed in.
    pub root: PathBuf,
}

/// Lists the packages installed in a project.
pub trait PackageIndex: Send + Sync {
    /// Returns installed packages for the project at `project_root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the project's package list cannot be read.
    fn installed(&self, project_root: &Path) -> Result<Vec<InstalledPackage>, PortError>;
}
