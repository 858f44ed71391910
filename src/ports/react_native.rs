//! Locator port for the `react-native` package.

use std::path::{Path, PathBuf};

use super::PortError;

/// Finds where the `react-native` package lives for a project.
///
/// Consulted only when the project configuration does not set the path.
pub trait ReactNativeLocator: Send + Sync {
    /// Returns the `react-native` package directory for `project_root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the package cannot be found.
    fn locate(&self, project_root: &Path) -> Result<PathBuf, PortError>;
}
