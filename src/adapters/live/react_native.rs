//! Live `react-native` locator walking `node_modules` directories.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::ports::{FileSystem, PortError, ReactNativeLocator};

const NOT_FOUND: &str = "Unable to find React Native files. Make sure \"react-native\" module \
                         is installed in your project dependencies.";

/// Looks for `node_modules/react-native` from the project root upward.
pub struct NodeModulesLocator {
    fs: Arc<dyn FileSystem>,
}

impl NodeModulesLocator {
    /// Creates a locator probing directories through `fs`.
    #[must_use]
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl ReactNativeLocator for NodeModulesLocator {
    fn locate(&self, project_root: &Path) -> Result<PathBuf, PortError> {
        project_root
            .ancestors()
            .map(|dir| dir.join("node_modules").join("react-native"))
            .find(|candidate| self.fs.is_dir(candidate))
            .ok_or_else(|| NOT_FOUND.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::filesystem::LiveFileSystem;

    fn locator() -> NodeModulesLocator {
        NodeModulesLocator::new(Arc::new(LiveFileSystem))
    }

    #[test]
    fn finds_package_in_ancestor() {
        let dir = tempfile::tempdir().unwrap();
        let react_native = dir.path().join("node_modules").join("react-native");
        std::fs::create_dir_all(&react_native).unwrap();
        let app = dir.path().join("apps").join("mobile");
        std::fs::create_dir_all(&app).unwrap();

        assert_eq!(locator().locate(&app).unwrap(), react_native);
    }

    #[test]
    fn nearest_install_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("node_modules").join("react-native")).unwrap();
        let app = dir.path().join("app");
        let local = app.join("node_modules").join("react-native");
        std::fs::create_dir_all(&local).unwrap();

        assert_eq!(locator().locate(&app).unwrap(), local);
    }

    #[test]
    fn a_file_named_react_native_is_not_an_install() {
        let dir = tempfile::tempdir().unwrap();
        let node_modules = dir.path().join("node_modules");
        std::fs::create_dir_all(&node_modules).unwrap();
        std::fs::write(node_modules.join("react-native"), "").unwrap();

        let err = locator().locate(dir.path()).unwrap_err();
        assert!(err.to_string().starts_with("Unable to find React Native files"));
    }
}
