//! Filesystem port for reading configuration and manifests.

use std::path::Path;

use super::PortError;

/// Provides read access to the project tree.
///
/// Configuration discovery only ever reads, so the port exposes no writes.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, PortError>;

    /// Returns `true` if the path exists and is a regular file.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}
