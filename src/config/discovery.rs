//! Locates configuration files on disk.
//!
//! Each directory from the search start upward is checked against an ordered
//! list of candidate file names; the first candidate that yields
//! configuration wins.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::ResolveError;
use crate::ports::FileSystem;

/// Package manifest file name.
pub const MANIFEST: &str = "package.json";

/// Manifest key holding configuration when no dedicated file exists.
pub const MANIFEST_KEY: &str = "react-native";

/// Candidate file names, in precedence order. Dedicated files precede the manifest.
pub const SEARCH_PLACES: [&str; 4] = [
    "react-native.config.json",
    "react-native.config.yaml",
    "react-native.config.yml",
    MANIFEST,
];

/// Where a search starts and where it must stop.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions<'p> {
    /// First directory inspected.
    pub search_from: &'p Path,
    /// Last directory inspected; `None` walks up to the filesystem root.
    pub stop_at: Option<&'p Path>,
}

/// Raw configuration together with the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredConfig {
    /// File the configuration was read from.
    pub path: PathBuf,
    /// Unvalidated configuration value.
    pub raw: Value,
}

/// Searches for the nearest configuration file.
pub struct ConfigDiscovery<'a> {
    fs: &'a dyn FileSystem,
    places: &'a [&'a str],
}

impl<'a> ConfigDiscovery<'a> {
    /// Creates a discovery over the default [`SEARCH_PLACES`].
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs, places: &SEARCH_PLACES }
    }

    #[cfg(test)]
    fn with_places(fs: &'a dyn FileSystem, places: &'a [&'a str]) -> Self {
        Self { fs, places }
    }

    /// Returns the first matching configuration, or `None` when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns an error if a candidate file exists but cannot be read or parsed.
    pub fn search(&self, options: SearchOptions<'_>) -> Result<Option<DiscoveredConfig>, ResolveError> {
        let mut dir = Some(options.search_from);
        while let Some(current) = dir {
            for place in self.places {
                let candidate = current.join(place);
                if !self.fs.exists(&candidate) {
                    continue;
                }
                if let Some(raw) = self.load(&candidate)? {
                    tracing::debug!(path = %candidate.display(), "Found configuration");
                    return Ok(Some(DiscoveredConfig { path: candidate, raw }));
                }
            }
            if options.stop_at == Some(current) {
                break;
            }
            dir = current.parent();
        }
        Ok(None)
    }

    /// Reads one candidate. Manifests without the config key yield `None`.
    fn load(&self, path: &Path) -> Result<Option<Value>, ResolveError> {
        let contents = self.fs.read_to_string(path).map_err(|e| ResolveError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let document = parse_document(path, &contents)?;
        if path.file_name().is_some_and(|name| name == MANIFEST) {
            Ok(document.get(MANIFEST_KEY).cloned())
        } else {
            Ok(Some(document))
        }
    }
}

fn parse_document(path: &Path, contents: &str) -> Result<Value, ResolveError> {
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "yaml" || ext == "yml");
    let parsed: Result<Value, String> = if is_yaml {
        serde_yaml::from_str(contents).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(contents).map_err(|e| e.to_string())
    };
    parsed.map_err(|message| ResolveError::Parse { path: path.to_path_buf(), message })
}

/// Reads and parses `<root>/package.json`.
///
/// # Errors
///
/// Returns an error if the manifest is missing or is not valid JSON.
pub fn read_manifest(fs: &dyn FileSystem, root: &Path) -> Result<Value, ResolveError> {
    let path = root.join(MANIFEST);
    let contents = fs
        .read_to_string(&path)
        .map_err(|e| ResolveError::Read { path: path.clone(), message: e.to_string() })?;
    parse_document(&path, &contents)
}
