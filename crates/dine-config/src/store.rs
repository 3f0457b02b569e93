//! Snapshot store location.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Path value that selects a throwaway in-memory store.
pub const IN_MEMORY: &str = ":memory:";

fn default_path() -> String {
    String::from(".dine/dine.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Snapshot file path. Relative paths resolve against the working directory.
    /// `:memory:` keeps everything in memory for the lifetime of the process.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl StoreConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY
    }

    /// Resolve the snapshot path against `base` when it is relative.
    #[must_use]
    pub fn resolve(&self, base: &Path) -> PathBuf {
        let path = PathBuf::from(&self.path);
        if path.is_absolute() {
            path
        } else {
            base.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_project_local_file() {
        let config = StoreConfig::default();
        assert_eq!(config.path, ".dine/dine.json");
        assert!(!config.is_in_memory());
    }

    #[test]
    fn resolves_relative_against_base() {
        let config = StoreConfig::default();
        assert_eq!(
            config.resolve(Path::new("/home/me")),
            PathBuf::from("/home/me/.dine/dine.json")
        );
    }

    #[test]
    fn keeps_absolute_paths() {
        let config = StoreConfig {
            path: "/var/lib/dine.json".into(),
        };
        assert_eq!(
            config.resolve(Path::new("/home/me")),
            PathBuf::from("/var/lib/dine.json")
        );
    }
}
