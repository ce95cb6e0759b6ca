use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories::ProjectDirs;

const DATABASE_FILE: &str = "calorie-tracker.sqlite3";

/// Where the tracker keeps its data on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub data_dir: PathBuf,
}

impl TrackerConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Platform data directory, e.g. `~/.local/share/calorie-tracker` on Linux.
    pub fn from_default_dirs() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "calorie-tracker")
            .ok_or_else(|| anyhow!("failed to resolve a home directory for app data"))?;
        Ok(Self::new(dirs.data_dir()))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_lives_in_data_dir() {
        let config = TrackerConfig::new("/tmp/tracker");
        assert_eq!(config.data_dir(), Path::new("/tmp/tracker"));
        assert_eq!(
            config.database_path(),
            PathBuf::from("/tmp/tracker/calorie-tracker.sqlite3")
        );
    }
}
