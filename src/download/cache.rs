use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk cache for the fetched source CSVs, so repeated generation runs
/// while iterating don't hammer the upstream hosts.
pub struct CacheManager {
    cache_dir: PathBuf,
}

impl CacheManager {
    pub fn new(custom_dir: Option<PathBuf>) -> Result<Self> {
        let cache_dir = match custom_dir {
            Some(dir) => dir,
            None => {
                let proj_dirs = ProjectDirs::from("", "", "bitb-tools")
                    .context("Could not determine cache directory")?;
                proj_dirs.cache_dir().to_path_buf()
            }
        };

        fs::create_dir_all(&cache_dir).context("Failed to create cache directory")?;

        Ok(Self { cache_dir })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn fci_path(&self) -> PathBuf {
        self.cache_dir.join("fci-breeds.csv")
    }

    pub fn akc_path(&self) -> PathBuf {
        self.cache_dir.join("akc-breeds.csv")
    }

    /// Both source files are present and non-empty.
    pub fn is_cached(&self) -> bool {
        [self.fci_path(), self.akc_path()]
            .iter()
            .all(|p| fs::metadata(p).map(|m| m.len() > 0).unwrap_or(false))
    }

    pub fn store(&self, path: &Path, body: &str) -> Result<()> {
        fs::write(path, body).with_context(|| format!("Failed to write cache file: {:?}", path))
    }

    pub fn load(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read cache file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CacheManager::new(Some(dir.path().to_path_buf())).unwrap();

        assert!(!cache.is_cached());

        cache.store(&cache.fci_path(), "id,name\n1,Beagle\n").unwrap();
        cache.store(&cache.akc_path(), ",group\nBeagle,Hound\n").unwrap();
        assert!(cache.is_cached());

        let body = cache.load(&cache.fci_path()).unwrap();
        assert!(body.contains("Beagle"));
    }

    #[test]
    fn test_empty_file_does_not_count_as_cached() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CacheManager::new(Some(dir.path().to_path_buf())).unwrap();

        cache.store(&cache.fci_path(), "").unwrap();
        cache.store(&cache.akc_path(), "x").unwrap();
        assert!(!cache.is_cached());
    }
}
