//! Best-score storage backends
//!
//! Web builds use LocalStorage; native builds keep the number in a small text
//! file. Both store the value as decimal text and read missing or garbled
//! data as 0.

use anyhow::Result;

use crate::best_score::{BestScoreStore, decode_best, encode_best};

/// LocalStorage key for the best score
pub const BEST_SCORE_KEY: &str = "lacetti_best";

/// Best score kept in the browser's LocalStorage
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl BestScoreStore for LocalStorageStore {
    fn load_best(&self) -> u64 {
        Self::storage()
            .and_then(|s| s.get_item(BEST_SCORE_KEY).ok().flatten())
            .map(|raw| decode_best(&raw))
            .unwrap_or(0)
    }

    fn save_best(&mut self, best: u64) -> Result<()> {
        let storage = Self::storage().ok_or_else(|| anyhow::anyhow!("LocalStorage unavailable"))?;
        storage
            .set_item(BEST_SCORE_KEY, &encode_best(best))
            .map_err(|e| anyhow::anyhow!("LocalStorage write failed: {:?}", e))?;
        Ok(())
    }
}

/// Best score kept in a text file
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl BestScoreStore for FileStore {
    fn load_best(&self) -> u64 {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => decode_best(&raw),
            Err(e) => {
                log::debug!("No best score at {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save_best(&mut self, best: u64) -> Result<()> {
        use anyhow::Context;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        // Write beside the target first so a crash never leaves half a number
        let tmp = tmp_path(&self.path);
        std::fs::write(&tmp, encode_best(best))
            .with_context(|| format!("writing {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}

/// Sibling path for the staged write, never equal to `path`
#[cfg(not(target_arch = "wasm32"))]
fn tmp_path(path: &std::path::Path) -> std::path::PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    name.into()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("best.txt"));
        assert_eq!(store.load_best(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("best.txt"));
        store.save_best(321).unwrap();
        assert_eq!(store.load_best(), 321);
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "321");

        store.save_best(400).unwrap();
        assert_eq!(FileStore::new(store.path()).load_best(), 400);
    }

    #[test]
    fn test_tmp_named_best_file_is_replaced_whole() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("best.tmp");
        assert_eq!(tmp_path(&path), dir.path().join("best.tmp.tmp"));
        assert_ne!(tmp_path(&dir.path().join("best")), dir.path().join("best"));

        let mut store = FileStore::new(&path);
        store.save_best(77).unwrap();
        assert_eq!(store.load_best(), 77);
        // Only the target survives the staged write
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_garbage_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("best.txt");
        std::fs::write(&path, "not a number").unwrap();
        assert_eq!(FileStore::new(&path).load_best(), 0);
    }

    #[test]
    fn test_unwritable_location_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file cannot act as a parent directory
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let mut store = FileStore::new(blocker.join("best.txt"));
        assert!(store.save_best(5).is_err());
    }
}
