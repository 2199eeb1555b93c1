use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::foundation::error::{DialpaperError, DialpaperResult};
use crate::scene::model::SceneState;

/// Key the scene blob is stored under.
pub const STATE_KEY: &str = "state";

/// Key/value blob store holding the persisted scene.
///
/// Implementors provide raw blob access; `load`/`save` handle the JSON encoding.
pub trait StateStorage {
    fn read_blob(&self, key: &str) -> DialpaperResult<Option<String>>;

    fn write_blob(&mut self, key: &str, blob: &str) -> DialpaperResult<()>;

    /// The stored scene, or `None` when absent. An unreadable or invalid blob is logged and
    /// treated as absent.
    fn load(&self) -> Option<SceneState> {
        let blob = match self.read_blob(STATE_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(%err, "failed to read stored scene");
                return None;
            }
        };
        match SceneState::from_json(&blob) {
            Ok(state) => Some(state),
            Err(err) => {
                tracing::warn!(%err, "ignoring invalid stored scene");
                None
            }
        }
    }

    fn save(&mut self, state: &SceneState) -> DialpaperResult<()> {
        let blob = state.to_json()?;
        self.write_blob(STATE_KEY, &blob)
    }
}

/// In-process storage, mostly for tests and one-shot renders.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    blobs: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: &SceneState) -> DialpaperResult<Self> {
        let mut s = Self::new();
        s.save(state)?;
        Ok(s)
    }

    pub fn blob(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }
}

impl StateStorage for MemoryStorage {
    fn read_blob(&self, key: &str) -> DialpaperResult<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write_blob(&mut self, key: &str, blob: &str) -> DialpaperResult<()> {
        self.blobs.insert(key.to_owned(), blob.to_owned());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory. The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStorage for FileStorage {
    fn read_blob(&self, key: &str) -> DialpaperResult<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DialpaperError::storage(format!(
                "read '{}': {e}",
                path.display()
            ))),
        }
    }

    fn write_blob(&mut self, key: &str, blob: &str) -> DialpaperResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            DialpaperError::storage(format!("create '{}': {e}", self.dir.display()))
        })?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, blob)
            .map_err(|e| DialpaperError::storage(format!("write '{}': {e}", tmp.display())))?;
        std::fs::rename(&tmp, &path)
            .map_err(|e| DialpaperError::storage(format!("replace '{}': {e}", path.display())))?;
        tracing::debug!(path = %path.display(), bytes = blob.len(), "stored blob");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/storage.rs"]
mod tests;
