use super::KeyValueStore;
use crate::error::{RadarError, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// File-backed key-value store: each key lives in `{root}/{key}.json`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RadarError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(RadarError::Io)?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        // Atomic write: tmp file then rename
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(RadarError::Io)?;
        fs::rename(&tmp_path, self.key_path(key)).map_err(RadarError::Io)?;

        Ok(())
    }

    fn location(&self, key: &str) -> String {
        self.key_path(key).display().to_string()
    }
}
