use super::KeyValueStore;
use crate::error::{Result, StockroomError};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing a given key, inside the store root.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key_to_filename(key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(StockroomError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(StockroomError::Io)?;
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.path_for(key), value).map_err(StockroomError::Io)?;
        Ok(())
    }
}

fn key_to_filename(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_key_reads_as_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        assert_eq!(store.get("stockroom:products").unwrap(), None);
    }

    #[test]
    fn set_then_get() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("nested").join("data"));
        store.set("stockroom:products", "[]").unwrap();

        assert_eq!(
            store.get("stockroom:products").unwrap().as_deref(),
            Some("[]")
        );
        assert!(temp
            .path()
            .join("nested/data/stockroom_products.json")
            .exists());
    }

    #[test]
    fn keys_are_sanitized() {
        assert_eq!(key_to_filename("stockroom:products"), "stockroom_products");
        assert_eq!(key_to_filename("../etc/passwd"), "___etc_passwd");
    }
}
