//! On-disk backend: a single JSON object mapping keys to string values.
//!
//! Every write rewrites the whole file through `<path>.tmp` and a rename, so a
//! crash mid-write leaves the previous file in place. A missing file reads as
//! an empty store.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::Backend;
use crate::{Error, Result};

/// Backend persisted to one JSON file at `path`
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn read_table(&self) -> Result<BTreeMap<String, String>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(Error::Storage(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&text).map_err(|e| {
            Error::Storage(format!("corrupt store file {}: {}", self.path.display(), e))
        })
    }

    fn write_table(&self, table: &BTreeMap<String, String>) -> Result<()> {
        let body = serde_json::to_string_pretty(table)?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| {
                Error::Storage(format!("failed to create {}: {}", dir.display(), e))
            })?;
        }

        let tmp = self.tmp_path();
        let write = |tmp: &Path| -> io::Result<()> {
            let mut file = fs::File::create(tmp)?;
            file.write_all(body.as_bytes())?;
            file.flush()?;
            file.sync_all()
        };
        write(&tmp).map_err(|e| Error::Storage(format!("failed to write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            Error::Storage(format!(
                "failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl Backend for FileBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_table()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut table = self.read_table()?;
        table.insert(key.to_string(), value.to_string());
        self.write_table(&table)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut table = self.read_table()?;
        if table.remove(key).is_some() {
            self.write_table(&table)?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Storage(format!(
                "failed to delete {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.read_table()?.into_keys().collect())
    }
}
