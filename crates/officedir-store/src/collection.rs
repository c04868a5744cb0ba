// SPDX-License-Identifier: Apache-2.0

use crate::paths::{collection_path, lock_path, tmp_path};
use crate::{StoreError, StoreErrorCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

const LOCK_RETRIES: u32 = 100;
const LOCK_RETRY_DELAY: Duration = Duration::from_millis(10);

/// Advisory lock file guarding one collection's read-modify-write cycle.
/// Created with `create_new` so two writers cannot both hold it; removed
/// when the guard drops.
pub struct CollectionLockGuard {
    lock_path: PathBuf,
}

impl CollectionLockGuard {
    pub(crate) fn acquire(root: &Path, collection: &str) -> Result<Self, StoreError> {
        fs::create_dir_all(root)
            .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
        let lock_path = lock_path(root, collection);
        for attempt in 0..LOCK_RETRIES {
            match OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(&lock_path)
            {
                Ok(_) => return Ok(Self { lock_path }),
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    if attempt + 1 == LOCK_RETRIES {
                        break;
                    }
                    std::thread::sleep(LOCK_RETRY_DELAY);
                }
                Err(e) => {
                    return Err(StoreError::new(
                        StoreErrorCode::Io,
                        format!("failed to create lock file: {e}"),
                    ))
                }
            }
        }
        Err(StoreError::new(
            StoreErrorCode::Conflict,
            format!("collection {collection} is locked by another writer"),
        ))
    }
}

impl Drop for CollectionLockGuard {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}

/// One JSON-array collection on disk.
#[derive(Debug, Clone)]
pub struct JsonCollection {
    root: PathBuf,
    name: String,
}

impl JsonCollection {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn path(&self) -> PathBuf {
        collection_path(&self.root, &self.name)
    }

    /// Lenient read: a missing or malformed file is an empty collection.
    /// Malformed content is logged and left on disk untouched.
    #[must_use]
    pub fn read<T: DeserializeOwned>(&self) -> Vec<T> {
        let path = self.path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(collection = %self.name, error = %e, "malformed collection file; serving empty");
                Vec::new()
            }
        }
    }

    /// Strict read for validation tooling: parse errors surface instead
    /// of defaulting to empty.
    pub fn read_strict<T: DeserializeOwned>(&self) -> Result<Vec<T>, StoreError> {
        let path = self.path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&path)
            .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| {
            StoreError::new(
                StoreErrorCode::Validation,
                format!("{}: {e}", self.name),
            )
        })
    }

    /// Lenient read for single-document collections (the reference book
    /// is a map, not an array).
    #[must_use]
    pub fn read_object<T: DeserializeOwned + Default>(&self) -> T {
        let raw = match fs::read_to_string(self.path()) {
            Ok(raw) => raw,
            Err(_) => return T::default(),
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(collection = %self.name, error = %e, "malformed collection file; serving empty");
                T::default()
            }
        }
    }

    pub fn read_object_strict<T: DeserializeOwned + Default>(&self) -> Result<T, StoreError> {
        let path = self.path();
        if !path.exists() {
            return Ok(T::default());
        }
        let raw = fs::read_to_string(&path)
            .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| {
            StoreError::new(
                StoreErrorCode::Validation,
                format!("{}: {e}", self.name),
            )
        })
    }

    /// Read-modify-write under the collection lock. The mutation closure
    /// sees the freshest on-disk state, and the result lands atomically.
    pub fn mutate<T, R, F>(&self, f: F) -> Result<R, StoreError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>) -> R,
    {
        let _guard = CollectionLockGuard::acquire(&self.root, &self.name)?;
        let mut items: Vec<T> = self.read();
        let out = f(&mut items);
        self.write_locked(&items)?;
        Ok(out)
    }

    pub fn append<T: Serialize + DeserializeOwned>(&self, item: T) -> Result<(), StoreError> {
        self.mutate(|items: &mut Vec<T>| items.push(item))
    }

    /// Replace the whole collection.
    pub fn write<T: Serialize>(&self, items: &[T]) -> Result<(), StoreError> {
        let _guard = CollectionLockGuard::acquire(&self.root, &self.name)?;
        self.write_locked(items)
    }

    fn write_locked<T: Serialize>(&self, items: &[T]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(items)
            .map_err(|e| StoreError::new(StoreErrorCode::Internal, e.to_string()))?;
        let tmp = tmp_path(&self.root, &self.name);
        write_and_sync(&tmp, &bytes)?;
        fs::rename(&tmp, self.path())
            .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
        sync_dir(&self.root)
    }
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let mut file = fs::File::create(path)
        .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
    file.write_all(bytes)
        .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
    file.sync_all()
        .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))
}

fn sync_dir(dir: &Path) -> Result<(), StoreError> {
    let file = OpenOptions::new()
        .read(true)
        .open(dir)
        .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
    file.sync_all()
        .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))
}
