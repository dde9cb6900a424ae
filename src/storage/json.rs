use std::{
    fs::{self, OpenOptions, rename, write},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use fs2::FileExt;
use serde_json::to_string_pretty;
use uuid::Uuid;

use crate::{
    models::catalog::Catalog,
    storage::{Storage, StorageError},
};

pub const CATALOG_FILE_NAME: &str = "projects.json";
pub const LOCK_FILE_NAME: &str = "projects.lock";

/// One JSON catalog file plus one directory per project, all under `base_dir`.
pub struct JsonFileStorage {
    base_dir: PathBuf,
}

impl JsonFileStorage {
    /// Opens the storage, creating `base_dir` (and its parents) if needed.
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).map_err(|e| StorageError::CreateDirFailed {
            path: base_dir.clone(),
            source: e,
        })?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.base_dir.join(CATALOG_FILE_NAME)
    }

    pub fn project_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    fn lock_path(&self) -> PathBuf {
        self.base_dir.join(LOCK_FILE_NAME)
    }

    fn is_reserved(name: &str) -> bool {
        name == CATALOG_FILE_NAME
            || name == LOCK_FILE_NAME
            || name.starts_with(&format!("{}.tmp.", CATALOG_FILE_NAME))
    }

    fn replace_catalog(&self, temp_path: &Path) -> Result<(), StorageError> {
        let catalog_path = self.catalog_path();

        let lock_file_path = self.lock_path();
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_file_path)
            .map_err(|e| StorageError::SaveFailed {
                path: lock_file_path.clone(),
                source: e,
            })?;
        lock_file
            .lock_exclusive()
            .map_err(|e| StorageError::SaveFailed {
                path: lock_file_path,
                source: e,
            })?;

        rename(temp_path, &catalog_path).map_err(|e| StorageError::SaveFailed {
            path: catalog_path.clone(),
            source: e,
        })?;

        lock_file.unlock().map_err(|e| StorageError::SaveFailed {
            path: catalog_path,
            source: e,
        })?;

        Ok(())
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Catalog, StorageError> {
        let path = self.catalog_path();
        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| StorageError::ParseFailed { path, source: e }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Catalog::default()),
            Err(e) => Err(StorageError::LoadFailed { path, source: e }),
        }
    }

    fn save(&self, catalog: &Catalog) -> Result<(), StorageError> {
        let json =
            to_string_pretty(catalog).map_err(|e| StorageError::SerializeFailed { source: e })?;

        let temp_path = self
            .base_dir
            .join(format!("{}.tmp.{}", CATALOG_FILE_NAME, Uuid::new_v4()));
        write(&temp_path, json).map_err(|e| StorageError::SaveFailed {
            path: temp_path.clone(),
            source: e,
        })?;

        self.replace_catalog(&temp_path).inspect_err(|_| {
            let _ = fs::remove_file(&temp_path);
        })
    }

    fn create_project_dir(&self, name: &str) -> Result<bool, StorageError> {
        if Self::is_reserved(name) {
            return Err(StorageError::ReservedName(name.to_string()));
        }

        // `base_dir` exists since `open`, so a plain create_dir tells us who made it
        let path = self.project_path(name);
        match fs::create_dir(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(false),
            Err(e) => Err(StorageError::CreateDirFailed { path, source: e }),
        }
    }

    fn remove_project_dir(&self, name: &str) -> Result<(), StorageError> {
        if Self::is_reserved(name) {
            return Ok(());
        }

        let path = self.project_path(name);
        match fs::remove_dir_all(&path) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            result => result.map_err(|e| StorageError::RemoveDirFailed { path, source: e }),
        }
    }
}
