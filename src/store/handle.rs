use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use crate::config::EngineConfig;
use crate::store::loader::{self, LoadError};
use crate::store::store::RecordStore;

/// One-time initialization barrier around a [`RecordStore`].
///
/// Concurrent first callers of [`StoreHandle::get_or_load`] block on the same
/// in-flight load instead of starting their own. A failed load leaves the
/// handle empty and returns the error; a successful load is never repeated.
#[derive(Debug)]
pub struct StoreHandle {
    data_path: PathBuf,
    cell: OnceCell<RecordStore>,
}

impl StoreHandle {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            cell: OnceCell::new(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.data_path.clone())
    }

    /// Wrap a store that was already built, e.g. at process startup.
    pub fn with_store(data_path: impl Into<PathBuf>, store: RecordStore) -> Self {
        Self {
            data_path: data_path.into(),
            cell: OnceCell::with_value(store),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn get_or_load(&self) -> Result<&RecordStore, LoadError> {
        self.cell.get_or_try_init(|| loader::load(&self.data_path))
    }

    pub fn get(&self) -> Option<&RecordStore> {
        self.cell.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}
