use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::DatasetVersion;

/// Describes the snapshot a [`RecordStore`](super::RecordStore) was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreManifest {
    pub dataset_version: DatasetVersion,
    pub source: String,
    pub record_count: usize,
    pub loaded_at: DateTime<Utc>, // informational only
}

impl StoreManifest {
    pub fn new(source: impl Into<String>, dataset_version: DatasetVersion, record_count: usize) -> Self {
        Self {
            dataset_version,
            source: source.into(),
            record_count,
            loaded_at: Utc::now(),
        }
    }
}
