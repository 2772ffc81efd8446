// Read-only by construction:
// no mutation
// no "update" methods
// shared by reference across queries

use sha2::{Digest, Sha256};

use crate::record::Record;
use crate::store::stats::StoreStats;
use crate::store::versioning::StoreManifest;
use crate::types::identifiers::DatasetVersion;

#[derive(Debug)]
pub struct RecordStore {
    records: Vec<Record>,
    manifest: StoreManifest,
}

impl RecordStore {
    pub(crate) fn from_parts(records: Vec<Record>, manifest: StoreManifest) -> Self {
        debug_assert_eq!(records.len(), manifest.record_count);
        Self { records, manifest }
    }

    /// Build a store from records that are already validated, e.g. fixtures.
    ///
    /// The dataset version is derived from the canonical row form of each
    /// record, in the order given.
    pub fn from_records(source: impl Into<String>, records: Vec<Record>) -> Self {
        let mut hasher = Sha256::new();
        for r in &records {
            let line = format!(
                "{}\u{1f}{}\u{1f}{}\u{1f}{}\u{1f}{}\u{1f}{}\u{1f}{}\u{1f}{}\u{1f}{}\n",
                r.institute,
                r.program,
                r.institute_type.as_str(),
                r.quota.as_str(),
                r.quota.state().map(|s| s.get()).unwrap_or(0),
                r.seat_category.as_str(),
                r.gender_policy.as_str(),
                r.opening_rank,
                r.closing_rank,
            );
            hasher.update(line.as_bytes());
        }
        let version = DatasetVersion::from_digest(&hasher.finalize());

        let manifest = StoreManifest::new(source, version, records.len());
        Self::from_parts(records, manifest)
    }

    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn manifest(&self) -> &StoreManifest {
        &self.manifest
    }

    pub fn dataset_version(&self) -> &DatasetVersion {
        &self.manifest.dataset_version
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats::collect(&self.records)
    }
}
