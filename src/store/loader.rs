use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::record::Record;
use crate::store::store::RecordStore;
use crate::store::versioning::StoreManifest;
use crate::types::identifiers::DatasetVersion;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error reading {label}: {source}")]
    Read {
        label: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed row at line {line}: {source}")]
    Malformed {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("Source has no header row")]
    MissingHeader,
}

impl LoadError {
    fn malformed(source: csv::Error) -> Self {
        let line = source.position().map(|p| p.line()).unwrap_or(0);
        LoadError::Malformed { line, source }
    }
}

/// Load a store from a CSV file on disk.
pub fn load(path: &Path) -> Result<RecordStore, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    from_bytes(path.display().to_string(), &bytes)
}

/// Load a store from any reader. The reader is drained fully before parsing.
///
/// `label` names the source in errors and in the manifest; it need not be a path.
pub fn from_reader<R: Read>(label: impl Into<String>, mut reader: R) -> Result<RecordStore, LoadError> {
    let label = label.into();
    let mut bytes = Vec::new();
    if let Err(source) = reader.read_to_end(&mut bytes) {
        return Err(LoadError::Read { label, source });
    }

    from_bytes(label, &bytes)
}

/// Parse a complete CSV payload. Either every row validates and a store is
/// returned, or nothing is.
pub fn from_bytes(source: impl Into<String>, bytes: &[u8]) -> Result<RecordStore, LoadError> {
    let source = source.into();
    let records = parse_records(bytes)?;

    let version = DatasetVersion::from_content(bytes);
    let manifest = StoreManifest::new(source, version, records.len());

    let inverted = records.iter().filter(|r| r.is_inverted()).count();
    if inverted > 0 {
        warn!(
            source = %manifest.source,
            inverted,
            "records with opening rank above closing rank"
        );
    }

    info!(
        source = %manifest.source,
        records = manifest.record_count,
        version = manifest.dataset_version.as_str(),
        "loaded record store"
    );

    Ok(RecordStore::from_parts(records, manifest))
}

fn parse_records(bytes: &[u8]) -> Result<Vec<Record>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = rdr.headers().map_err(LoadError::malformed)?;
    if headers.is_empty() {
        return Err(LoadError::MissingHeader);
    }

    let mut records = Vec::new();
    for row in rdr.deserialize::<Record>() {
        records.push(row.map_err(LoadError::malformed)?);
    }

    Ok(records)
}
