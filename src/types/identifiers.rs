use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Numeric identifier of a home state. `0` is the boundary default and
/// matches no home-state seat unless a record carries it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(u32);

impl StateId {
    pub const fn new(id: u32) -> Self {
        StateId(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for StateId {
    fn from(id: u32) -> Self {
        StateId(id)
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content hash of the tabular source a store was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetVersion(String);

impl DatasetVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        Self::from_digest(&hasher.finalize())
    }

    /// Wrap an already computed SHA-256 digest.
    pub fn from_digest(digest: &[u8]) -> Self {
        DatasetVersion(format!("sha256:{}", hex::encode(digest)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
