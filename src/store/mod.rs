pub mod handle;
pub mod loader;
pub mod stats;
pub mod store;
pub mod versioning;

pub use handle::StoreHandle;
pub use loader::{from_bytes, from_reader, load, LoadError};
pub use stats::StoreStats;
pub use store::RecordStore;
pub use versioning::StoreManifest;
