//! Result persistence and remote forwarding for the NeuroGuide survey
//!
//! This crate provides the collaborators around the core survey logic:
//! - Local result storage (one JSON blob, update-or-append by dedup key)
//! - Best-effort forwarding of completed records to the remote collector
//! - Community statistics loading with a generated demo-data fallback

pub mod remote;
pub mod sample;
pub mod stats_loader;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use remote::{ForwardPayload, RemoteCollector};
pub use sample::generate_sample_records;
pub use stats_loader::{StatsSource, load_community_stats};
pub use storage::{LocalResultStorage, ResultStorage, StorageError, StorageResult};
pub use store::ResultStore;
