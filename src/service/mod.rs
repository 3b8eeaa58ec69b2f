pub mod merger;
pub mod selector;
pub mod snapshot;
pub mod timeline;

#[cfg(test)]
pub(crate) mod fixtures;

pub use merger::merge_chronologically;
pub use selector::{jobs_for_driver, select_job};
pub use snapshot::{Snapshot, SnapshotError};
pub use timeline::{build_timeline, reconstruct};
