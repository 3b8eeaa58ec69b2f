use std::path::{Path, PathBuf};

use itertools::Itertools;
use serde::Deserialize;
use snafu::{Location, ResultExt, Snafu};
use tracing::instrument;

use crate::model::{Job, TransportNumber};

pub type Result<T, E = SnapshotError> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SnapshotError {
    #[snafu(display("failed to read the job snapshot `{}` at {location}: {source}", path.display()))]
    ReadSnapshot {
        path: PathBuf,
        source: std::io::Error,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("malformed job snapshot `{}` at {location}: {source}", path.display()))]
    ParseSnapshot {
        path: PathBuf,
        source: serde_json::Error,
        #[snafu(implicit)]
        location: Location,
    },
}

/// Snapshot files either hold a bare list of jobs or wrap it in a `jobs` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Jobs(Vec<Job>),
    Wrapped { jobs: Vec<Job> },
}

/// Every job known to the dispatch system at the time the snapshot was taken.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    jobs: Vec<Job>,
}

impl Snapshot {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    #[instrument]
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .context(ReadSnapshotSnafu { path })?;

        let snapshot = Self::from_json(&content).context(ParseSnapshotSnafu { path })?;
        tracing::info!(jobs = snapshot.jobs.len(), "loaded job snapshot from `{}`", path.display());

        Ok(snapshot)
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        let jobs = match serde_json::from_str(content)? {
            SnapshotFile::Jobs(jobs) => jobs,
            SnapshotFile::Wrapped { jobs } => jobs,
        };

        Ok(Self { jobs })
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn find(&self, transport_no: &TransportNumber) -> Option<&Job> {
        self.jobs.iter().find(|job| job.transport_no == *transport_no)
    }

    /// Jobs sorted by creation time, newest first.
    pub fn newest_first(&self) -> Vec<&Job> {
        self.jobs
            .iter()
            .sorted_by(|a, b| b.created_at.cmp(&a.created_at))
            .collect_vec()
    }
}
