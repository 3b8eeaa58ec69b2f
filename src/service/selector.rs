use itertools::Itertools;
use tracing::instrument;

use crate::model::Job;

/// Jobs assigned to the given driver, in input order.
pub fn jobs_for_driver<'a>(jobs: &'a [Job], driver: &str) -> Vec<&'a Job> {
    jobs.iter().filter(|job| job.is_driven_by(driver)).collect_vec()
}

/// Picks the one job to show a driver.
///
/// The most recent job that is in progress wins, otherwise the most recent job overall.
/// Jobs without a creation time count as the oldest. Returns `None` only for an empty input.
#[instrument(skip_all)]
pub fn select_job<'a>(jobs: impl IntoIterator<Item = &'a Job>) -> Option<&'a Job> {
    let by_recency = jobs
        .into_iter()
        .sorted_by(|a, b| b.created_at.cmp(&a.created_at))
        .collect_vec();

    let selected = by_recency
        .iter()
        .find(|job| job.status.is_in_progress())
        .or_else(|| by_recency.first())
        .copied();

    match selected {
        Some(job) => tracing::debug!(transport_no = %job.transport_no, status = %job.status, "selected job"),
        None => tracing::debug!("no job to select"),
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JobStatus;
    use crate::service::fixtures::{at, job};

    fn created(transport_no: &str, status: JobStatus, hour: Option<u32>) -> Job {
        let mut job = job(transport_no, &[]);
        job.status = status;
        job.created_at = hour.map(|hour| at(hour, 0));
        job
    }

    #[test]
    fn empty_job_set() {
        let jobs: Vec<Job> = Vec::new();
        assert_eq!(select_job(&jobs), None);
    }

    #[test]
    fn prefers_the_job_in_progress() {
        let jobs = vec![
            created("TR-1", JobStatus::Created, Some(12)),
            created("TR-2", JobStatus::InDelivery, Some(9)),
            created("TR-3", JobStatus::Departed, Some(6)),
        ];

        let selected = select_job(&jobs).unwrap();
        assert_eq!(selected.transport_no.as_str(), "TR-2");
    }

    #[test]
    fn falls_back_to_the_most_recent_job() {
        let jobs = vec![
            created("TR-1", JobStatus::Completed, Some(8)),
            created("TR-2", JobStatus::Created, Some(10)),
            created("TR-3", JobStatus::Other("cancelled".to_string()), Some(9)),
        ];

        let selected = select_job(&jobs).unwrap();
        assert_eq!(selected.transport_no.as_str(), "TR-2");
    }

    #[test]
    fn missing_creation_time_sorts_oldest() {
        let jobs = vec![
            created("TR-1", JobStatus::PickedUp, None),
            created("TR-2", JobStatus::RoutePlanned, Some(1)),
        ];
        assert_eq!(select_job(&jobs).unwrap().transport_no.as_str(), "TR-2");

        let jobs = vec![
            created("TR-1", JobStatus::Created, None),
            created("TR-2", JobStatus::Completed, Some(1)),
        ];
        assert_eq!(select_job(&jobs).unwrap().transport_no.as_str(), "TR-2");
    }

    #[test]
    fn selection_is_scoped_to_the_driver() {
        let mut other = created("TR-1", JobStatus::InDelivery, Some(11));
        other.driver_name = Some("Somsak".to_string());
        let jobs = vec![other, created("TR-2", JobStatus::Created, Some(10))];

        let visible = jobs_for_driver(&jobs, "somchai jaidee");
        assert_eq!(visible.len(), 1);
        assert_eq!(select_job(visible).unwrap().transport_no.as_str(), "TR-2");
        assert_eq!(select_job(jobs_for_driver(&jobs, "nobody")), None);
    }
}
