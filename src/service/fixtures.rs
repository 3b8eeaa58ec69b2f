use chrono::{TimeZone, Utc};

use crate::model::{BranchStatus, BranchWaypoint, Confirmation, FuelingRecord, Job, JobStatus, Timestamp};

/// A timestamp on the fixture delivery day.
pub fn at(hour: u32, minute: u32) -> Timestamp {
    Timestamp::new(Utc.with_ymd_and_hms(2024, 3, 1, hour, minute, 0).unwrap())
}

pub fn confirmed(hour: u32, minute: u32) -> Option<Confirmation> {
    Some(Confirmation::confirmed(at(hour, minute)))
}

/// A freshly dispatched job heading to the given branches.
pub fn job(transport_no: &str, branches: &[&str]) -> Job {
    let mut job = Job::new(transport_no.into(), JobStatus::Created);
    job.created_at = Some(at(7, 0));
    job.driver_name = Some("Somchai Jaidee".to_string());
    job.source_branch = Some("Central Depot".to_string());
    job.branches = branches
        .iter()
        .map(|id| BranchWaypoint::new((*id).into(), format!("Branch {id}")))
        .collect();
    job
}

/// Trip started, depot reached and fuel picked up.
pub fn picked_up(mut job: Job) -> Job {
    job.status = JobStatus::PickedUp;
    job.trip_start = confirmed(8, 0);
    job.depot_arrival = confirmed(8, 30);
    job.pickup = confirmed(9, 0);
    job
}

pub fn arrive(job: &mut Job, branch: usize, hour: u32, minute: u32) {
    let waypoint = &mut job.branches[branch];
    waypoint.status = BranchStatus::Arrived;
    waypoint.arrival = confirmed(hour, minute);
}

pub fn deliver(job: &mut Job, branch: usize, hour: u32, minute: u32) {
    let waypoint = &mut job.branches[branch];
    waypoint.status = BranchStatus::Delivered;
    waypoint.delivery = confirmed(hour, minute);
}

pub fn fueling(station: &str, hour: u32, minute: u32) -> FuelingRecord {
    FuelingRecord::new(station.to_string(), 150.0, 5_250.0, Some(at(hour, minute)))
}

/// Route planned right after pickup, in the listed branch order.
pub fn planned(mut job: Job) -> Job {
    job.status = JobStatus::RoutePlanned;
    job.route_planned = confirmed(9, 10);
    job
}
