use itertools::Itertools;

use crate::model::{BranchId, BranchWaypoint, Job};

/// Position of a branch in the route order, `-1` when the route does not mention it.
pub fn route_index(order: &[BranchId], waypoint: &BranchWaypoint) -> i64 {
    order
        .iter()
        .position(|id| *id == waypoint.branch_id)
        .map_or(-1, |index| index as i64)
}

/// Destination branches in visiting order.
///
/// Branches missing from the route order sort before every routed branch and keep their list
/// order among themselves. Without a route order the list order is used as is.
pub fn route_ordered(job: &Job) -> Vec<&BranchWaypoint> {
    let order = match job.route_order.as_deref() {
        Some(order) if !order.is_empty() => order,
        _ => return job.branches.iter().collect_vec(),
    };

    for id in order {
        if !job.branches.iter().any(|waypoint| waypoint.branch_id == *id) {
            tracing::debug!(transport_no = %job.transport_no, branch_id = %id, "route order mentions an unknown branch");
        }
    }

    let ranked = job
        .branches
        .iter()
        .map(|waypoint| (route_index(order, waypoint), waypoint))
        .collect_vec();

    for (index, waypoint) in &ranked {
        if *index < 0 {
            // TODO: confirm with dispatch whether unrouted branches really belong at the front
            tracing::warn!(transport_no = %job.transport_no, branch_id = %waypoint.branch_id, "branch is missing from the route order");
        }
    }

    ranked
        .into_iter()
        .sorted_by_key(|(index, _)| *index)
        .map(|(_, waypoint)| waypoint)
        .collect_vec()
}
