use tracing::instrument;

use crate::model::{
    confirmed_at, BranchWaypoint, EntryState, FuelingRecord, Job, Milestone, Sequence, Timeline,
    TimelineEntry, Timestamp,
};
use crate::service::merger::merge_chronologically;

pub use route::*;
pub use state::*;

mod route;
mod state;

/// Expands a job into its timeline entries, in generation order.
///
/// The result holds one entry per fixed milestone, an arrival and an unload entry per destination
/// branch and one entry per fueling record. It is not yet in display order, see
/// [merge_chronologically].
pub fn build_timeline(job: &Job) -> Vec<TimelineEntry> {
    let mut builder = Builder::new(job);

    for step in Step::ALL {
        builder.step(step);
    }

    let pickup_done = Step::Pickup.is_confirmed(job);
    for waypoint in route_ordered(job) {
        builder.branch(waypoint, pickup_done);
    }

    builder.trip_end();

    for (index, record) in job.fuelings.iter().enumerate() {
        builder.fueling(index, record);
    }

    builder.finish()
}

/// Builds and merges the timeline of a job into display order.
#[instrument(skip_all, fields(transport_no = %job.transport_no))]
pub fn reconstruct(job: &Job) -> Timeline {
    let entries = merge_chronologically(build_timeline(job));

    tracing::debug!(
        entries = entries.len(),
        branches = job.branches.len(),
        fuelings = job.fuelings.len(),
        "reconstructed timeline"
    );

    Timeline {
        transport_no: job.transport_no.clone(),
        entries,
    }
}

/// Accumulates entries while threading the activation cursor through every step.
#[derive(Debug)]
struct Builder<'a> {
    job: &'a Job,
    entries: Vec<TimelineEntry>,
    activation: Activation,
}

impl<'a> Builder<'a> {
    fn new(job: &'a Job) -> Self {
        let capacity = Step::ALL.len() + 1 + 2 * job.branches.len() + job.fuelings.len();

        Self {
            job,
            entries: Vec::with_capacity(capacity),
            activation: Activation::default(),
        }
    }

    fn next_sequence(&self) -> Sequence {
        Sequence::Ordered(self.entries.len() as u32)
    }

    fn push(
        &mut self, milestone: Milestone, title: String, state: EntryState,
        timestamp: Option<Timestamp>,
    ) -> &mut TimelineEntry {
        let state = self.activation.settle(state);
        let entry =
            TimelineEntry::new(milestone, title, self.next_sequence()).with_state(state, timestamp);

        let index = self.entries.len();
        self.entries.push(entry);
        &mut self.entries[index]
    }

    fn step(&mut self, step: Step) {
        let job = self.job;
        let state = derive_state(step, job);
        let timestamp = confirmed_at(step.confirmation(job).as_ref());

        let (milestone, title, subtitle) = match step {
            Step::Received => (
                Milestone::Received,
                "Job received".to_string(),
                job.vehicle.as_ref().map(|vehicle| format!("Vehicle {vehicle}")),
            ),
            Step::TripStart => (Milestone::TripStart, "Trip started".to_string(), None),
            Step::DepotArrival => (
                Milestone::DepotArrival,
                "Arrived at depot".to_string(),
                job.source_branch.clone(),
            ),
            Step::Pickup => (Milestone::Pickup, "Fuel picked up".to_string(), None),
            Step::RoutePlanned => (Milestone::RoutePlanned, "Route planned".to_string(), None),
        };

        let entry = self.push(milestone, title, state, timestamp);
        entry.subtitle = subtitle;
    }

    fn branch(&mut self, waypoint: &BranchWaypoint, pickup_done: bool) {
        let name = waypoint.display_name();

        self.push(
            Milestone::BranchArrival {
                branch_id: waypoint.branch_id.clone(),
            },
            format!("Arrived at {name}"),
            gated(waypoint.has_arrived(), pickup_done),
            waypoint.arrival_time(),
        );

        self.push(
            Milestone::BranchUnload {
                branch_id: waypoint.branch_id.clone(),
            },
            format!("Unloaded at {name}"),
            gated(waypoint.is_delivered(), waypoint.has_arrived()),
            waypoint.delivery_time(),
        );
    }

    fn trip_end(&mut self) {
        let job = self.job;
        let state = gated(job.is_closed(), job.all_delivered());

        let entry = self.push(
            Milestone::TripEnd,
            "Trip ended".to_string(),
            state,
            confirmed_at(job.end_trip.as_ref()),
        );
        entry.subtitle = job
            .end_odometer
            .map(|odometer| format!("Odometer {odometer:.0} km"));
    }

    fn fueling(&mut self, index: usize, record: &FuelingRecord) {
        let title = if record.station.trim().is_empty() {
            "Fueling stop".to_string()
        } else {
            format!("Fueled at {}", record.station.trim())
        };

        let entry = TimelineEntry::new(Milestone::Fueling { index }, title, Sequence::Floating)
            .with_state(EntryState::Completed, record.at)
            .with_subtitle(record.summary());

        self.entries.push(entry);
    }

    fn finish(self) -> Vec<TimelineEntry> {
        self.entries
    }
}
