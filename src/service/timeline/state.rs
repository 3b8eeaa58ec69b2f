use crate::model::{confirmed_at, Confirmation, EntryState, Job};

/// Fixed milestones every job goes through before its first branch, in evaluation order.
///
/// Route planning never waits on the crew: it is reached together with the pickup and shares its
/// timestamp unless the dispatch system recorded a planning time of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Received,
    TripStart,
    DepotArrival,
    Pickup,
    RoutePlanned,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Received,
        Step::TripStart,
        Step::DepotArrival,
        Step::Pickup,
        Step::RoutePlanned,
    ];

    /// The step that has to be confirmed before this one becomes actionable.
    pub fn prerequisite(self) -> Option<Step> {
        match self {
            Step::Received | Step::TripStart => None,
            Step::DepotArrival => Some(Step::TripStart),
            Step::Pickup => Some(Step::DepotArrival),
            Step::RoutePlanned => Some(Step::Pickup),
        }
    }

    pub fn confirmation(self, job: &Job) -> Option<Confirmation> {
        match self {
            Step::Received => Some(Confirmation::new(job.created_at)),
            Step::TripStart => job.trip_start,
            Step::DepotArrival => job.depot_arrival,
            Step::Pickup => job.pickup,
            Step::RoutePlanned => {
                let planned = job.has_route_plan() || job.pickup.is_some();
                let at = confirmed_at(job.route_planned.as_ref())
                    .or_else(|| confirmed_at(job.pickup.as_ref()));

                planned.then(|| Confirmation::new(at))
            }
        }
    }

    pub fn is_confirmed(self, job: &Job) -> bool {
        self.confirmation(job).is_some()
    }
}

/// `completed` once confirmed, `active` when its gate is open, `pending` otherwise.
pub fn gated(confirmed: bool, ready: bool) -> EntryState {
    match (confirmed, ready) {
        (true, _) => EntryState::Completed,
        (false, true) => EntryState::Active,
        (false, false) => EntryState::Pending,
    }
}

/// State of a fixed milestone, before the activation cursor is applied.
pub fn derive_state(step: Step, job: &Job) -> EntryState {
    let ready = step
        .prerequisite()
        .map_or(true, |prerequisite| prerequisite.is_confirmed(job));

    gated(step.is_confirmed(job), ready)
}

/// The activation cursor: at most one entry of a timeline may be `active`.
///
/// Entries pass their derived state through [Activation::settle] in generation order. The first
/// `active` entry claims the cursor and every later candidate is held back as `pending`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    consumed: bool,
}

impl Activation {
    pub fn settle(&mut self, state: EntryState) -> EntryState {
        match state {
            EntryState::Active if self.consumed => EntryState::Pending,
            EntryState::Active => {
                self.consumed = true;
                EntryState::Active
            }
            other => other,
        }
    }

    pub fn is_consumed(self) -> bool {
        self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::fixtures::{at, confirmed, job};

    #[test]
    fn received_is_always_completed() {
        let mut job = job("TR-1", &[]);
        job.created_at = None;

        assert_eq!(derive_state(Step::Received, &job), EntryState::Completed);
    }

    #[test]
    fn each_step_waits_for_its_prerequisite() {
        let mut job = job("TR-1", &["B1"]);
        let states = |job: &Job| Step::ALL.map(|step| derive_state(step, job));

        use EntryState::*;
        assert_eq!(states(&job), [Completed, Active, Pending, Pending, Pending]);

        job.trip_start = confirmed(8, 0);
        assert_eq!(states(&job), [Completed, Completed, Active, Pending, Pending]);

        job.depot_arrival = confirmed(8, 30);
        assert_eq!(states(&job), [Completed, Completed, Completed, Active, Pending]);

        job.pickup = confirmed(9, 0);
        assert_eq!(states(&job), [Completed; 5]);
    }

    #[test]
    fn route_plan_never_becomes_active() {
        let mut job = job("TR-1", &["B1"]);
        assert_eq!(derive_state(Step::RoutePlanned, &job), EntryState::Pending);

        job.trip_start = confirmed(8, 0);
        assert_eq!(derive_state(Step::RoutePlanned, &job), EntryState::Pending);

        job.depot_arrival = confirmed(8, 30);
        assert_eq!(derive_state(Step::RoutePlanned, &job), EntryState::Pending);

        job.pickup = confirmed(9, 0);
        assert_eq!(derive_state(Step::RoutePlanned, &job), EntryState::Completed);
    }

    #[test]
    fn route_plan_borrows_the_pickup_timestamp() {
        let mut job = job("TR-1", &["B1"]);
        job.pickup = confirmed(9, 0);

        assert_eq!(derive_state(Step::RoutePlanned, &job), EntryState::Completed);
        assert_eq!(confirmed_at(Step::RoutePlanned.confirmation(&job).as_ref()), Some(at(9, 0)));

        job.route_order = Some(vec!["B1".into()]);
        assert_eq!(confirmed_at(Step::RoutePlanned.confirmation(&job).as_ref()), Some(at(9, 0)));

        job.route_planned = confirmed(9, 10);
        assert_eq!(confirmed_at(Step::RoutePlanned.confirmation(&job).as_ref()), Some(at(9, 10)));
    }

    #[test]
    fn route_order_alone_completes_the_plan() {
        let mut job = job("TR-1", &["B1"]);
        job.route_order = Some(vec!["B1".into()]);

        assert_eq!(derive_state(Step::RoutePlanned, &job), EntryState::Completed);
        assert_eq!(confirmed_at(Step::RoutePlanned.confirmation(&job).as_ref()), None);
    }

    #[test]
    fn confirmation_without_prerequisite_still_completes() {
        let mut job = job("TR-1", &[]);
        job.pickup = confirmed(9, 0);

        assert_eq!(derive_state(Step::DepotArrival, &job), EntryState::Pending);
        assert_eq!(derive_state(Step::Pickup, &job), EntryState::Completed);
    }

    #[test]
    fn only_the_first_active_entry_keeps_the_cursor() {
        let mut activation = Activation::default();

        assert_eq!(activation.settle(EntryState::Completed), EntryState::Completed);
        assert!(!activation.is_consumed());
        assert_eq!(activation.settle(EntryState::Active), EntryState::Active);
        assert_eq!(activation.settle(EntryState::Active), EntryState::Pending);
        assert_eq!(activation.settle(EntryState::Completed), EntryState::Completed);
        assert_eq!(activation.settle(EntryState::Pending), EntryState::Pending);
        assert!(activation.is_consumed());
    }
}
