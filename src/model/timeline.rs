use serde::{Deserialize, Serialize};

use super::{BranchId, Timestamp, TransportNumber};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryState {
    Completed,
    Active,
    Pending,
}

/// What a timeline entry stands for. The view layer picks its icon from this tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Milestone {
    Received,
    TripStart,
    DepotArrival,
    Pickup,
    RoutePlanned,
    BranchArrival { branch_id: BranchId },
    BranchUnload { branch_id: BranchId },
    TripEnd,
    Fueling { index: usize },
}

impl Milestone {
    /// Stable identity of the entry, unique within one job.
    pub fn key(&self) -> String {
        match self {
            Self::Received => "received".to_string(),
            Self::TripStart => "trip-start".to_string(),
            Self::DepotArrival => "depot-arrival".to_string(),
            Self::Pickup => "pickup".to_string(),
            Self::RoutePlanned => "route-planned".to_string(),
            Self::BranchArrival { branch_id } => format!("arrival:{branch_id}"),
            Self::BranchUnload { branch_id } => format!("unload:{branch_id}"),
            Self::TripEnd => "trip-end".to_string(),
            Self::Fueling { index } => format!("fueling:{index}"),
        }
    }
}

/// Generation order of an entry.
///
/// `Floating` entries are not bound to a position in the milestone sequence and only ever move by
/// their timestamp. On equal timestamps they sort after every `Ordered` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sequence {
    Ordered(u32),
    Floating,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: String,
    pub milestone: Milestone,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub state: EntryState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    pub sequence: Sequence,
}

impl TimelineEntry {
    pub fn new(milestone: Milestone, title: impl Into<String>, sequence: Sequence) -> Self {
        Self {
            id: milestone.key(),
            milestone,
            title: title.into(),
            subtitle: None,
            state: EntryState::Pending,
            timestamp: None,
            sequence,
        }
    }

    /// Sets the state. A timestamp is only kept on completed entries.
    pub fn with_state(mut self, state: EntryState, timestamp: Option<Timestamp>) -> Self {
        self.state = state;
        self.timestamp = match state {
            EntryState::Completed => timestamp,
            EntryState::Active | EntryState::Pending => None,
        };
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn is_completed(&self) -> bool {
        self.state == EntryState::Completed
    }

    pub fn is_active(&self) -> bool {
        self.state == EntryState::Active
    }

    /// Happened and carries a real timestamp, so it can be placed by wall-clock time.
    pub fn is_resolved(&self) -> bool {
        self.is_completed() && self.timestamp.is_some()
    }
}

/// The reconstructed progress of one job, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub transport_no: TransportNumber,
    pub entries: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub current: Option<String>,
}

impl Timeline {
    pub fn active(&self) -> Option<&TimelineEntry> {
        self.entries.iter().find(|entry| entry.is_active())
    }

    pub fn is_finished(&self) -> bool {
        self.entries.iter().all(TimelineEntry::is_completed)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            completed: self.entries.iter().filter(|entry| entry.is_completed()).count(),
            total: self.entries.len(),
            current: self.active().map(|entry| entry.id.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn milestone_fields_are_camel_case() {
        let arrival = Milestone::BranchArrival {
            branch_id: "BR-01".into(),
        };

        assert_eq!(
            serde_json::to_value(&arrival).unwrap(),
            json!({ "kind": "branch-arrival", "branchId": "BR-01" })
        );
        assert_eq!(
            serde_json::to_value(Milestone::Fueling { index: 2 }).unwrap(),
            json!({ "kind": "fueling", "index": 2 })
        );
        assert_eq!(
            serde_json::from_value::<Milestone>(json!({ "kind": "branch-unload", "branchId": "BR-01" }))
                .unwrap(),
            Milestone::BranchUnload {
                branch_id: "BR-01".into()
            }
        );
    }
}
