use derive_more::{Display, From};
use derive_new::new;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::{BranchId, BranchWaypoint, Confirmation, FuelingRecord, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, From, Display)]
#[serde(transparent)]
pub struct TransportNumber(String);

impl TransportNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TransportNumber {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

crate::define_labels! {
    /// Lifecycle label of a whole delivery job.
    pub enum JobStatus (default Created) {
        Created => "created",
        Departed => "departed",
        PickedUp => "picked-up",
        RoutePlanned => "route-planned",
        InDelivery => "in-delivery",
        Completed => "completed"
    }
}

impl JobStatus {
    /// Non-terminal statuses past the initial dispatch.
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            Self::Departed | Self::PickedUp | Self::RoutePlanned | Self::InDelivery
        )
    }

    pub fn is_complete(&self) -> bool {
        *self == Self::Completed
    }
}

/// Snapshot of one delivery trip as reported by the dispatch system.
///
/// Every confirmation is optional: a missing record means the step has not happened yet.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(alias = "transportNumber")]
    pub transport_no: TransportNumber,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub status: JobStatus,

    #[new(default)]
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[new(default)]
    #[serde(default)]
    pub driver_name: Option<String>,
    #[new(default)]
    #[serde(default)]
    pub vehicle: Option<String>,
    #[new(default)]
    #[serde(default)]
    pub source_branch: Option<String>,

    #[new(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub branches: Vec<BranchWaypoint>,
    #[new(default)]
    #[serde(default)]
    pub route_order: Option<Vec<BranchId>>,

    #[new(default)]
    #[serde(default)]
    pub trip_start: Option<Confirmation>,
    #[new(default)]
    #[serde(default)]
    pub depot_arrival: Option<Confirmation>,
    #[new(default)]
    #[serde(default)]
    pub pickup: Option<Confirmation>,
    #[new(default)]
    #[serde(default, alias = "routePlan")]
    pub route_planned: Option<Confirmation>,
    #[new(default)]
    #[serde(default)]
    pub end_trip: Option<Confirmation>,
    #[new(default)]
    #[serde(default, alias = "odometer")]
    pub end_odometer: Option<f64>,

    #[new(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default, alias = "fuelLogs")]
    pub fuelings: Vec<FuelingRecord>,
}

impl Job {
    /// A non-empty route order is itself evidence that the route was planned.
    pub fn has_route_plan(&self) -> bool {
        self.route_planned.is_some() || self.route_order.as_ref().is_some_and(|order| !order.is_empty())
    }

    pub fn all_delivered(&self) -> bool {
        self.branches.iter().all(BranchWaypoint::is_delivered)
    }

    /// The trip counts as closed once it is marked completed and the end-of-trip reading exists.
    pub fn is_closed(&self) -> bool {
        self.status.is_complete() && (self.end_trip.is_some() || self.end_odometer.is_some())
    }

    pub fn is_driven_by(&self, driver: &str) -> bool {
        self.driver_name
            .as_deref()
            .is_some_and(|name| name.trim().eq_ignore_ascii_case(driver.trim()))
    }
}
