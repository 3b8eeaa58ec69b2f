use derive_more::{Display, From};
use derive_new::new;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::{confirmed_at, Confirmation, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, From, Display)]
#[serde(transparent)]
pub struct BranchId(String);

impl BranchId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BranchId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BranchId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

crate::define_labels! {
    /// Delivery status of a single destination branch.
    pub enum BranchStatus (default Pending) {
        Pending => "pending",
        Arrived => "arrived",
        Delivered => "delivered",
    }
}

/// One destination branch of a delivery job.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct BranchWaypoint {
    pub branch_id: BranchId,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub branch_name: String,
    #[new(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub status: BranchStatus,
    #[new(default)]
    #[serde(default)]
    pub arrival: Option<Confirmation>,
    #[new(default)]
    #[serde(default)]
    pub delivery: Option<Confirmation>,
}

impl BranchWaypoint {
    pub fn is_delivered(&self) -> bool {
        self.status == BranchStatus::Delivered
    }

    /// A delivered branch counts as arrived even when the crew never confirmed the arrival.
    pub fn has_arrived(&self) -> bool {
        self.arrival.is_some() || self.is_delivered()
    }

    /// Time shown on the arrival step.
    ///
    /// Delivered branches whose arrival record lacks a timestamp borrow the delivery timestamp,
    /// so the step still lands at a sensible position in the timeline.
    pub fn arrival_time(&self) -> Option<Timestamp> {
        confirmed_at(self.arrival.as_ref()).or_else(|| {
            self.is_delivered()
                .then(|| confirmed_at(self.delivery.as_ref()))
                .flatten()
        })
    }

    pub fn delivery_time(&self) -> Option<Timestamp> {
        confirmed_at(self.delivery.as_ref())
    }

    pub fn display_name(&self) -> &str {
        if self.branch_name.trim().is_empty() {
            self.branch_id.as_str()
        } else {
            &self.branch_name
        }
    }
}
