use derive_new::new;
use serde::{Deserialize, Serialize};

use super::Timestamp;

/// An ad-hoc fueling stop logged by the driver, independent of the milestone sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct FuelingRecord {
    #[serde(default, alias = "stationName")]
    pub station: String,
    #[serde(default, alias = "quantity")]
    pub liters: f64,
    #[serde(default)]
    pub amount: f64,
    #[serde(default, alias = "timestamp", alias = "fueledAt")]
    pub at: Option<Timestamp>,
}

impl FuelingRecord {
    pub fn summary(&self) -> String {
        format!("{:.2} L, {:.2}", self.liters, self.amount)
    }
}
