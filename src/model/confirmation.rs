use derive_new::new;
use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A field crew's confirmation that a milestone happened.
///
/// The record being present is what marks the milestone as reached; the timestamp inside it is
/// only used for ordering and may be missing on older records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Confirmation {
    #[serde(
        default,
        alias = "startedAt",
        alias = "confirmedAt",
        alias = "arrivedAt"
    )]
    pub at: Option<Timestamp>,
}

impl Confirmation {
    pub fn confirmed(at: Timestamp) -> Self {
        Self { at: Some(at) }
    }
}

/// Timestamp of an optional confirmation, absent when either the record or its timestamp is.
pub fn confirmed_at(confirmation: Option<&Confirmation>) -> Option<Timestamp> {
    confirmation.and_then(|confirmation| confirmation.at)
}
