use chrono::{DateTime, NaiveDateTime, Utc};
use derive_more::{AsRef, Deref, From};
use derive_new::new;
use serde::{Deserialize, Serialize};
use snafu::Snafu;
use std::str::FromStr;

/// Naive formats accepted when the upstream data forgot its offset. They are read as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new, From, Deref, AsRef)]
pub struct Timestamp(DateTime<Utc>);

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("cannot parse timestamp `{text}`"))]
pub struct ParseTimestamp {
    pub text: String,
}

impl FromStr for Timestamp {
    type Err = ParseTimestamp;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self(datetime.with_timezone(&Utc)));
        }

        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
            .map(|naive| Self(naive.and_utc()))
            .ok_or_else(|| ParseTimestamp {
                text: input.to_string(),
            })
    }
}

impl Serialize for Timestamp {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.to_rfc3339().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
