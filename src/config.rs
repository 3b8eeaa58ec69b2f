use std::path::PathBuf;

use chrono::FixedOffset;
use serde::Deserialize;
use snafu::{Location, OptionExt, ResultExt, Snafu};

use crate::time::offset_from_minutes;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConfigError {
    /// could not read the configuration from the environment
    #[snafu(display("could not read the configuration from the environment at {location}: {source}"))]
    ConfigLoad {
        source: envy::Error,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("UTC_OFFSET_MINUTES={minutes} is not a valid offset, it must stay within a day"))]
    InvalidOffset {
        minutes: i32,
        #[snafu(implicit)]
        location: Location,
    },
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(rename = "snapshot_path")]
    pub snapshot: PathBuf,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        let config = envy::from_env::<Config>().context(ConfigLoadSnafu)?;
        Self::validate(config)
    }

    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Result<Config, ConfigError> {
        let config = envy::from_iter::<_, Config>(vars).context(ConfigLoadSnafu)?;
        Self::validate(config)
    }

    fn validate(config: Config) -> Result<Config, ConfigError> {
        config.utc_offset()?;
        Ok(config)
    }

    /// Offset used when timestamps are displayed.
    pub fn utc_offset(&self) -> Result<FixedOffset, ConfigError> {
        offset_from_minutes(self.utc_offset_minutes).context(InvalidOffsetSnafu {
            minutes: self.utc_offset_minutes,
        })
    }
}
