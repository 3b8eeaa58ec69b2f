use snafu::{Location, Snafu};

use crate::config::ConfigError;
use crate::repl::ReplError;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ApplicationError {
    /// could not load the configuration
    Config {
        source: ConfigError,
        #[snafu(implicit)]
        location: Location,
    },

    /// Could not initialize the logger
    InitializeLogger {
        source: tracing::subscriber::SetGlobalDefaultError,
        #[snafu(implicit)]
        location: Location,
    },

    /// Could not run the timeline inspector
    Repl {
        source: ReplError,
        #[snafu(implicit)]
        location: Location,
    },
}
