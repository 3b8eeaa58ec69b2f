use delivery_timeline::config::Config;
use delivery_timeline::error::{ApplicationError, ConfigSnafu, ReplSnafu};
use delivery_timeline::{logger, repl};
use dotenvy::dotenv;
use snafu::ResultExt;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    dotenv().ok();

    let config = Config::from_env().context(ConfigSnafu)?;

    let _guard = logger::init(&config)?;

    let mut inspector = repl::Repl::new().context(ReplSnafu)?;
    repl::start(&mut inspector, &config).await.context(ReplSnafu)
}
