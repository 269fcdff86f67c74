use checker::{check_all, CheckSession};
use config::Config;

use logger::init_default_logger;

mod checker;
mod config;
mod constants;
mod eligibility;
mod logger;
mod parser;
mod report;
mod schemas;
#[cfg(test)]
mod test_utils;
mod utils;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let _guard = init_default_logger();

    let config = Config::read_default().await?;
    let mut session = CheckSession::default();

    check_all(&config, &mut session)
        .await
        .inspect_err(|e| tracing::error!("Check failed: {e}"))?;

    Ok(())
}
