use iss_pass_bot::config::AppConfig;
use iss_pass_bot::logging;
use iss_pass_bot::module::notify::{Notifier, TelegramNotifier};
use iss_pass_bot::module::pass::N2yoClient;
use iss_pass_bot::service;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize logging
    logging::init_logging(&config.log_level);

    tracing::info!("iss-pass-bot starting...");

    let source = N2yoClient::new(&config.n2yo_api_key)?;

    let notifier = match &config.telegram {
        Some(telegram) => Some(TelegramNotifier::new(telegram)?),
        None => None,
    };

    service::run(
        &config,
        &source,
        notifier.as_ref().map(|n| n as &dyn Notifier),
    )
    .await
}
