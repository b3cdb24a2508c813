///! Run orchestration: fetch passes, compose the message, deliver it.

use anyhow::Result;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::module::notify::Notifier;
use crate::module::pass::{formatter, PassSource};

/// Execute one fetch-format-notify cycle.
///
/// Exits early (successfully) when no passes are predicted. A `None`
/// notifier means messaging credentials were absent; the send is skipped
/// with a diagnostic and the run still succeeds. Any fetch, formatting or
/// delivery error propagates and fails the run.
pub async fn run(
    config: &AppConfig,
    source: &dyn PassSource,
    notifier: Option<&dyn Notifier>,
) -> Result<()> {
    info!(
        "Fetching ISS visible passes for the next {} day(s)...",
        config.lookahead_days
    );

    let passes = source
        .fetch_passes(
            &config.observer,
            config.lookahead_days,
            config.min_visibility_minutes,
        )
        .await?;

    if passes.is_empty() {
        info!("No visible ISS passes. No alert sent.");
        return Ok(());
    }

    info!("{} visible pass(es) predicted", passes.len());

    let message = formatter::compose_message(&passes, config.local_tz, config.lookahead_days)?;

    // The composed message itself goes to stdout verbatim
    println!("{}", message);

    match notifier {
        Some(notifier) => notifier.send_text(&message).await?,
        None => warn!("Telegram config missing. No message sent."),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Observer, LOCAL_TZ};
    use crate::error::RequestError;
    use crate::module::pass::PassRecord;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeSource {
        passes: Vec<PassRecord>,
    }

    #[async_trait]
    impl PassSource for FakeSource {
        async fn fetch_passes(
            &self,
            _observer: &Observer,
            _days: u32,
            _min_visibility_minutes: u32,
        ) -> Result<Vec<PassRecord>, RequestError> {
            Ok(self.passes.clone())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send_text(&self, text: &str) -> Result<()> {
            self.sent.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn test_config() -> AppConfig {
        AppConfig {
            observer: Observer {
                latitude: 51.5,
                longitude: -0.12,
                altitude: 35.0,
            },
            n2yo_api_key: "k3y".to_string(),
            telegram: None,
            local_tz: LOCAL_TZ,
            lookahead_days: 1,
            min_visibility_minutes: 1,
            log_level: "info".to_string(),
        }
    }

    fn record(start_utc: i64, max_el: f64) -> PassRecord {
        PassRecord {
            start_utc,
            duration: 125,
            max_elevation: max_el,
            start_azimuth: 10.0,
            end_azimuth: 200.0,
        }
    }

    #[tokio::test]
    async fn test_empty_fetch_sends_nothing() {
        let source = FakeSource { passes: vec![] };
        let notifier = RecordingNotifier::default();

        run(&test_config(), &source, Some(&notifier)).await.unwrap();

        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_one_message_with_line_per_pass() {
        let source = FakeSource {
            passes: vec![
                record(1_700_000_000, 75.0),
                record(1_700_050_000, 45.0),
                record(1_700_100_000, 12.0),
            ],
        };
        let notifier = RecordingNotifier::default();

        run(&test_config(), &source, Some(&notifier)).await.unwrap();

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);

        let (_, body) = sent[0].split_once("\n\n").unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 3);
        // Input order preserved
        assert!(lines[0].contains("overhead (75°)"));
        assert!(lines[1].contains("high (45°)"));
        assert!(lines[2].contains("low (12°)"));
    }

    #[tokio::test]
    async fn test_missing_credentials_skips_send_and_succeeds() {
        let source = FakeSource {
            passes: vec![record(1_700_000_000, 75.0)],
        };

        run(&test_config(), &source, None).await.unwrap();
    }
}
