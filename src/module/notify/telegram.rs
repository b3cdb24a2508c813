///! Telegram delivery via the bot sendMessage API
use async_trait::async_trait;
use std::time::Duration;

use super::Notifier;
use crate::config::TelegramConfig;
use crate::error::RequestError;

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

const REQUEST_TIMEOUT_SECONDS: u64 = 60;

/// Notifier backed by a Telegram bot.
///
/// One POST per message, no retry. Credential absence is handled before
/// construction: without a token and chat id there is no notifier.
pub struct TelegramNotifier {
    client: reqwest::Client,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &TelegramConfig) -> Result<Self, RequestError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()?;

        Ok(Self {
            client,
            token: config.token.clone(),
            chat_id: config.chat_id.clone(),
        })
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", TELEGRAM_API_URL, self.token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_text(&self, text: &str) -> anyhow::Result<()> {
        let params = [("chat_id", self.chat_id.as_str()), ("text", text)];

        let response = self
            .client
            .post(self.send_message_url())
            .form(&params)
            .send()
            .await
            .map_err(RequestError::from)?;

        if !response.status().is_success() {
            return Err(RequestError::Status {
                status: response.status(),
                endpoint: format!("{}/bot<token>/sendMessage", TELEGRAM_API_URL),
            }
            .into());
        }

        tracing::debug!("Telegram message delivered to chat {}", self.chat_id);

        Ok(())
    }
}
