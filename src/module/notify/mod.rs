///! Message delivery module

use async_trait::async_trait;

mod telegram;
pub use telegram::TelegramNotifier;

/// Outbound message channel.
///
/// Abstracted so tests can count sends instead of performing real
/// network I/O.
#[async_trait]
pub trait Notifier {
    /// Deliver one text message. A failed delivery propagates and aborts
    /// the run.
    async fn send_text(&self, text: &str) -> anyhow::Result<()>;
}
