///! Runtime configuration, built once from the process environment at
///! startup and passed by reference into each component.

use anyhow::{Context, Result};
use chrono_tz::Tz;

/// All passes are reported in this zone.
pub const LOCAL_TZ: Tz = chrono_tz::Europe::London;

/// Look ahead this many days when requesting passes.
pub const LOOKAHEAD_DAYS: u32 = 1;

/// Minimum visible duration (minutes) for a pass to be reported.
pub const MIN_VISIBILITY_MINUTES: u32 = 1;

/// Ground station position used for pass prediction.
#[derive(Debug, Clone, Copy)]
pub struct Observer {
    /// Latitude in decimal degrees, north positive
    pub latitude: f64,

    /// Longitude in decimal degrees, east positive
    pub longitude: f64,

    /// Altitude above sea level in meters
    pub altitude: f64,
}

/// Telegram delivery credentials
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub observer: Observer,

    /// N2YO API key
    pub n2yo_api_key: String,

    /// Delivery credentials; `None` when either variable is unset,
    /// in which case the send is skipped with a diagnostic.
    pub telegram: Option<TelegramConfig>,

    pub local_tz: Tz,
    pub lookahead_days: u32,
    pub min_visibility_minutes: u32,
    pub log_level: String,
}

impl AppConfig {
    /// Build the configuration from the process environment.
    ///
    /// `LAT`, `LON`, `ALT` and `API_KEY` are required; a missing or
    /// unparsable value is a startup error. `TELEGRAM_TOKEN` and
    /// `TELEGRAM_CHAT_ID` are optional as a pair.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env`, but against an arbitrary variable lookup so
    /// tests can substitute a map for the real environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let observer = Observer {
            latitude: required_f64(&lookup, "LAT")?,
            longitude: required_f64(&lookup, "LON")?,
            altitude: required_f64(&lookup, "ALT")?,
        };

        let n2yo_api_key = lookup("API_KEY")
            .filter(|v| !v.trim().is_empty())
            .context("Missing required environment variable API_KEY")?;

        let telegram = match (lookup("TELEGRAM_TOKEN"), lookup("TELEGRAM_CHAT_ID")) {
            (Some(token), Some(chat_id)) if !token.is_empty() && !chat_id.is_empty() => {
                Some(TelegramConfig { token, chat_id })
            }
            _ => None,
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(default_log_level);

        Ok(Self {
            observer,
            n2yo_api_key,
            telegram,
            local_tz: LOCAL_TZ,
            lookahead_days: LOOKAHEAD_DAYS,
            min_visibility_minutes: MIN_VISIBILITY_MINUTES,
            log_level,
        })
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn required_f64(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<f64> {
    let raw = lookup(name)
        .with_context(|| format!("Missing required environment variable {}", name))?;
    raw.trim()
        .parse()
        .with_context(|| format!("Invalid numeric value for {}: {:?}", name, raw))
}
