///! N2YO API client for fetching predicted visible passes
use async_trait::async_trait;
use std::time::Duration;

use super::types::{PassRecord, VisualPassesResponse};
use super::PassSource;
use crate::config::Observer;
use crate::error::RequestError;

const N2YO_API_URL: &str = "https://api.n2yo.com/rest/v1/satellite/visualpasses";

/// NORAD catalog number of the ISS
const ISS_NORAD_ID: u32 = 25544;

const REQUEST_TIMEOUT_SECONDS: u64 = 60;

/// Live pass source backed by api.n2yo.com.
///
/// Issues a single GET per fetch; a failed call propagates to the caller
/// and aborts the run, there is no retry.
pub struct N2yoClient {
    client: reqwest::Client,
    api_key: String,
}

impl N2yoClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, RequestError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }

    /// Build the request URL for one observer.
    ///
    /// The path carries all prediction parameters; the key goes in the
    /// trailing query string.
    fn build_url(&self, observer: &Observer, days: u32, min_visibility_minutes: u32) -> String {
        format!(
            "{}/{}/{}/{}/{}/{}/{}/&apiKey={}",
            N2YO_API_URL,
            ISS_NORAD_ID,
            observer.latitude,
            observer.longitude,
            observer.altitude,
            days,
            min_visibility_minutes,
            self.api_key
        )
    }
}

#[async_trait]
impl PassSource for N2yoClient {
    async fn fetch_passes(
        &self,
        observer: &Observer,
        days: u32,
        min_visibility_minutes: u32,
    ) -> Result<Vec<PassRecord>, RequestError> {
        let url = self.build_url(observer, days, min_visibility_minutes);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(RequestError::Status {
                status: response.status(),
                endpoint: N2YO_API_URL.to_string(),
            });
        }

        let data: VisualPassesResponse = response.json().await?;

        tracing::debug!("Fetched {} predicted pass(es)", data.passes.len());

        Ok(data.passes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_observer() -> Observer {
        Observer {
            latitude: 51.5,
            longitude: -0.12,
            altitude: 35.0,
        }
    }

    #[test]
    fn test_build_url() {
        let client = N2yoClient::new("k3y").unwrap();
        let url = client.build_url(&test_observer(), 1, 1);
        assert_eq!(
            url,
            "https://api.n2yo.com/rest/v1/satellite/visualpasses/25544/51.5/-0.12/35/1/1/&apiKey=k3y"
        );
    }

    #[tokio::test]
    #[ignore] // Requires network connection and a real API key
    async fn test_fetch_passes_live() {
        let api_key = std::env::var("API_KEY").expect("API_KEY must be set for the live test");
        let client = N2yoClient::new(api_key).unwrap();
        let result = client.fetch_passes(&test_observer(), 1, 1).await;
        assert!(result.is_ok());
    }
}
