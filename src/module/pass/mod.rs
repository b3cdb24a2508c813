///! ISS pass prediction module
///!
///! Fetches predicted visible passes from the N2YO "visualpasses" endpoint
///! and turns them into display lines.
///!
///! ## Main Components
///! - `PassSource`: narrow trait over "fetch passes for an observer"
///! - `N2yoClient`: live implementation against api.n2yo.com
///! - `formatter`: pure record-to-line transformation

use async_trait::async_trait;

use crate::config::Observer;
use crate::error::RequestError;

// ============ Wire Types ============
mod types;
pub use types::{PassRecord, VisualPassesResponse};

// ============ API Client ============
mod api_client;
pub use api_client::N2yoClient;

// ============ Formatting ============
pub mod formatter;

/// Source of predicted passes.
///
/// Abstracted so tests can substitute a deterministic fake for the live
/// HTTP client.
#[async_trait]
pub trait PassSource {
    /// Fetch predicted visible passes for `observer` over the next `days`
    /// days, keeping only passes visible for at least
    /// `min_visibility_minutes`. May return an empty list.
    async fn fetch_passes(
        &self,
        observer: &Observer,
        days: u32,
        min_visibility_minutes: u32,
    ) -> Result<Vec<PassRecord>, RequestError>;
}
