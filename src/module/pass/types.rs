use serde::Deserialize;

/// One predicted visible pass from the N2YO API.
///
/// Field names follow the wire format of the "visualpasses" endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PassRecord {
    /// Pass start time, Unix seconds UTC
    #[serde(rename = "startUTC")]
    pub start_utc: i64,

    /// Visible duration in seconds
    pub duration: u32,

    /// Maximum elevation above the horizon, degrees
    #[serde(rename = "maxEl")]
    pub max_elevation: f64,

    /// Azimuth at the start of the pass, degrees from true north
    #[serde(rename = "startAz")]
    pub start_azimuth: f64,

    /// Azimuth at the end of the pass, degrees from true north
    #[serde(rename = "endAz")]
    pub end_azimuth: f64,
}

/// Response envelope of the "visualpasses" endpoint.
///
/// N2YO omits the `passes` key entirely when there are no passes in the
/// window, so it defaults to empty.
#[derive(Debug, Deserialize)]
pub struct VisualPassesResponse {
    #[serde(default)]
    pub passes: Vec<PassRecord>,
}
