///! Pass formatting - turn raw pass records into display lines
///!
///! Pure transformations only; no I/O. Output order always matches input
///! order.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use super::types::PassRecord;

/// Eight-point compass rose, 45 degrees per sector.
const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Map an azimuth in degrees to the nearest compass point.
///
/// Sectors are centered on the points, so the N sector runs from 337.5
/// up to 22.5. Indexing is modulo 8, which makes the mapping periodic:
/// 360 lands back on N.
pub fn az_to_dir(az_deg: f64) -> &'static str {
    let idx = (((az_deg + 22.5) / 45.0).floor() as i64).rem_euclid(8) as usize;
    COMPASS_POINTS[idx]
}

/// Friendly label for a maximum elevation.
pub fn elevation_label(max_el: f64) -> &'static str {
    if max_el >= 70.0 {
        "overhead"
    } else if max_el >= 40.0 {
        "high"
    } else {
        "low"
    }
}

/// Render a duration in seconds as `<minutes>m<seconds>s`, seconds
/// zero-padded to two digits (125 -> "2m05s").
pub fn format_duration(total_seconds: u32) -> String {
    format!("{}m{:02}s", total_seconds / 60, total_seconds % 60)
}

/// Format one pass record as a single display line.
///
/// The start timestamp is interpreted as UTC and converted to `tz` for
/// display. Fails only if the timestamp is outside the representable
/// range, which fails the whole run.
pub fn format_pass(pass: &PassRecord, tz: Tz) -> Result<String> {
    let start_utc: DateTime<Utc> = DateTime::from_timestamp(pass.start_utc, 0)
        .with_context(|| format!("Pass start timestamp out of range: {}", pass.start_utc))?;
    let local_start = start_utc.with_timezone(&tz);

    Ok(format!(
        "🕒 {} – {} – {} ({:.0}°), {} → {}",
        local_start.format("%Y-%m-%d %H:%M"),
        format_duration(pass.duration),
        elevation_label(pass.max_elevation),
        pass.max_elevation,
        az_to_dir(pass.start_azimuth),
        az_to_dir(pass.end_azimuth),
    ))
}

/// Assemble the outbound message: header, blank line, one line per pass.
pub fn compose_message(passes: &[PassRecord], tz: Tz, days: u32) -> Result<String> {
    let lines = passes
        .iter()
        .map(|p| format_pass(p, tz))
        .collect::<Result<Vec<_>>>()?;

    Ok(format!(
        "🚀 ISS visibility over home – next {} day\n\n{}",
        days,
        lines.join("\n")
    ))
}
