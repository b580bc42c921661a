use crate::feed::earthquake::EarthquakeRecord;
use crate::style::scale::MagnitudeScale;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stroke weight applied to every circle marker.
pub const MARKER_WEIGHT: f64 = 1.0;
/// Stroke opacity applied to every circle marker.
pub const MARKER_OPACITY: f64 = 0.8;
/// Fill opacity applied to every circle marker.
pub const MARKER_FILL_OPACITY: f64 = 0.6;
/// Visual tuning knob: marker radius is magnitude times this factor.
pub const DEFAULT_SCALE_FACTOR: f64 = 5.0;

const UNKNOWN_PLACE: &str = "Unknown location";

/// A renderable point marker handed to the mapping host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleMarker {
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
    pub color: String,
    pub fill_color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
    pub popup: String,
}

/// Projects one earthquake record into a styled circle marker.
///
/// A missing magnitude is treated as 0.0 (fallback color, zero radius) and a
/// missing place as "Unknown location"; the record is never dropped here.
pub fn project(
    record: &EarthquakeRecord,
    scale: &MagnitudeScale,
    scale_factor: f64,
) -> CircleMarker {
    let mag = record.mag.unwrap_or(0.0);
    let color = scale.classify(mag).to_string();
    CircleMarker {
        lat: record.lat,
        lon: record.lon,
        radius: (mag * scale_factor).max(0.0),
        fill_color: color.clone(),
        color,
        weight: MARKER_WEIGHT,
        opacity: MARKER_OPACITY,
        fill_opacity: MARKER_FILL_OPACITY,
        popup: popup_text(record),
    }
}

fn popup_text(record: &EarthquakeRecord) -> String {
    let mut popup = format!(
        "Location: {}",
        record.place.as_deref().unwrap_or(UNKNOWN_PLACE)
    );
    if let Some(date) = record
        .time_ms
        .and_then(DateTime::<Utc>::from_timestamp_millis)
    {
        popup.push_str(&format!("<br>Date: {}", date.format("%Y-%m-%d %H:%M:%S UTC")));
    }
    popup.push_str(&format!("<br>Magnitude: {}", record.mag.unwrap_or(0.0)));
    if let Some(url) = record.url.as_deref() {
        popup.push_str(&format!(
            "<br>More Info <a href=\"{url}\" target=\"_blank\">{url}</a>"
        ));
    }
    popup
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testville() -> EarthquakeRecord {
        EarthquakeRecord {
            id: Some("test1".to_string()),
            place: Some("10km N of Testville".to_string()),
            time_ms: Some(1_700_000_000_000),
            mag: Some(6.0),
            url: Some("http://x".to_string()),
            lon: -120.5,
            lat: 36.1,
            depth: 8.2,
        }
    }

    #[test]
    fn testville_record_gets_the_strong_bucket() {
        let marker = project(&testville(), &MagnitudeScale::default(), 5.0);
        assert_eq!(marker.color, "#C50000");
        assert_eq!(marker.fill_color, "#C50000");
        assert_eq!(marker.radius, 30.0);
        assert!(marker.popup.contains("Testville"));
        assert!(marker.popup.contains("6"));
        assert!(marker.popup.contains("http://x"));
    }

    #[test]
    fn radius_scales_linearly_with_magnitude() {
        let scale = MagnitudeScale::default();
        let mut record = testville();
        record.mag = Some(2.0);
        let small = project(&record, &scale, 4.0);
        record.mag = Some(4.0);
        let large = project(&record, &scale, 4.0);
        assert_eq!(large.radius, 2.0 * small.radius);
    }

    #[test]
    fn missing_attributes_get_documented_defaults() {
        let record = EarthquakeRecord {
            id: None,
            place: None,
            time_ms: None,
            mag: None,
            url: None,
            lon: 0.0,
            lat: 0.0,
            depth: 0.0,
        };
        let marker = project(&record, &MagnitudeScale::default(), 5.0);
        assert_eq!(marker.radius, 0.0);
        assert_eq!(marker.color, "#AAFD5D");
        assert!(marker.popup.contains("Unknown location"));
        assert!(marker.popup.contains("Magnitude: 0"));
        assert!(!marker.popup.contains("Date:"));
        assert!(!marker.popup.contains("More Info"));
    }

    #[test]
    fn negative_magnitude_never_yields_negative_radius() {
        let mut record = testville();
        record.mag = Some(-0.4);
        let marker = project(&record, &MagnitudeScale::default(), 5.0);
        assert_eq!(marker.radius, 0.0);
        assert_eq!(marker.color, "#AAFD5D");
    }

    #[test]
    fn popup_renders_epoch_millis_as_utc_date() {
        let marker = project(&testville(), &MagnitudeScale::default(), 5.0);
        assert!(marker.popup.contains("Date: 2023-11-14 22:13:20 UTC"));
    }
}
