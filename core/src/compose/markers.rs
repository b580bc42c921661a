use crate::feed::earthquake::EarthquakeFeed;
use crate::prelude::LayerStats;
use crate::style::marker::{self, CircleMarker};
use crate::style::scale::MagnitudeScale;
use serde::{Deserialize, Serialize};

/// Earthquake overlay: every surviving feed record projected into a marker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkerOverlay {
    pub markers: Vec<CircleMarker>,
    pub stats: LayerStats,
}

/// Builds the marker overlay for one render pass. An empty feed yields an
/// empty overlay, not an error.
pub fn build_marker_overlay(
    feed: &EarthquakeFeed,
    scale: &MagnitudeScale,
    scale_factor: f64,
) -> MarkerOverlay {
    let markers: Vec<CircleMarker> = feed
        .records
        .iter()
        .map(|record| marker::project(record, scale, scale_factor))
        .collect();
    let stats = LayerStats {
        projected: markers.len(),
        skipped: feed.skipped,
    };
    MarkerOverlay { markers, stats }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_feed_composes_into_empty_overlay() {
        let overlay = build_marker_overlay(
            &EarthquakeFeed::default(),
            &MagnitudeScale::default(),
            5.0,
        );
        assert!(overlay.markers.is_empty());
        assert_eq!(overlay.stats, LayerStats::default());
    }

    #[test]
    fn overlay_counts_projected_and_skipped_records() {
        let body = r#"{"features":[
            {"properties": {"mag": 3.2}, "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}},
            {"properties": {"mag": 5.0}, "geometry": null}
        ]}"#;
        let feed = EarthquakeFeed::from_json(body).unwrap();
        let overlay = build_marker_overlay(&feed, &MagnitudeScale::default(), 5.0);
        assert_eq!(overlay.stats.projected, 1);
        assert_eq!(overlay.stats.skipped, 1);
        assert_eq!(overlay.markers[0].color, "#F29F4B");
    }
}
