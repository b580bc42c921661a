use crate::style::scale::MagnitudeScale;
use serde::{Deserialize, Serialize};

/// One color swatch and its magnitude-range label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub color: String,
    pub label: String,
}

/// Static legend derived from the same scale that styles the markers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: String,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// One entry per bucket, in bucket order, labeled `low–high`. Deriving
    /// from the scale keeps legend and classifier from drifting apart.
    pub fn from_scale(scale: &MagnitudeScale) -> Self {
        let entries = scale
            .buckets
            .iter()
            .map(|bucket| LegendEntry {
                color: bucket.color.clone(),
                label: format!("{}\u{2013}{}", bucket.low, bucket.high),
            })
            .collect();
        Self {
            title: "Intensity of Earthquake".to_string(),
            entries,
        }
    }
}
