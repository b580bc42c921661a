use crate::feed::plates::PlateFeed;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed line styling shared by every plate-boundary geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateStyle {
    pub color: String,
    pub weight: f64,
}

impl Default for PlateStyle {
    fn default() -> Self {
        Self {
            color: "green".to_string(),
            weight: 1.2,
        }
    }
}

/// Plate-boundary overlay: the raw collection plus its uniform style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateOverlay {
    pub collection: Value,
    pub style: PlateStyle,
}

pub fn build_plate_overlay(feed: &PlateFeed) -> PlateOverlay {
    PlateOverlay {
        collection: feed.to_feature_collection(),
        style: PlateStyle::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plate_overlay_applies_one_uniform_style() {
        let feed = PlateFeed::from_json(r#"{"features":[{"geometry":null}]}"#).unwrap();
        let overlay = build_plate_overlay(&feed);
        assert_eq!(overlay.style.color, "green");
        assert_eq!(overlay.style.weight, 1.2);
        assert_eq!(overlay.collection["features"].as_array().unwrap().len(), 1);
    }
}
