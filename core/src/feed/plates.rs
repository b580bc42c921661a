use crate::prelude::{FeedError, FeedResult};
use serde::Deserialize;
use serde_json::{json, Value};

/// Tectonic-plate boundary feed.
///
/// Plate features are carried as opaque GeoJSON values: nothing beyond the
/// geometry is consumed, and every boundary is styled uniformly downstream.
#[derive(Debug, Clone, Default)]
pub struct PlateFeed {
    pub features: Vec<Value>,
}

#[derive(Deserialize)]
struct RawCollection {
    #[serde(default)]
    features: Vec<Value>,
}

impl PlateFeed {
    pub fn from_json(body: &str) -> FeedResult<Self> {
        let collection: RawCollection = serde_json::from_str(body)
            .map_err(|err| FeedError::MalformedCollection(err.to_string()))?;
        Ok(Self {
            features: collection.features,
        })
    }

    /// Re-wraps the features as a `FeatureCollection` for the rendering host.
    pub fn to_feature_collection(&self) -> Value {
        json!({
            "type": "FeatureCollection",
            "features": self.features,
        })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plate_feed_round_trips_features_untouched() {
        let body = r#"{
            "type": "FeatureCollection",
            "features": [{
                "properties": {"PlateName": "Nazca"},
                "geometry": {"type": "LineString", "coordinates": [[0.0, 1.0], [2.0, 3.0]]}
            }]
        }"#;
        let feed = PlateFeed::from_json(body).unwrap();
        assert_eq!(feed.len(), 1);

        let collection = feed.to_feature_collection();
        assert_eq!(collection["type"], "FeatureCollection");
        assert_eq!(
            collection["features"][0]["geometry"]["type"],
            "LineString"
        );
    }

    #[test]
    fn plate_feed_rejects_malformed_body() {
        assert!(PlateFeed::from_json("{").is_err());
    }
}
