use crate::prelude::{FeedError, FeedResult};
use crate::telemetry::log::LogManager;
use serde::Deserialize;
use serde_json::Value;

/// One earthquake event pulled from a USGS summary feed.
///
/// Attribute fields stay optional: the feed routinely publishes events with
/// a null magnitude or place, and those still get a marker (with documented
/// defaults applied at projection time). Only the point geometry is
/// mandatory, since a marker without a position cannot be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeRecord {
    pub id: Option<String>,
    pub place: Option<String>,
    pub time_ms: Option<i64>,
    pub mag: Option<f64>,
    pub url: Option<String>,
    pub lon: f64,
    pub lat: f64,
    pub depth: f64,
}

/// Parsed earthquake feed plus the number of records dropped on the floor.
#[derive(Debug, Clone, Default)]
pub struct EarthquakeFeed {
    pub records: Vec<EarthquakeRecord>,
    pub skipped: usize,
}

#[derive(Deserialize)]
struct RawCollection {
    #[serde(default)]
    features: Vec<Value>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    properties: RawProperties,
    #[serde(default)]
    geometry: Option<RawGeometry>,
}

#[derive(Deserialize, Default)]
struct RawProperties {
    #[serde(default)]
    place: Option<String>,
    #[serde(default)]
    time: Option<i64>,
    #[serde(default)]
    mag: Option<f64>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Vec<f64>,
}

impl EarthquakeFeed {
    /// Parses a GeoJSON `FeatureCollection` body.
    ///
    /// The collection shape itself must parse; a feature that fails to parse
    /// or lacks a usable point geometry is skipped and counted rather than
    /// aborting the whole feed.
    pub fn from_json(body: &str) -> FeedResult<Self> {
        let logger = LogManager::new();
        let collection: RawCollection = serde_json::from_str(body)
            .map_err(|err| FeedError::MalformedCollection(err.to_string()))?;

        let mut records = Vec::with_capacity(collection.features.len());
        let mut skipped = 0;
        for feature in collection.features {
            match parse_feature(feature) {
                Ok(record) => records.push(record),
                Err(err) => {
                    skipped += 1;
                    logger.flag(&format!("skipping earthquake record: {}", err));
                }
            }
        }

        Ok(Self { records, skipped })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_feature(feature: Value) -> FeedResult<EarthquakeRecord> {
    let raw: RawFeature = serde_json::from_value(feature)
        .map_err(|err| FeedError::MalformedRecord(err.to_string()))?;

    let geometry = raw.geometry.ok_or(FeedError::MissingGeometry)?;
    if geometry.kind != "Point" || geometry.coordinates.len() < 2 {
        return Err(FeedError::MissingGeometry);
    }

    Ok(EarthquakeRecord {
        id: raw.id,
        place: raw.properties.place,
        time_ms: raw.properties.time,
        mag: raw.properties.mag,
        url: raw.properties.url,
        lon: geometry.coordinates[0],
        lat: geometry.coordinates[1],
        depth: geometry.coordinates.get(2).copied().unwrap_or(0.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "id": "us7000abcd",
                "properties": {
                    "place": "10km N of Testville",
                    "time": 1700000000000,
                    "mag": 6.0,
                    "url": "http://x"
                },
                "geometry": {"type": "Point", "coordinates": [-120.5, 36.1, 8.2]}
            },
            {
                "properties": {"place": "nowhere", "mag": 2.0},
                "geometry": null
            }
        ]
    }"#;

    #[test]
    fn feed_parses_records_and_skips_missing_geometry() {
        let feed = EarthquakeFeed::from_json(SAMPLE).unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.skipped, 1);

        let record = &feed.records[0];
        assert_eq!(record.place.as_deref(), Some("10km N of Testville"));
        assert_eq!(record.mag, Some(6.0));
        assert_eq!(record.lon, -120.5);
        assert_eq!(record.lat, 36.1);
        assert_eq!(record.depth, 8.2);
    }

    #[test]
    fn feed_with_empty_features_is_not_an_error() {
        let feed = EarthquakeFeed::from_json(r#"{"type":"FeatureCollection","features":[]}"#)
            .unwrap();
        assert!(feed.is_empty());
        assert_eq!(feed.skipped, 0);
    }

    #[test]
    fn feed_tolerates_null_attributes() {
        let body = r#"{"features":[{
            "properties": {"place": null, "time": null, "mag": null, "url": null},
            "geometry": {"type": "Point", "coordinates": [10.0, 20.0]}
        }]}"#;
        let feed = EarthquakeFeed::from_json(body).unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.records[0].mag, None);
        assert_eq!(feed.records[0].depth, 0.0);
    }

    #[test]
    fn feed_rejects_malformed_collection() {
        assert!(EarthquakeFeed::from_json("not json").is_err());
    }

    #[test]
    fn feed_skips_non_point_geometry() {
        let body = r#"{"features":[{
            "properties": {"mag": 3.0},
            "geometry": {"type": "LineString", "coordinates": [1.0, 2.0]}
        }]}"#;
        let feed = EarthquakeFeed::from_json(body).unwrap();
        assert!(feed.is_empty());
        assert_eq!(feed.skipped, 1);
    }
}
