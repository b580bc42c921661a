use quakecore::feed::earthquake::{EarthquakeFeed, EarthquakeRecord};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for the deterministic offline sample feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    pub count: usize,
    pub seed: u64,
    pub max_magnitude: f64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            count: 80,
            seed: 0,
            max_magnitude: 9.0,
        }
    }
}

/// Builds a synthetic earthquake feed so the page can be rendered without
/// touching the network. Seeded, so the same config replays the same map.
pub fn build_sample_feed(config: &SampleConfig) -> EarthquakeFeed {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let records = (0..config.count)
        .map(|index| {
            let distance = rng.gen_range(1..300);
            EarthquakeRecord {
                id: Some(format!("sample-{}", index)),
                place: Some(format!("{}km from sample region {}", distance, index)),
                time_ms: Some(1_700_000_000_000 + index as i64 * 60_000),
                mag: Some(rng.gen_range(0.0..config.max_magnitude)),
                url: None,
                lon: rng.gen_range(-180.0..180.0),
                lat: rng.gen_range(-70.0..70.0),
                depth: rng.gen_range(0.0..600.0),
            }
        })
        .collect();
    EarthquakeFeed {
        records,
        skipped: 0,
    }
}
