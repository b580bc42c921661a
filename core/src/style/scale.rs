use serde::{Deserialize, Serialize};

/// One closed magnitude interval mapped to a fixed color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeBucket {
    pub low: f64,
    pub high: f64,
    pub color: String,
}

/// Ordered magnitude-to-color partition shared by markers and the legend.
///
/// Buckets are closed on both ends and evaluated in ascending order, so the
/// lower bucket owns a shared boundary value. Any magnitude outside every
/// bucket, NaN included, falls back to `fallback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeScale {
    pub buckets: Vec<MagnitudeBucket>,
    pub fallback: String,
}

impl Default for MagnitudeScale {
    fn default() -> Self {
        let bucket = |low: f64, high: f64, color: &str| MagnitudeBucket {
            low,
            high,
            color: color.to_string(),
        };
        Self {
            buckets: vec![
                bucket(1.0, 2.5, "#7DD112"),
                bucket(2.5, 4.0, "#F29F4B"),
                bucket(4.0, 5.5, "#FC5C1A"),
                bucket(5.5, 7.0, "#C50000"),
                bucket(7.0, 15.0, "#870202"),
            ],
            fallback: "#AAFD5D".to_string(),
        }
    }
}

impl MagnitudeScale {
    /// Returns the color token for a magnitude. Pure and total over f64:
    /// NaN fails every interval test and lands on the fallback color.
    pub fn classify(&self, mag: f64) -> &str {
        self.buckets
            .iter()
            .find(|bucket| bucket.low <= mag && mag <= bucket.high)
            .map(|bucket| bucket.color.as_str())
            .unwrap_or(&self.fallback)
    }
}
