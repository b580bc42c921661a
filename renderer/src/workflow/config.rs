use crate::client::usgs;
use anyhow::Context;
use quakecore::style::marker::DEFAULT_SCALE_FACTOR;
use quakecore::style::scale::MagnitudeScale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything one render pass needs: endpoints, visual tuning knobs, and
/// the magnitude bucket table. No ambient globals.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub earthquakes_url: String,
    pub plates_url: String,
    pub include_plates: bool,
    pub scale_factor: f64,
    pub center: [f64; 2],
    pub zoom: f64,
    pub scale: MagnitudeScale,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            earthquakes_url: usgs::EARTHQUAKES_URL.to_string(),
            plates_url: usgs::PLATES_URL.to_string(),
            include_plates: false,
            scale_factor: DEFAULT_SCALE_FACTOR,
            center: [17.6078, -8.0817],
            zoom: 2.5,
            scale: MagnitudeScale::default(),
        }
    }
}

impl RenderConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading render config {}", path_ref.display()))?;
        let config: RenderConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing render config {}", path_ref.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_matches_the_deployment_constants() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.earthquakes_url, usgs::EARTHQUAKES_URL);
        assert_eq!(cfg.scale_factor, 5.0);
        assert_eq!(cfg.center, [17.6078, -8.0817]);
        assert!(!cfg.include_plates);
        assert_eq!(cfg.scale.buckets.len(), 5);
    }

    #[test]
    fn config_load_reads_yaml_with_partial_overrides() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"scale_factor: 4.0\ninclude_plates: true\nzoom: 3.0\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = RenderConfig::load(&path).unwrap();
        assert_eq!(cfg.scale_factor, 4.0);
        assert!(cfg.include_plates);
        assert_eq!(cfg.zoom, 3.0);
        // untouched fields keep their defaults
        assert_eq!(cfg.plates_url, usgs::PLATES_URL);
    }
}
