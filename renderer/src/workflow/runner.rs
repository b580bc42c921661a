use crate::page::model::MapDocument;
use crate::workflow::config::RenderConfig;
use quakecore::compose::legend::Legend;
use quakecore::compose::markers::build_marker_overlay;
use quakecore::compose::plates::build_plate_overlay;
use quakecore::feed::earthquake::EarthquakeFeed;
use quakecore::feed::plates::PlateFeed;
use quakecore::telemetry::{LogManager, MetricsRecorder};

/// Turns fetched feeds into a renderable map document. All transformation
/// is synchronous; the runner owns its data for the whole pass.
pub struct Runner {
    config: RenderConfig,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl Runner {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn compose(&self, quakes: &EarthquakeFeed, plates: Option<&PlateFeed>) -> MapDocument {
        let markers =
            build_marker_overlay(quakes, &self.config.scale, self.config.scale_factor);
        self.metrics.record_projected(markers.stats.projected);
        self.metrics.record_skipped(markers.stats.skipped);
        if markers.stats.skipped > 0 {
            self.logger.flag(&format!(
                "{} earthquake records skipped during projection",
                markers.stats.skipped
            ));
        }
        self.logger.record(&format!(
            "composed {} markers from the earthquake feed",
            markers.stats.projected
        ));

        MapDocument {
            markers,
            plates: plates.map(build_plate_overlay),
            legend: Legend::from_scale(&self.config.scale),
            center: self.config.center,
            zoom: self.config.zoom,
        }
    }

    pub fn metrics_snapshot(&self) -> (usize, usize) {
        self.metrics.snapshot()
    }
}
