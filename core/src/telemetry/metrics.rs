use std::sync::Mutex;

/// Counts how many records made it onto the map and how many were dropped.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    projected: usize,
    skipped: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                projected: 0,
                skipped: 0,
            }),
        }
    }

    pub fn record_projected(&self, count: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.projected += count;
        }
    }

    pub fn record_skipped(&self, count: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.skipped += count;
        }
    }

    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.projected, metrics.skipped)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
