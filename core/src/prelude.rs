use serde::{Deserialize, Serialize};

/// Common error type for feed parsing and layer composition.
#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("malformed feature collection: {0}")]
    MalformedCollection(String),
    #[error("record missing a usable point geometry")]
    MissingGeometry,
    #[error("malformed record: {0}")]
    MalformedRecord(String),
}

pub type FeedResult<T> = Result<T, FeedError>;

/// Per-overlay accounting carried alongside composed layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerStats {
    pub projected: usize,
    pub skipped: usize,
}
