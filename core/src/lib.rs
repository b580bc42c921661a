//! Feed parsing, magnitude styling, and layer composition for the Rust
//! earthquake map.
//!
//! The modules follow the one-shot fetch -> project -> compose pipeline:
//! `feed` parses USGS-style GeoJSON leniently, `style` maps magnitudes to
//! colors and circle markers, and `compose` aggregates the overlays and
//! legend the Leaflet page consumes.

pub mod compose;
pub mod feed;
pub mod prelude;
pub mod style;
pub mod telemetry;

pub use prelude::{FeedError, FeedResult, LayerStats};
