pub mod earthquake;
pub mod plates;

pub use earthquake::{EarthquakeFeed, EarthquakeRecord};
pub use plates::PlateFeed;
