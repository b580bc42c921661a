pub mod legend;
pub mod markers;
pub mod plates;

pub use legend::{Legend, LegendEntry};
pub use markers::MarkerOverlay;
pub use plates::{PlateOverlay, PlateStyle};
