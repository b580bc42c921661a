pub mod marker;
pub mod scale;

pub use marker::CircleMarker;
pub use scale::{MagnitudeBucket, MagnitudeScale};
