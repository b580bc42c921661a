pub mod sample;
pub mod usgs;
