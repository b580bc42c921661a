use quakecore::compose::legend::Legend;
use quakecore::compose::markers::MarkerOverlay;
use quakecore::compose::plates::PlateOverlay;
use serde::{Deserialize, Serialize};

/// Everything the rendering host needs for one map: the overlays, the
/// legend, and the initial view. Also served as JSON at `/data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapDocument {
    pub markers: MarkerOverlay,
    pub plates: Option<PlateOverlay>,
    pub legend: Legend,
    pub center: [f64; 2],
    pub zoom: f64,
}
