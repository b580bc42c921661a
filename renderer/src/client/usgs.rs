use anyhow::Context;

/// USGS summary feed: all earthquakes from the past week.
pub const EARTHQUAKES_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// PB2002 tectonic-plate boundaries.
pub const PLATES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_plates.json";

/// Fetches one GeoJSON document body. Plain GET, no parameters or auth, and
/// no retries: a failed fetch is terminal for the render pass.
pub async fn fetch_geojson(url: &str) -> anyhow::Result<String> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("requesting {}", url))?
        .error_for_status()
        .with_context(|| format!("fetching {}", url))?;
    response
        .text()
        .await
        .with_context(|| format!("reading body from {}", url))
}
