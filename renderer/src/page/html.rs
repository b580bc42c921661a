use crate::page::model::MapDocument;
use anyhow::Context;

/// Self-contained Leaflet page. The map library is the external rendering
/// host: the script below only hands it the precomputed markers, the plate
/// collection with its one style, and the legend markup. All classification
/// and projection already happened in Rust.
const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Earthquake Map</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
  <style>
    html, body { margin: 0; padding: 0; height: 100%; }
    #map { width: 100%; height: 100%; }
    .info.legend {
      background: rgba(255, 255, 255, 0.9);
      padding: 8px 12px;
      border-radius: 4px;
      box-shadow: 0 1px 4px rgba(0, 0, 0, 0.3);
      font: 13px/1.4 sans-serif;
    }
    .info.legend h2 { margin: 0 0 6px; font-size: 15px; }
    .info.legend ul { margin: 0; padding: 0; list-style: none; }
    .info.legend li {
      color: #1a1a1a;
      padding: 2px 6px;
      margin-bottom: 2px;
    }
  </style>
</head>
<body>
  <div id="map"></div>
  <script>
    var MARKERS = __MARKERS__;
    var PLATES = __PLATES__;
    var PLATE_STYLE = __PLATE_STYLE__;
    var LEGEND_HTML = __LEGEND_HTML__;

    var street = L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
      attribution: '&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors'
    });

    var topo = L.tileLayer('https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png', {
      attribution: 'Map data: &copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors, <a href="http://viewfinderpanoramas.org">SRTM</a> | Map style: &copy; <a href="https://opentopomap.org">OpenTopoMap</a> (<a href="https://creativecommons.org/licenses/by-sa/3.0/">CC-BY-SA</a>)'
    });

    var earthquakes = L.layerGroup(MARKERS.map(function (m) {
      return L.circleMarker([m.lat, m.lon], {
        radius: m.radius,
        color: m.color,
        fillColor: m.fill_color,
        weight: m.weight,
        opacity: m.opacity,
        fillOpacity: m.fill_opacity
      }).bindPopup(m.popup);
    }));

    var baseMaps = {
      "Street Map": street,
      "Topographic Map": topo
    };
    var overlayMaps = { Earthquakes: earthquakes };
    var layers = [street, earthquakes];

    if (PLATES !== null) {
      var plates = L.geoJSON(PLATES, {
        style: function () {
          return { color: PLATE_STYLE.color, weight: PLATE_STYLE.weight };
        }
      });
      overlayMaps.TectonicPlates = plates;
      layers.push(plates);
    }

    var map = L.map("map", {
      center: __CENTER__,
      zoom: __ZOOM__,
      layers: layers
    });

    var legend = L.control({ position: "bottomright" });
    legend.onAdd = function () {
      var div = L.DomUtil.create("div", "info legend");
      div.innerHTML = LEGEND_HTML;
      return div;
    };
    legend.addTo(map);
    L.control.layers(baseMaps, overlayMaps).addTo(map);
  </script>
</body>
</html>
"##;

const UNAVAILABLE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Earthquake Map</title>
  <style>
    body { font: 15px/1.5 sans-serif; margin: 4rem auto; max-width: 36rem; color: #1a1a1a; }
    .notice { border: 1px solid #c50000; border-radius: 4px; padding: 1rem 1.5rem; }
    h1 { font-size: 1.2rem; margin-top: 0; }
  </style>
</head>
<body>
  <div class="notice">
    <h1>Earthquake data unavailable</h1>
    <p>__REASON__</p>
    <p>The feed could not be loaded for this render pass. Reload to try again.</p>
  </div>
</body>
</html>
"##;

/// Renders the full interactive map page for one document.
pub fn render_page(document: &MapDocument) -> anyhow::Result<String> {
    let markers =
        serde_json::to_string(&document.markers.markers).context("serializing markers")?;
    let (plates, plate_style) = match &document.plates {
        Some(overlay) => (
            serde_json::to_string(&overlay.collection).context("serializing plate collection")?,
            serde_json::to_string(&overlay.style).context("serializing plate style")?,
        ),
        None => ("null".to_string(), "null".to_string()),
    };
    let legend_html =
        serde_json::to_string(&legend_markup(document)).context("serializing legend markup")?;
    let center = serde_json::to_string(&document.center).context("serializing map center")?;

    Ok(PAGE_TEMPLATE
        .replace("__MARKERS__", &markers)
        .replace("__PLATES__", &plates)
        .replace("__PLATE_STYLE__", &plate_style)
        .replace("__LEGEND_HTML__", &legend_html)
        .replace("__CENTER__", &center)
        .replace("__ZOOM__", &document.zoom.to_string()))
}

/// Fallback page shown when data acquisition fails, instead of a blank map.
pub fn render_unavailable(reason: &str) -> String {
    UNAVAILABLE_TEMPLATE.replace("__REASON__", &escape_html(reason))
}

fn legend_markup(document: &MapDocument) -> String {
    let items: String = document
        .legend
        .entries
        .iter()
        .map(|entry| {
            format!(
                "<li style=\"background:{}\"> {} </li>",
                entry.color, entry.label
            )
        })
        .collect();
    format!(
        "<h2>{}</h2><ul>{}</ul>",
        escape_html(&document.legend.title),
        items
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
