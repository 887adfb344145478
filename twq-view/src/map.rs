use serde::Serialize;
use twq_wqx::observation::Observation;
use twq_wqx::station::StationKey;

/// Base circle-marker radius in pixels.
const MARKER_BASE_RADIUS: f64 = 5.0;
/// Cap on the value-derived radius contribution.
const MARKER_RADIUS_SPAN: f64 = 20.0;
/// Divisor turning a measured value into extra radius pixels.
const MARKER_VALUE_SCALE: f64 = 5.0;

/// Initial viewport for the Texas coastal map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapConfig {
    pub center: [f64; 2],
    pub zoom: u8,
    pub tiles: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            center: [28.5, -96.0],
            zoom: 7,
            tiles: "cartodbpositron".to_string(),
        }
    }
}

/// Style applied to the county boundary overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayStyle {
    pub fill_color: String,
    pub color: String,
    pub weight: u8,
    pub fill_opacity: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        OverlayStyle {
            fill_color: "#0b5394".to_string(),
            color: "#0b5394".to_string(),
            weight: 2,
            fill_opacity: 0.1,
        }
    }
}

/// County boundary geometries passed through to the map as GeoJSON.
///
/// The geometry is produced upstream (already reprojected to WGS84); this
/// layer only pairs it with the display style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryOverlay {
    pub geojson: serde_json::Value,
    pub style: OverlayStyle,
}

impl BoundaryOverlay {
    pub fn new(geojson: serde_json::Value) -> Self {
        BoundaryOverlay {
            geojson,
            style: OverlayStyle::default(),
        }
    }
}

/// One station's circle marker, sized by its latest value for the displayed
/// parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationMarker {
    pub station: StationKey,
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
    pub popup: String,
}

impl StationMarker {
    /// Build a marker from a station's latest valued observation.
    ///
    /// Returns `None` for a null value; an unsized marker is not drawn.
    pub fn from_latest(obs: &Observation) -> Option<StationMarker> {
        let value = obs.value?;
        Some(StationMarker {
            station: obs.station,
            latitude: obs.latitude,
            longitude: obs.longitude,
            radius: marker_radius(value),
            popup: format!("{}: {:.2}", obs.parameter, value),
        })
    }
}

/// Marker radius rule: base 5px plus value/5, clamped to [0, 20] extra pixels.
fn marker_radius(value: f64) -> f64 {
    MARKER_BASE_RADIUS + (value / MARKER_VALUE_SCALE).clamp(0.0, MARKER_RADIUS_SPAN)
}

/// Everything the mapping collaborator needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPayload {
    pub config: MapConfig,
    pub parameter: String,
    pub markers: Vec<StationMarker>,
    pub overlay: Option<BoundaryOverlay>,
}
