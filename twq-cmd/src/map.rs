use crate::load;
use std::path::Path;
use twq_data::latest;
use twq_view::map::{MapConfig, MapPayload, StationMarker};

/// Build the map payload: one marker per station carrying the latest value of
/// the display parameter, plus the optional county boundary overlay.
pub fn run_map(
    data_dir: &str,
    parameter: &str,
    boundary: Option<&str>,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let table = load::load_table(Path::new(data_dir))?;
    let markers: Vec<StationMarker> = latest::latest_by_station(&table, parameter)
        .into_iter()
        .filter_map(StationMarker::from_latest)
        .collect();
    if markers.is_empty() {
        log::warn!("no stations report a value for {parameter:?}");
    }
    let overlay = boundary
        .map(|path| load::load_boundary(Path::new(path)))
        .transpose()?;
    let payload = MapPayload {
        config: MapConfig::default(),
        parameter: parameter.to_string(),
        markers,
        overlay,
    };
    load::write_payload(&payload, output)
}
