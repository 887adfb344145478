use crate::load;
use std::path::Path;
use twq_data::{choices, pivot, summary};
use twq_view::chart::StationAnalysis;
use twq_wqx::station::StationKey;

/// Build the per-station analysis payload for a clicked map location.
///
/// The coordinates round to the canonical station key; when no parameters are
/// given, every parameter observed at the station is plotted. An empty
/// selection yields an informational payload, not an error.
pub fn run_station(
    data_dir: &str,
    lat: f64,
    lon: f64,
    parameters: &[String],
    output: Option<&str>,
) -> anyhow::Result<()> {
    let table = load::load_table(Path::new(data_dir))?;
    let station = StationKey::from_coords(lat, lon);
    let parameters = if parameters.is_empty() {
        choices::station_parameter_choices(&table, station)
    } else {
        parameters.to_vec()
    };
    let pt = pivot::pivot(&table, station, &parameters);
    let analysis = StationAnalysis::from_pivot(station, &pt);
    if let Some(message) = &analysis.message {
        log::warn!("{station}: {message}");
    }
    load::write_payload(&analysis, output)
}

/// Emit every (station, parameter) summary: first/last dates, observation
/// counts, gap counts, latest values.
pub fn run_summaries(data_dir: &str, output: Option<&str>) -> anyhow::Result<()> {
    let table = load::load_table(Path::new(data_dir))?;
    let summaries = summary::summarize(&table);
    load::write_payload(&summaries, output)
}

/// Print the distinct parameter names, one per line.
pub fn run_parameters(data_dir: &str) -> anyhow::Result<()> {
    let table = load::load_table(Path::new(data_dir))?;
    for parameter in choices::parameter_choices(&table) {
        println!("{parameter}");
    }
    Ok(())
}
