use itertools::Itertools;
use twq_wqx::store::ObservationTable;

/// Distinct parameter names present in the table, sorted for the dropdown
/// collaborator.
pub fn parameter_choices(table: &ObservationTable) -> Vec<String> {
    table
        .observations()
        .iter()
        .map(|obs| obs.parameter.clone())
        .unique()
        .sorted()
        .collect()
}

/// Distinct parameter names observed at one station, sorted. Feeds the
/// multiselect shown after a station is picked on the map.
pub fn station_parameter_choices(
    table: &ObservationTable,
    station: twq_wqx::station::StationKey,
) -> Vec<String> {
    table
        .for_station(station)
        .map(|obs| obs.parameter.clone())
        .unique()
        .sorted()
        .collect()
}
