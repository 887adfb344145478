use std::collections::BTreeMap;
use twq_wqx::observation::Observation;
use twq_wqx::station::StationKey;
use twq_wqx::store::ObservationTable;

/// Resolve the latest valued observation of `parameter` for every station.
///
/// At most one row per station: the chronologically last observation that
/// carries a value. The sort is stable, so same-date observations tie-break
/// by original load order (the later-loaded record wins). Observations with
/// a null value are ignored; they cannot size a map marker.
///
/// Results are ordered by station key for deterministic output.
pub fn latest_by_station<'a>(
    table: &'a ObservationTable,
    parameter: &str,
) -> Vec<&'a Observation> {
    let mut valued: Vec<&Observation> = table
        .observations()
        .iter()
        .filter(|obs| obs.parameter == parameter && obs.value.is_some())
        .collect();
    valued.sort_by_key(|obs| obs.date);

    let mut latest: BTreeMap<StationKey, &Observation> = BTreeMap::new();
    for obs in valued {
        // later entries overwrite earlier ones; input is date-sorted
        latest.insert(obs.station, obs);
    }
    latest.into_values().collect()
}
