use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use twq_wqx::observation::Observation;
use twq_wqx::station::StationKey;
use twq_wqx::store::ObservationTable;

/// An inter-observation interval longer than this many days counts as a gap.
pub const GAP_THRESHOLD_DAYS: i64 = 30;

/// Derived per-(station, parameter) summary. Recomputed on demand, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSummary {
    pub station: StationKey,
    pub parameter: String,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub observation_count: usize,
    /// Number of intervals between consecutive sorted observation dates
    /// strictly exceeding [`GAP_THRESHOLD_DAYS`].
    pub gap_count: usize,
    /// Value of the chronologically last valued observation, if any.
    pub latest_value: Option<f64>,
}

/// Summarize every (station, parameter) pair present in the table.
///
/// Output is ordered by station key, then parameter name.
pub fn summarize(table: &ObservationTable) -> Vec<StationSummary> {
    let mut groups: BTreeMap<(StationKey, &str), Vec<&Observation>> = BTreeMap::new();
    for obs in table.observations() {
        groups
            .entry((obs.station, obs.parameter.as_str()))
            .or_default()
            .push(obs);
    }

    groups
        .into_iter()
        .map(|((station, parameter), mut group)| {
            group.sort_by_key(|obs| obs.date);
            let first_date = group.first().map(|o| o.date).unwrap_or_default();
            let last_date = group.last().map(|o| o.date).unwrap_or_default();
            let gap_count = count_gaps(&group);
            let latest_value = group.iter().rev().find_map(|o| o.value);
            StationSummary {
                station,
                parameter: parameter.to_string(),
                first_date,
                last_date,
                observation_count: group.len(),
                gap_count,
                latest_value,
            }
        })
        .collect()
}

fn count_gaps(sorted: &[&Observation]) -> usize {
    sorted
        .windows(2)
        .filter(|pair| (pair[1].date - pair[0].date).num_days() > GAP_THRESHOLD_DAYS)
        .count()
}
