use chrono::NaiveDate;
use std::collections::BTreeMap;
use twq_wqx::station::StationKey;
use twq_wqx::store::ObservationTable;

/// A time-indexed table for one station: one column per requested parameter,
/// one row per sampling date, `None` where no valued observation exists.
///
/// Rows are held in a `BTreeMap` so iteration is always chronological.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PivotTable {
    parameters: Vec<String>,
    rows: BTreeMap<NaiveDate, Vec<Option<f64>>>,
}

impl PivotTable {
    /// Column labels, in the order requested at construction.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Chronological (date, row) pairs.
    pub fn rows(&self) -> impl Iterator<Item = (&NaiveDate, &[Option<f64>])> {
        self.rows.iter().map(|(date, row)| (date, row.as_slice()))
    }

    /// One column's cells in chronological order, nulls included.
    pub fn column(&self, index: usize) -> Vec<Option<f64>> {
        self.rows.values().map(|row| row[index]).collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Pivot one station's observations into a time-indexed table.
///
/// Duplicate (date, parameter) observations are averaged, matching the
/// dashboard's mean aggregation. Null-valued observations contribute nothing.
/// Dates with no valued observation for any requested parameter are omitted.
/// An unknown station or empty parameter list yields an empty table.
pub fn pivot(table: &ObservationTable, station: StationKey, parameters: &[String]) -> PivotTable {
    let column_count = parameters.len();
    // (date -> per-column running (sum, count)) for duplicate averaging
    let mut cells: BTreeMap<NaiveDate, Vec<(f64, u32)>> = BTreeMap::new();

    for obs in table.for_station(station) {
        let Some(value) = obs.value else { continue };
        let Some(col) = parameters.iter().position(|p| *p == obs.parameter) else {
            continue;
        };
        let row = cells
            .entry(obs.date)
            .or_insert_with(|| vec![(0.0, 0); column_count]);
        row[col].0 += value;
        row[col].1 += 1;
    }

    let rows = cells
        .into_iter()
        .map(|(date, sums)| {
            let row = sums
                .into_iter()
                .map(|(sum, count)| (count > 0).then(|| sum / count as f64))
                .collect();
            (date, row)
        })
        .collect();

    PivotTable {
        parameters: parameters.to_vec(),
        rows,
    }
}
