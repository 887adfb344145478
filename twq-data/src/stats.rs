use crate::pivot::PivotTable;
use serde::Serialize;

/// Symmetric pairwise Pearson correlation matrix over a pivot table's columns.
///
/// Undefined entries (fewer than 2 overlapping rows, or zero variance) are
/// `NaN`, which serde_json renders as `null` for the heatmap collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub parameters: Vec<String>,
    /// Row-major, `parameters.len()` x `parameters.len()`.
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }
}

/// Compute pairwise Pearson correlation across all column pairs.
///
/// Only rows where both columns hold a value enter a pair's computation.
/// The diagonal is 1.0 whenever the column holds any value at all. An empty
/// pivot yields an empty matrix.
pub fn correlate(pivot: &PivotTable) -> CorrelationMatrix {
    let n = pivot.parameters().len();
    let columns: Vec<Vec<Option<f64>>> = (0..n).map(|i| pivot.column(i)).collect();
    let mut values = vec![vec![f64::NAN; n]; n];

    for i in 0..n {
        for j in i..n {
            let r = if i == j {
                if columns[i].iter().any(Option::is_some) {
                    1.0
                } else {
                    f64::NAN
                }
            } else {
                pearson(&columns[i], &columns[j])
            };
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix {
        parameters: pivot.parameters().to_vec(),
        values,
    }
}

/// Pearson r over the rows where both columns hold a value.
fn pearson(a: &[Option<f64>], b: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .zip(b)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return f64::NAN;
    }
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

/// Per-column descriptive statistics, shaped like the dashboard's summary
/// table: count, mean, sample std, min, quartiles, max.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub parameter: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Describe every column of a pivot table.
///
/// Columns with no values still appear, with count 0 and `NaN` statistics.
pub fn describe(pivot: &PivotTable) -> Vec<ColumnStats> {
    pivot
        .parameters()
        .iter()
        .enumerate()
        .map(|(i, parameter)| {
            let mut values: Vec<f64> = pivot.column(i).into_iter().flatten().collect();
            values.sort_by(f64::total_cmp);
            column_stats(parameter, &values)
        })
        .collect()
}

fn column_stats(parameter: &str, sorted: &[f64]) -> ColumnStats {
    let count = sorted.len();
    if count == 0 {
        return ColumnStats {
            parameter: parameter.to_string(),
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        };
    }
    let n = count as f64;
    let mean = sorted.iter().sum::<f64>() / n;
    // sample standard deviation; undefined for a single value
    let std = if count > 1 {
        (sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
    } else {
        f64::NAN
    };
    ColumnStats {
        parameter: parameter.to_string(),
        count,
        mean,
        std,
        min: sorted[0],
        q25: quantile(sorted, 0.25),
        median: quantile(sorted, 0.5),
        q75: quantile(sorted, 0.75),
        max: sorted[count - 1],
    }
}

/// Linearly interpolated quantile over a sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pivot::pivot;
    use twq_wqx::record::raw_records_from_csv;
    use twq_wqx::station::StationKey;
    use twq_wqx::store::ObservationTable;

    fn table_from(csv_text: &str) -> ObservationTable {
        let raw = raw_records_from_csv(csv_text).unwrap();
        ObservationTable::ingest(&raw).unwrap()
    }

    fn params(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_column_correlation_is_identity() {
        let table = table_from(
            "\
ActivityStartDate,CharacteristicName,ResultMeasureValue,ActivityLocation/LatitudeMeasure,ActivityLocation/LongitudeMeasure
2021-04-01,Salinity,18.0,28.0,-97.0
2021-04-08,Salinity,20.0,28.0,-97.0
2021-04-15,Salinity,19.0,28.0,-97.0
",
        );
        let pt = pivot(&table, StationKey::from_coords(28.0, -97.0), &params(&["Salinity"]));
        let m = correlate(&pt);
        assert_eq!(m.parameters.len(), 1);
        assert_eq!(m.get(0, 0), 1.0);
    }

    #[test]
    fn test_correlation_symmetric_and_signed() {
        // DO falls as salinity rises: perfect negative correlation
        let table = table_from(
            "\
ActivityStartDate,CharacteristicName,ResultMeasureValue,ActivityLocation/LatitudeMeasure,ActivityLocation/LongitudeMeasure
2021-04-01,DO,9.0,28.0,-97.0
2021-04-01,Salinity,10.0,28.0,-97.0
2021-04-08,DO,8.0,28.0,-97.0
2021-04-08,Salinity,12.0,28.0,-97.0
2021-04-15,DO,7.0,28.0,-97.0
2021-04-15,Salinity,14.0,28.0,-97.0
",
        );
        let pt = pivot(
            &table,
            StationKey::from_coords(28.0, -97.0),
            &params(&["DO", "Salinity"]),
        );
        let m = correlate(&pt);
        assert_eq!(m.get(0, 1), m.get(1, 0));
        assert!((m.get(0, 1) - (-1.0)).abs() < 1e-12);
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(1, 1), 1.0);
    }

    #[test]
    fn test_correlation_insufficient_overlap_is_nan() {
        // the two parameters never share a date
        let table = table_from(
            "\
ActivityStartDate,CharacteristicName,ResultMeasureValue,ActivityLocation/LatitudeMeasure,ActivityLocation/LongitudeMeasure
2021-04-01,DO,9.0,28.0,-97.0
2021-04-08,Salinity,12.0,28.0,-97.0
2021-04-15,DO,7.0,28.0,-97.0
2021-04-22,Salinity,14.0,28.0,-97.0
",
        );
        let pt = pivot(
            &table,
            StationKey::from_coords(28.0, -97.0),
            &params(&["DO", "Salinity"]),
        );
        let m = correlate(&pt);
        assert!(m.get(0, 1).is_nan());
        assert!(m.get(1, 0).is_nan());
    }

    #[test]
    fn test_correlation_zero_variance_is_nan() {
        let table = table_from(
            "\
ActivityStartDate,CharacteristicName,ResultMeasureValue,ActivityLocation/LatitudeMeasure,ActivityLocation/LongitudeMeasure
2021-04-01,DO,9.0,28.0,-97.0
2021-04-01,Salinity,12.0,28.0,-97.0
2021-04-08,DO,9.0,28.0,-97.0
2021-04-08,Salinity,14.0,28.0,-97.0
",
        );
        let pt = pivot(
            &table,
            StationKey::from_coords(28.0, -97.0),
            &params(&["DO", "Salinity"]),
        );
        let m = correlate(&pt);
        assert!(m.get(0, 1).is_nan());
    }

    #[test]
    fn test_correlate_empty_pivot() {
        let pt = PivotTable::default();
        let m = correlate(&pt);
        assert!(m.parameters.is_empty());
        assert!(m.values.is_empty());
    }

    #[test]
    fn test_describe_basic() {
        let table = table_from(
            "\
ActivityStartDate,CharacteristicName,ResultMeasureValue,ActivityLocation/LatitudeMeasure,ActivityLocation/LongitudeMeasure
2021-04-01,Salinity,10.0,28.0,-97.0
2021-04-08,Salinity,20.0,28.0,-97.0
2021-04-15,Salinity,30.0,28.0,-97.0
2021-04-22,Salinity,40.0,28.0,-97.0
",
        );
        let pt = pivot(&table, StationKey::from_coords(28.0, -97.0), &params(&["Salinity"]));
        let stats = describe(&pt);
        assert_eq!(stats.len(), 1);
        let s = &stats[0];
        assert_eq!(s.count, 4);
        assert_eq!(s.mean, 25.0);
        assert_eq!(s.min, 10.0);
        assert_eq!(s.max, 40.0);
        assert_eq!(s.median, 25.0);
        // linear interpolation: q25 at position 0.75 between 10 and 20
        assert!((s.q25 - 17.5).abs() < 1e-12);
        assert!((s.q75 - 32.5).abs() < 1e-12);
        // sample std of 10,20,30,40
        assert!((s.std - 12.909944487358056).abs() < 1e-9);
    }

    #[test]
    fn test_describe_empty_column() {
        let table = table_from(
            "\
ActivityStartDate,CharacteristicName,ResultMeasureValue,ActivityLocation/LatitudeMeasure,ActivityLocation/LongitudeMeasure
2021-04-01,Salinity,10.0,28.0,-97.0
",
        );
        let pt = pivot(
            &table,
            StationKey::from_coords(28.0, -97.0),
            &params(&["Salinity", "Nitrate"]),
        );
        let stats = describe(&pt);
        assert_eq!(stats[1].count, 0);
        assert!(stats[1].mean.is_nan());
        // single-value column has defined mean but undefined std
        assert_eq!(stats[0].count, 1);
        assert_eq!(stats[0].mean, 10.0);
        assert!(stats[0].std.is_nan());
    }
}
