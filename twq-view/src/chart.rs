use serde::Serialize;
use twq_data::pivot::PivotTable;
use twq_data::stats::{self, ColumnStats, CorrelationMatrix};
use twq_wqx::station::StationKey;
use twq_utils::dates;

/// Message shown when a station/parameter selection produces no rows.
pub const NO_DATA_MESSAGE: &str = "No data available for selected station and parameters.";

/// A single (date, value) pair used for line chart data points.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DateValue {
    pub date: String,
    pub value: f64,
}

/// One parameter's line on the time-series chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesPayload {
    pub parameter: String,
    pub points: Vec<DateValue>,
}

/// The full per-station analysis view: line chart series, the descriptive
/// statistics table, and the correlation heatmap.
///
/// An empty selection is not an error; it carries [`NO_DATA_MESSAGE`] and the
/// collaborator renders an informational banner instead of charts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StationAnalysis {
    pub station: StationKey,
    pub series: Vec<SeriesPayload>,
    pub statistics: Vec<ColumnStats>,
    pub correlation: CorrelationMatrix,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StationAnalysis {
    /// Derive the analysis view from one station's pivot table.
    pub fn from_pivot(station: StationKey, pivot: &PivotTable) -> StationAnalysis {
        let series = pivot
            .parameters()
            .iter()
            .enumerate()
            .map(|(i, parameter)| SeriesPayload {
                parameter: parameter.clone(),
                points: pivot
                    .rows()
                    .zip(pivot.column(i))
                    .filter_map(|((date, _), cell)| {
                        Some(DateValue {
                            date: dates::format_date(date),
                            value: cell?,
                        })
                    })
                    .collect(),
            })
            .collect();
        let message = pivot.is_empty().then(|| NO_DATA_MESSAGE.to_string());
        StationAnalysis {
            station,
            series,
            statistics: stats::describe(pivot),
            correlation: stats::correlate(pivot),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twq_data::pivot::pivot;
    use twq_wqx::record::raw_records_from_csv;
    use twq_wqx::store::ObservationTable;

    const CSV_FIXTURE: &str = "\
ActivityStartDate,CharacteristicName,ResultMeasureValue,ActivityLocation/LatitudeMeasure,ActivityLocation/LongitudeMeasure
2021-04-01,Salinity,18.0,28.0,-97.0
2021-04-08,Salinity,19.0,28.0,-97.0
2021-04-08,DO,7.0,28.0,-97.0
";

    fn fixture_table() -> ObservationTable {
        let raw = raw_records_from_csv(CSV_FIXTURE).unwrap();
        ObservationTable::ingest(&raw).unwrap()
    }

    #[test]
    fn test_analysis_from_pivot() {
        let table = fixture_table();
        let station = StationKey::from_coords(28.0, -97.0);
        let pt = pivot(
            &table,
            station,
            &["Salinity".to_string(), "DO".to_string()],
        );
        let analysis = StationAnalysis::from_pivot(station, &pt);
        assert_eq!(analysis.message, None);
        assert_eq!(analysis.series.len(), 2);
        assert_eq!(analysis.series[0].parameter, "Salinity");
        assert_eq!(analysis.series[0].points.len(), 2);
        assert_eq!(analysis.series[0].points[0].date, "2021-04-01");
        // DO has one point; the null cell on Apr 1 is not emitted
        assert_eq!(analysis.series[1].points.len(), 1);
        assert_eq!(analysis.statistics.len(), 2);
        assert_eq!(analysis.correlation.parameters.len(), 2);
    }

    #[test]
    fn test_empty_selection_carries_message() {
        let table = fixture_table();
        let station = StationKey::from_coords(0.0, 0.0);
        let pt = pivot(&table, station, &["Salinity".to_string()]);
        let analysis = StationAnalysis::from_pivot(station, &pt);
        assert_eq!(analysis.message.as_deref(), Some(NO_DATA_MESSAGE));
        assert!(analysis.series[0].points.is_empty());
    }

    #[test]
    fn test_nan_serializes_as_null() {
        let table = fixture_table();
        let station = StationKey::from_coords(28.0, -97.0);
        // DO alone has a single observation: std is undefined
        let pt = pivot(&table, station, &["DO".to_string()]);
        let analysis = StationAnalysis::from_pivot(station, &pt);
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json["statistics"][0]["std"].is_null());
    }
}
