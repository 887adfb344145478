use csv::{ReaderBuilder, StringRecord};

/// WQX column carrying the sampling date.
pub const DATE_COLUMN: &str = "ActivityStartDate";
/// WQX column naming the measured characteristic.
pub const PARAMETER_COLUMN: &str = "CharacteristicName";
/// WQX column carrying the numeric result.
pub const VALUE_COLUMN: &str = "ResultMeasureValue";
/// WQX column carrying the sampling latitude.
pub const LATITUDE_COLUMN: &str = "ActivityLocation/LatitudeMeasure";
/// WQX column carrying the sampling longitude.
pub const LONGITUDE_COLUMN: &str = "ActivityLocation/LongitudeMeasure";
/// WQX column naming the reporting organization (not present in every extract).
pub const ORGANIZATION_COLUMN: &str = "OrganizationFormalName";

/// A raw record with named optional fields, before any coercion.
///
/// This is the typed replacement for string-keyed column lookups: every
/// downstream consumer checks a named field instead of probing a header map.
/// `None` means the column was absent from the file or the cell was empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub date: Option<String>,
    pub parameter: Option<String>,
    pub value: Option<String>,
    pub organization: Option<String>,
}

/// Column positions resolved once per file from the header row.
///
/// Portal extracts do not agree on column order or on which optional columns
/// are present, so positions are looked up by header name rather than index.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    latitude: Option<usize>,
    longitude: Option<usize>,
    date: Option<usize>,
    parameter: Option<usize>,
    value: Option<usize>,
    organization: Option<usize>,
}

impl ColumnMap {
    /// Resolve column positions from a header row.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut map = ColumnMap::default();
        for (idx, name) in headers.iter().enumerate() {
            match name.trim() {
                LATITUDE_COLUMN => map.latitude = Some(idx),
                LONGITUDE_COLUMN => map.longitude = Some(idx),
                DATE_COLUMN => map.date = Some(idx),
                PARAMETER_COLUMN => map.parameter = Some(idx),
                VALUE_COLUMN => map.value = Some(idx),
                ORGANIZATION_COLUMN => map.organization = Some(idx),
                _ => {}
            }
        }
        map
    }

    /// True when every column ingestion requires was found in the header.
    /// The value column is not required: the value field is nullable.
    pub fn has_required_columns(&self) -> bool {
        self.latitude.is_some()
            && self.longitude.is_some()
            && self.date.is_some()
            && self.parameter.is_some()
    }

    /// Pull the mapped fields out of one CSV row. Empty cells become `None`.
    pub fn extract(&self, row: &StringRecord) -> RawRecord {
        let field = |idx: Option<usize>| -> Option<String> {
            idx.and_then(|i| row.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };
        RawRecord {
            latitude: field(self.latitude),
            longitude: field(self.longitude),
            date: field(self.date),
            parameter: field(self.parameter),
            value: field(self.value),
            organization: field(self.organization),
        }
    }
}

/// Parse a CSV document into raw records using its header row.
///
/// Rows the CSV reader cannot tokenize at all are dropped here; field-level
/// problems are left for ingestion to classify.
pub fn raw_records_from_csv(csv_text: &str) -> Result<Vec<RawRecord>, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());
    let columns = ColumnMap::from_headers(rdr.headers()?);
    if !columns.has_required_columns() {
        log::warn!("csv input is missing one or more required WQX columns");
    }
    let mut records = Vec::new();
    for row in rdr.records() {
        match row {
            Ok(row) => records.push(columns.extract(&row)),
            Err(e) => log::debug!("dropping unreadable csv row: {e}"),
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV_FIXTURE: &str = "\
OrganizationFormalName,ActivityStartDate,CharacteristicName,ResultMeasureValue,ActivityLocation/LatitudeMeasure,ActivityLocation/LongitudeMeasure
TCEQ,2021-04-01,Dissolved oxygen (DO),7.4,28.02513,-97.04299
TCEQ,2021-04-01,Salinity,,28.02513,-97.04299
";

    #[test]
    fn test_raw_records_from_csv() {
        let records = raw_records_from_csv(CSV_FIXTURE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].parameter.as_deref(), Some("Dissolved oxygen (DO)"));
        assert_eq!(records[0].value.as_deref(), Some("7.4"));
        assert_eq!(records[0].organization.as_deref(), Some("TCEQ"));
        // empty value cell becomes None, record still present
        assert_eq!(records[1].value, None);
        assert_eq!(records[1].parameter.as_deref(), Some("Salinity"));
    }

    #[test]
    fn test_column_map_reordered_headers() {
        let csv_text = "\
ActivityLocation/LongitudeMeasure,ResultMeasureValue,ActivityStartDate,ActivityLocation/LatitudeMeasure,CharacteristicName
-95.3,12.5,2020-06-15,29.1,pH
";
        let records = raw_records_from_csv(csv_text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].latitude.as_deref(), Some("29.1"));
        assert_eq!(records[0].longitude.as_deref(), Some("-95.3"));
        assert_eq!(records[0].parameter.as_deref(), Some("pH"));
        assert_eq!(records[0].organization, None);
    }

    #[test]
    fn test_missing_columns_yield_empty_fields() {
        let csv_text = "SomeColumn,Another\n1,2\n";
        let records = raw_records_from_csv(csv_text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], RawRecord::default());
    }
}
