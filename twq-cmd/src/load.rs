//! Filesystem loading for CSV extracts and boundary geometry.
//!
//! Archive extraction happens upstream; this layer expects a directory of
//! already-unpacked `.csv` files and an optional pre-converted GeoJSON file.

use anyhow::Context;
use std::fs;
use std::path::Path;
use twq_view::map::BoundaryOverlay;
use twq_wqx::record::{raw_records_from_csv, RawRecord};
use twq_wqx::store::ObservationTable;

/// Load every `.csv` file under `data_dir` into one observation table.
///
/// Files are concatenated before ingestion so the zero-valid-records check
/// applies to the session's data as a whole, not per file.
pub fn load_table(data_dir: &Path) -> anyhow::Result<ObservationTable> {
    let mut raw: Vec<RawRecord> = Vec::new();
    let mut files = 0usize;
    let mut entries: Vec<_> = fs::read_dir(data_dir)
        .with_context(|| format!("reading data directory {}", data_dir.display()))?
        .collect::<Result<_, _>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let records = raw_records_from_csv(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        log::info!("{}: {} raw records", path.display(), records.len());
        raw.extend(records);
        files += 1;
    }
    log::info!("loaded {} raw records from {} csv files", raw.len(), files);

    Ok(ObservationTable::ingest(&raw)?)
}

/// Load a county boundary GeoJSON file as a styled overlay.
pub fn load_boundary(path: &Path) -> anyhow::Result<BoundaryOverlay> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading boundary file {}", path.display()))?;
    let geojson: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("parsing boundary GeoJSON {}", path.display()))?;
    Ok(BoundaryOverlay::new(geojson))
}

/// Write a payload as pretty JSON to `output`, or to stdout when omitted.
pub fn write_payload<T: serde::Serialize>(payload: &T, output: Option<&str>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(payload)?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {path}"))?;
            log::info!("wrote {path}");
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_table_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("a.csv"),
            "\
ActivityStartDate,CharacteristicName,ResultMeasureValue,ActivityLocation/LatitudeMeasure,ActivityLocation/LongitudeMeasure
2021-04-01,Salinity,18.0,28.0,-97.0
",
        )
        .unwrap();
        fs::write(
            dir.path().join("b.csv"),
            "\
ActivityStartDate,CharacteristicName,ResultMeasureValue,ActivityLocation/LatitudeMeasure,ActivityLocation/LongitudeMeasure
2021-04-08,pH,8.1,29.3,-94.8
",
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let table = load_table(dir.path()).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_load_table_all_invalid_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("bad.csv"),
            "\
ActivityStartDate,CharacteristicName,ResultMeasureValue,ActivityLocation/LatitudeMeasure,ActivityLocation/LongitudeMeasure
not-a-date,Salinity,18.0,28.0,-97.0
",
        )
        .unwrap();
        let err = load_table(dir.path()).unwrap_err();
        assert!(err.to_string().contains("no valid observations"));
    }

    #[test]
    fn test_load_boundary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counties.geojson");
        fs::write(&path, r#"{"type":"FeatureCollection","features":[]}"#).unwrap();
        let overlay = load_boundary(&path).unwrap();
        assert_eq!(overlay.geojson["type"], "FeatureCollection");
    }
}
