use crate::error::SkipReason;
use crate::record::RawRecord;
use crate::station::StationKey;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use twq_utils::{dates, numbers};

/// A single normalized water-quality observation.
///
/// Produced only by ingestion; read-only for the rest of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub station: StationKey,
    /// Latitude as reported, before identity rounding.
    pub latitude: f64,
    /// Longitude as reported, before identity rounding.
    pub longitude: f64,
    pub date: NaiveDate,
    pub parameter: String,
    /// Measured value; `None` when the result cell was absent or non-numeric.
    pub value: Option<f64>,
    pub organization: Option<String>,
}

impl TryFrom<&RawRecord> for Observation {
    type Error = SkipReason;

    fn try_from(raw: &RawRecord) -> Result<Self, Self::Error> {
        let latitude = raw
            .latitude
            .as_deref()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .ok_or(SkipReason::MissingCoordinates)?;
        let longitude = raw
            .longitude
            .as_deref()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .ok_or(SkipReason::MissingCoordinates)?;
        let date = raw
            .date
            .as_deref()
            .and_then(dates::coerce_date)
            .ok_or(SkipReason::MissingDate)?;
        let parameter = raw
            .parameter
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(SkipReason::MissingParameter)?
            .to_string();
        // value coercion never drops the record
        let value = raw.value.as_deref().and_then(numbers::coerce_value);
        Ok(Observation {
            station: StationKey::from_coords(latitude, longitude),
            latitude,
            longitude,
            date,
            parameter,
            value,
            organization: raw.organization.clone(),
        })
    }
}

impl PartialEq for Observation {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.station == other.station
    }
}

impl Eq for Observation {}

impl Ord for Observation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl PartialOrd for Observation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
