use crate::error::{IngestError, SkipReason};
use crate::observation::Observation;
use crate::record::RawRecord;
use crate::station::StationKey;

/// Tallies from one ingestion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub records_seen: usize,
    pub loaded: usize,
    pub skipped_coordinates: usize,
    pub skipped_date: usize,
    pub skipped_parameter: usize,
}

impl IngestStats {
    pub fn skipped_total(&self) -> usize {
        self.skipped_coordinates + self.skipped_date + self.skipped_parameter
    }

    fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::MissingCoordinates => self.skipped_coordinates += 1,
            SkipReason::MissingDate => self.skipped_date += 1,
            SkipReason::MissingParameter => self.skipped_parameter += 1,
        }
    }
}

/// The normalized observation table for a session.
///
/// Loaded once, then read-only; every aggregation takes a reference to it
/// rather than consulting shared session state.
#[derive(Debug, Clone, Default)]
pub struct ObservationTable {
    observations: Vec<Observation>,
    stats: IngestStats,
}

impl ObservationTable {
    /// Normalize raw records into an observation table.
    ///
    /// Records missing coordinates, date, or parameter are skipped and
    /// tallied, never fatal. The only error is a load that yields zero valid
    /// observations.
    pub fn ingest(raw_records: &[RawRecord]) -> Result<Self, IngestError> {
        let mut stats = IngestStats {
            records_seen: raw_records.len(),
            ..IngestStats::default()
        };
        let mut observations = Vec::with_capacity(raw_records.len());
        for raw in raw_records {
            match Observation::try_from(raw) {
                Ok(obs) => {
                    observations.push(obs);
                    stats.loaded += 1;
                }
                Err(reason) => {
                    log::debug!("skipping record: {reason}");
                    stats.record_skip(reason);
                }
            }
        }
        if observations.is_empty() {
            return Err(IngestError::MissingData {
                records_seen: stats.records_seen,
            });
        }
        log::info!(
            "ingested {} observations ({} skipped of {} raw records)",
            stats.loaded,
            stats.skipped_total(),
            stats.records_seen
        );
        Ok(ObservationTable {
            observations,
            stats,
        })
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn stats(&self) -> &IngestStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Observations for one station, in original load order.
    pub fn for_station(&self, station: StationKey) -> impl Iterator<Item = &Observation> {
        self.observations
            .iter()
            .filter(move |obs| obs.station == station)
    }

    /// Observations for one parameter, in original load order.
    pub fn for_parameter<'a>(&'a self, parameter: &'a str) -> impl Iterator<Item = &'a Observation> {
        self.observations
            .iter()
            .filter(move |obs| obs.parameter == parameter)
    }
}
