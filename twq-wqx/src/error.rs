use std::fmt;

/// Errors surfaced by observation ingestion.
///
/// Per-record problems are never errors; they are skips tallied in
/// [`crate::store::IngestStats`]. Only a load that produces zero valid
/// observations is surfaced, and exactly once.
#[derive(Debug, PartialEq, Clone)]
pub enum IngestError {
    /// No valid records remained after filtering and coercion.
    MissingData { records_seen: usize },
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::MissingData { records_seen } => write!(
                f,
                "no valid observations after filtering {records_seen} raw records"
            ),
        }
    }
}

impl std::error::Error for IngestError {}

/// Why a single raw record was skipped during ingestion.
///
/// Skips are logged and counted, never propagated.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SkipReason {
    MissingCoordinates,
    MissingDate,
    MissingParameter,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkipReason::MissingCoordinates => "missing or unparseable coordinates",
            SkipReason::MissingDate => "missing or unparseable date",
            SkipReason::MissingParameter => "missing parameter name",
        };
        write!(f, "{label}")
    }
}
