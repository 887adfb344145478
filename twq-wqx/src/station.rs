use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal places of coordinate precision used for station identity.
pub const COORD_DECIMALS: u32 = 5;

/// Scale factor corresponding to [`COORD_DECIMALS`].
const COORD_SCALE: f64 = 100_000.0;

/// Canonical identity of a monitoring station.
///
/// Two observations belong to the same station when their coordinates agree
/// after rounding to 5 decimal places (about one meter of latitude). The
/// rounded coordinates are stored as scaled integers so the key is `Eq`,
/// `Hash`, and `Ord`, and rounding an already-rounded coordinate is a no-op.
///
/// The source data also carries a textual location identifier in some
/// extracts, but not all; coordinates are the one identity every record has,
/// so they are the canonical scheme. The map collaborator reports clicks as
/// coordinates, which round back to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StationKey {
    /// Latitude in degrees scaled by 10^5.
    pub lat_e5: i64,
    /// Longitude in degrees scaled by 10^5.
    pub lon_e5: i64,
}

impl StationKey {
    /// Derive a key from raw coordinates in decimal degrees.
    pub fn from_coords(latitude: f64, longitude: f64) -> Self {
        StationKey {
            lat_e5: (latitude * COORD_SCALE).round() as i64,
            lon_e5: (longitude * COORD_SCALE).round() as i64,
        }
    }

    /// Rounded latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.lat_e5 as f64 / COORD_SCALE
    }

    /// Rounded longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.lon_e5 as f64 / COORD_SCALE
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.latitude(), self.longitude())
    }
}
