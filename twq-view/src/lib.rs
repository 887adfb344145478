//! Output payloads for the dashboard's external collaborators.
//!
//! All structs derive `Serialize` so they can be handed to the mapping and
//! charting layers as JSON. Undefined statistics (`NaN`) serialize as `null`.

pub mod chart;
pub mod map;
