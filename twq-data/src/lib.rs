//! Station aggregation over normalized water-quality observations.
//!
//! Every function here is a pure transformation over a read-only
//! [`twq_wqx::store::ObservationTable`]; empty or degenerate input produces an
//! empty result, never an error. The caller decides how to present "no data".

pub mod choices;
pub mod latest;
pub mod pivot;
pub mod stats;
pub mod summary;
