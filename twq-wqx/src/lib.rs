pub mod error;
pub mod observation;
pub mod record;
pub mod station;
pub mod store;
