//! opd-core
//!
//! Pure domain types for the OPD desk: treatment modes, vitals, suggestion
//! requests and results, visit records, and the delimited text format used
//! to exchange suggestions with model replies. No I/O; this is the shared
//! vocabulary of the other crates.

pub mod error;
pub mod file_names;
pub mod models;
pub mod numeric;
pub mod segments;
