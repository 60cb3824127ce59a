//! opd-session
//!
//! The desk's working state for one run: the access gate, the visit log,
//! the last advice shown, intake form prefill, and JSON/CSV backups of the
//! log. Nothing here is ambient; a [`session::Session`] is created by the
//! caller and passed where it is needed.

pub mod access;
pub mod backup;
pub mod error;
pub mod intake;
pub mod log;
pub mod session;
