//! opd-export
//!
//! Printable consultation slips rendered from Tera templates, laid out for
//! narrow thermal printers.

pub mod error;
pub mod layout;
pub mod render;
