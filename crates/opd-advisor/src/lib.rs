//! opd-advisor
//!
//! Suggestion orchestration: try each configured model in turn, bounded by
//! a per-attempt timeout, and fall back to the rule-based resolver when
//! every attempt fails. The model transport itself lives behind
//! [`client::ModelClient`].

pub mod advise;
pub mod client;
pub mod error;
pub mod prompt;
