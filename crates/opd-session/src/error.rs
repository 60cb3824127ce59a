use std::path::PathBuf;

use thiserror::Error;

use crate::access::AccessState;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("backup format {found} is newer than this build supports ({supported})")]
    UnsupportedBackupVersion { found: u32, supported: u32 },

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("desk is locked ({0})")]
    Locked(AccessState),
}
