use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config is not a JSON object")]
    NotAnObject,

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u64, supported: u32 },

    #[error("invalid config: {0}")]
    Invalid(String),
}
