use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown treatment mode: {0}")]
    InvalidMode(String),

    #[error("unknown sex: {0}")]
    InvalidSex(String),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("missing segment marker: {0}")]
    MissingMarker(&'static str),
}
