use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("model did not answer within {0:?}")]
    Timeout(Duration),

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("response parsing failed: {0}")]
    ResponseParse(#[from] opd_core::error::CoreError),

    #[error("response carried a diagnosis but no prescription")]
    MissingPrescription,
}
