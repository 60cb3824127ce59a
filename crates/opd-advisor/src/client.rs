use std::future::Future;

use crate::error::AdvisorError;

/// A hosted generative model that can answer a consultation prompt.
///
/// Implementations own their transport, credentials and retries; the
/// advisor only sees the reply text or an error.
pub trait ModelClient: Send + Sync {
    /// Identifier recorded on the advice, e.g. `gemini-1.5-flash`.
    fn model_id(&self) -> &str;

    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, AdvisorError>> + Send;
}
