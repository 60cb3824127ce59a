use std::time::Duration;

use opd_core::models::advice::{Advice, AdviceSource};
use opd_core::models::request::SuggestionRequest;
use opd_core::segments::parse_segments;
use opd_rules::Resolver;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::client::ModelClient;
use crate::error::AdvisorError;
use crate::prompt::build_prompt;

/// How model attempts are made before falling back to the rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorPolicy {
    /// Upper bound on a single model attempt.
    pub attempt_timeout_secs: u64,
    /// Skip every model and answer from the rule table directly.
    pub offline: bool,
}

impl Default for AdvisorPolicy {
    fn default() -> Self {
        Self {
            attempt_timeout_secs: 30,
            offline: false,
        }
    }
}

impl AdvisorPolicy {
    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_secs(self.attempt_timeout_secs)
    }
}

/// Produce advice for a consultation.
///
/// Tries `clients` in order. An attempt fails on invocation error, timeout,
/// an empty reply, or a reply without the expected segments; the next
/// client is then tried. When every attempt has failed, or the policy is
/// offline, the resolver answers. Never returns an error.
pub async fn advise<C: ModelClient>(
    clients: &[C],
    resolver: &Resolver,
    request: &SuggestionRequest,
    policy: &AdvisorPolicy,
) -> Advice {
    if !policy.offline && !clients.is_empty() {
        let prompt = build_prompt(request);
        for client in clients {
            match attempt(client, &prompt, policy.attempt_timeout()).await {
                Ok(advice) => return advice,
                Err(e) => {
                    warn!(model_id = client.model_id(), error = %e, "model attempt failed");
                }
            }
        }
    }

    fallback(resolver, request)
}

/// One bounded model attempt.
pub async fn attempt<C: ModelClient>(
    client: &C,
    prompt: &str,
    timeout: Duration,
) -> Result<Advice, AdvisorError> {
    let model_id = client.model_id();
    info!(model_id, "requesting suggestion");

    let reply = tokio::time::timeout(timeout, client.generate(prompt))
        .await
        .map_err(|_| AdvisorError::Timeout(timeout))??;

    if reply.trim().is_empty() {
        return Err(AdvisorError::EmptyResponse);
    }

    let segments = parse_segments(&reply)?;
    if segments.rx.is_empty() {
        return Err(AdvisorError::MissingPrescription);
    }

    info!(model_id, diagnosis = %segments.diagnosis, "model suggestion accepted");

    Ok(Advice {
        id: Uuid::new_v4(),
        source: AdviceSource::Model {
            model_id: model_id.to_string(),
        },
        diagnosis: segments.diagnosis,
        prescription: segments.rx,
        suggestion: None,
        created_at: jiff::Timestamp::now(),
    })
}

/// Answer from the rule table.
pub fn fallback(resolver: &Resolver, request: &SuggestionRequest) -> Advice {
    let resolution = resolver.explain(request);
    info!(rule = resolution.rule_id, "answering from rule table");

    Advice {
        id: Uuid::new_v4(),
        source: AdviceSource::Fallback {
            rule_id: resolution.rule_id.to_string(),
        },
        diagnosis: resolution.result.diagnosis.clone(),
        prescription: resolution.result.rx_text(),
        suggestion: Some(resolution.result),
        created_at: jiff::Timestamp::now(),
    }
}
