use opd_core::models::advice::Advice;
use opd_core::models::visit::VisitRecord;
use tracing::info;
use uuid::Uuid;

use crate::access::{AccessConfig, AccessGate, AccessState};
use crate::error::SessionError;
use crate::log::VisitLog;

/// State for one run of the desk. Created when the desk opens and
/// discarded (or [`reset`](Session::reset)) on restart.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    started_at: jiff::Timestamp,
    access: AccessGate,
    log: VisitLog,
    last_advice: Option<Advice>,
}

/// An open desk with no passphrase.
impl Default for Session {
    fn default() -> Self {
        Self::new(AccessConfig::default())
    }
}

impl Session {
    pub fn new(access: AccessConfig) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: jiff::Timestamp::now(),
            access: AccessGate::new(access),
            log: VisitLog::new(),
            last_advice: None,
        };
        info!(session_id = %session.id, access = %session.access.state(), "session started");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> jiff::Timestamp {
        self.started_at
    }

    pub fn access_state(&self) -> AccessState {
        self.access.state()
    }

    /// Enter the clinic passphrase.
    pub fn unlock(&mut self, passphrase: &str) -> AccessState {
        self.access.unlock(passphrase)
    }

    pub fn log(&self) -> &VisitLog {
        &self.log
    }

    pub fn record_visit(&mut self, visit: VisitRecord) -> Result<(), SessionError> {
        self.access.require_granted()?;
        info!(
            session_id = %self.id,
            patient_id = %visit.patient_id,
            diagnosis = %visit.diagnosis,
            "visit recorded"
        );
        self.log.record(visit);
        Ok(())
    }

    /// Replace the log with imported visits. The cached advice belongs to
    /// the old log and is dropped.
    pub fn import_visits(&mut self, visits: Vec<VisitRecord>) -> Result<(), SessionError> {
        self.access.require_granted()?;
        info!(session_id = %self.id, count = visits.len(), "visit log imported");
        self.log.replace_all(visits);
        self.last_advice = None;
        Ok(())
    }

    pub fn cache_advice(&mut self, advice: Advice) {
        self.last_advice = Some(advice);
    }

    pub fn last_advice(&self) -> Option<&Advice> {
        self.last_advice.as_ref()
    }

    pub fn take_last_advice(&mut self) -> Option<Advice> {
        self.last_advice.take()
    }

    /// Start over as if the desk had been restarted. The desk locks again
    /// if it has a passphrase.
    pub fn reset(&mut self) {
        info!(session_id = %self.id, visits = self.log.len(), "session reset");
        *self = Self::new(self.access.config().clone());
    }
}
