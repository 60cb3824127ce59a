use opd_core::models::visit::VisitRecord;
use serde::{Deserialize, Serialize};

/// Visits recorded during one session, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitLog {
    visits: Vec<VisitRecord>,
}

/// One bar of the dashboard's diagnosis chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisCount {
    pub diagnosis: String,
    pub count: usize,
}

impl VisitLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_visits(visits: Vec<VisitRecord>) -> Self {
        Self { visits }
    }

    pub fn visits(&self) -> &[VisitRecord] {
        &self.visits
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    pub fn record(&mut self, visit: VisitRecord) {
        self.visits.push(visit);
    }

    /// Most recent visit for a patient ID, compared case-insensitively.
    pub fn find_by_patient_id(&self, patient_id: &str) -> Option<&VisitRecord> {
        let wanted = patient_id.trim();
        if wanted.is_empty() {
            return None;
        }
        self.visits
            .iter()
            .rev()
            .find(|v| v.patient_id.eq_ignore_ascii_case(wanted))
    }

    /// ID offered to the next new patient: `A` followed by the visit count
    /// plus one.
    pub fn next_patient_id(&self) -> String {
        format!("A{}", self.visits.len() + 1)
    }

    /// Visits per diagnosis, most frequent first. Ties keep the order in
    /// which the diagnosis first appeared.
    pub fn diagnosis_distribution(&self) -> Vec<DiagnosisCount> {
        let mut counts: Vec<DiagnosisCount> = Vec::new();
        for visit in &self.visits {
            match counts.iter_mut().find(|c| c.diagnosis == visit.diagnosis) {
                Some(entry) => entry.count += 1,
                None => counts.push(DiagnosisCount {
                    diagnosis: visit.diagnosis.clone(),
                    count: 1,
                }),
            }
        }
        // Stable sort keeps first-appearance order among equal counts.
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }

    /// Replace the whole log, e.g. after importing a backup.
    pub fn replace_all(&mut self, visits: Vec<VisitRecord>) {
        self.visits = visits;
    }

    pub fn clear(&mut self) {
        self.visits.clear();
    }
}
