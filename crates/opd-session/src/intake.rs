use opd_core::models::advice::Advice;
use opd_core::models::mode::Mode;
use opd_core::models::request::SuggestionRequest;
use opd_core::models::template::PrescriptionTemplate;
use opd_core::models::visit::{Sex, VisitRecord};
use opd_core::models::vitals::Vitals;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::log::VisitLog;

/// The consultation form as currently filled in at the desk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeDraft {
    pub patient_id: String,
    pub name: String,
    pub age: u32,
    pub sex: Sex,
    pub weight: f64,
    pub bp: String,
    pub pulse: String,
    pub o2: String,
    pub symptoms: String,
    pub diagnosis: String,
    pub rx: String,
}

impl IntakeDraft {
    /// Prefill the form. A previous visit found under `search_id` wins
    /// over the template; otherwise the form starts with desk defaults, the
    /// next free patient ID and the template's text.
    pub fn prefill(
        log: &VisitLog,
        search_id: Option<&str>,
        template: &PrescriptionTemplate,
    ) -> Self {
        if let Some(found) = search_id.and_then(|id| log.find_by_patient_id(id)) {
            return Self::from_record(found);
        }

        Self {
            patient_id: log.next_patient_id(),
            name: String::new(),
            age: 28,
            sex: Sex::F,
            weight: 85.0,
            bp: "120/80".to_string(),
            pulse: "80".to_string(),
            o2: "98".to_string(),
            symptoms: template.symptoms.clone(),
            diagnosis: template.diagnosis.clone(),
            rx: template.rx.clone(),
        }
    }

    pub fn from_record(record: &VisitRecord) -> Self {
        Self {
            patient_id: record.patient_id.clone(),
            name: record.name.clone(),
            age: record.age,
            sex: record.sex,
            weight: record.weight,
            bp: record.bp.clone(),
            pulse: record.pulse.clone(),
            o2: record.o2.clone(),
            symptoms: record.symptoms.clone(),
            diagnosis: record.diagnosis.clone(),
            rx: record.rx.clone(),
        }
    }

    /// The resolver/model request for this form.
    pub fn suggestion_request(&self, mode: Mode) -> SuggestionRequest {
        let vitals = Vitals::default()
            .with_bp(self.bp.clone())
            .with_pulse(self.pulse.clone())
            .with_weight(self.weight.to_string())
            .with_spo2(self.o2.clone());

        SuggestionRequest::new(mode, self.symptoms.clone())
            .with_age(self.age)
            .with_vitals(vitals)
    }

    /// Copy a suggestion into the editable diagnosis and prescription.
    pub fn apply_advice(&mut self, advice: &Advice) {
        self.diagnosis = advice.diagnosis.clone();
        self.rx = advice.prescription.clone();
    }

    /// Finalise the form into a visit record.
    pub fn into_record(self, visit_date: jiff::civil::Date) -> Result<VisitRecord, SessionError> {
        let patient_id = self.patient_id.trim().to_string();
        if patient_id.is_empty() {
            return Err(SessionError::MissingField("patient_id"));
        }

        Ok(VisitRecord {
            patient_id,
            name: self.name.trim().to_string(),
            age: self.age,
            sex: self.sex,
            weight: self.weight,
            bp: self.bp,
            pulse: self.pulse,
            o2: self.o2,
            symptoms: self.symptoms,
            diagnosis: self.diagnosis.trim().to_string(),
            rx: self.rx,
            visit_date,
        })
    }
}
