use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Letterhead printed at the top of every slip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicProfile {
    pub clinic_name: String,
    pub address: String,
    /// Doctor's name with registration number.
    pub doctor_name: String,
    pub qualifications: String,
    #[serde(default)]
    pub tagline: String,
}
