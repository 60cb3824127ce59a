//! File naming conventions.
//!
//! Pure string functions with no filesystem access. These define the canonical
//! names of the files the desk writes for backups and printed slips.

use jiff::civil::Date;

/// Prefix shared by every daily backup file.
pub const BACKUP_PREFIX: &str = "OPD_Backup_";

/// Daily visit-log backup, e.g. `OPD_Backup_19-10-2026.json`.
pub fn backup(date: Date) -> String {
    format!("{BACKUP_PREFIX}{}.json", date.strftime("%d-%m-%Y"))
}

/// Daily spreadsheet export, e.g. `OPD_Backup_19-10-2026.csv`.
pub fn backup_csv(date: Date) -> String {
    format!("{BACKUP_PREFIX}{}.csv", date.strftime("%d-%m-%Y"))
}

/// Printable slip for a single visit, e.g. `Slip_A12_2026-10-19.txt`.
pub fn slip(patient_id: &str, date: Date) -> String {
    format!("Slip_{}_{date}.txt", sanitize_component(patient_id))
}

/// Replace anything outside `[A-Za-z0-9_-]` so a patient ID typed at the
/// desk can never escape the output directory.
fn sanitize_component(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "unknown".to_string()
    } else {
        cleaned
    }
}
