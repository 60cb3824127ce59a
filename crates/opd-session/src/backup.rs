//! Backups of the visit log.
//!
//! The log lives in memory only; a backup is how the day's visits survive a
//! restart. Export at closing time, import the next morning. Two formats are
//! written and read: a versioned JSON document, and the CSV spreadsheet with
//! the columns clinics already keep (`ID, Name, Age, Sex, Weight, BP, Pulse,
//! O2, Symptoms, Diagnosis, Rx, Timestamp`).

use std::path::{Path, PathBuf};

use opd_core::file_names;
use opd_core::models::visit::{Sex, VisitRecord};
use opd_core::numeric::parse_lenient;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::SessionError;
use crate::log::VisitLog;

const CURRENT_FORMAT: u32 = 1;

/// On-disk shape of a JSON backup file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupFile {
    pub format_version: u32,
    pub exported_at: jiff::Timestamp,
    pub visits: Vec<VisitRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupFormat {
    #[default]
    Json,
    Csv,
}

impl BackupFormat {
    /// `.csv` files are spreadsheets; anything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => BackupFormat::Csv,
            _ => BackupFormat::Json,
        }
    }

    pub fn file_name(&self, date: jiff::civil::Date) -> String {
        match self {
            BackupFormat::Json => file_names::backup(date),
            BackupFormat::Csv => file_names::backup_csv(date),
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            BackupFormat::Json => "json",
            BackupFormat::Csv => "csv",
        }
    }

    /// Serialize the log in this format.
    pub fn export(&self, log: &VisitLog) -> Result<Vec<u8>, SessionError> {
        match self {
            BackupFormat::Json => export_backup(log),
            BackupFormat::Csv => export_csv(log),
        }
    }

    /// Parse visits written in this format.
    pub fn import(&self, bytes: &[u8]) -> Result<Vec<VisitRecord>, SessionError> {
        match self {
            BackupFormat::Json => import_backup(bytes),
            BackupFormat::Csv => import_csv(bytes),
        }
    }
}

/// Serialize the log as a JSON backup document.
pub fn export_backup(log: &VisitLog) -> Result<Vec<u8>, SessionError> {
    let file = BackupFile {
        format_version: CURRENT_FORMAT,
        exported_at: jiff::Timestamp::now(),
        visits: log.visits().to_vec(),
    };
    Ok(serde_json::to_vec_pretty(&file)?)
}

/// Parse a JSON backup document back into visits.
pub fn import_backup(bytes: &[u8]) -> Result<Vec<VisitRecord>, SessionError> {
    let file: BackupFile = serde_json::from_slice(bytes)?;
    if file.format_version > CURRENT_FORMAT {
        return Err(SessionError::UnsupportedBackupVersion {
            found: file.format_version,
            supported: CURRENT_FORMAT,
        });
    }
    Ok(file.visits)
}

/// Spreadsheet column names, in export order.
pub const CSV_HEADERS: [&str; 12] = [
    "ID", "Name", "Age", "Sex", "Weight", "BP", "Pulse", "O2", "Symptoms", "Diagnosis", "Rx",
    "Timestamp",
];

/// One spreadsheet row. Every cell is read as text so hand-edited sheets
/// (`41.0` ages, blank cells) still load.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct CsvRow {
    #[serde(rename = "ID")]
    id: String,
    name: String,
    age: String,
    sex: String,
    weight: String,
    #[serde(rename = "BP")]
    bp: String,
    pulse: String,
    #[serde(rename = "O2")]
    o2: String,
    symptoms: String,
    diagnosis: String,
    rx: String,
    /// Visit date as `YYYY-MM-DD`.
    timestamp: String,
}

impl From<&VisitRecord> for CsvRow {
    fn from(visit: &VisitRecord) -> Self {
        Self {
            id: visit.patient_id.clone(),
            name: visit.name.clone(),
            age: visit.age.to_string(),
            sex: visit.sex.to_string(),
            weight: visit.weight.to_string(),
            bp: visit.bp.clone(),
            pulse: visit.pulse.clone(),
            o2: visit.o2.clone(),
            symptoms: visit.symptoms.clone(),
            diagnosis: visit.diagnosis.clone(),
            rx: visit.rx.clone(),
            timestamp: visit.visit_date.to_string(),
        }
    }
}

impl CsvRow {
    /// `row` is the 1-based data row, for error messages.
    fn into_record(self, row: usize) -> Result<VisitRecord, SessionError> {
        let invalid = |reason: String| SessionError::InvalidRow { row, reason };

        if self.id.is_empty() {
            return Err(invalid("missing ID".to_string()));
        }
        let sex: Sex = self.sex.parse().map_err(|e| invalid(format!("{e}")))?;
        let visit_date: jiff::civil::Date = self
            .timestamp
            .parse()
            .map_err(|e| invalid(format!("bad Timestamp {:?}: {e}", self.timestamp)))?;

        Ok(VisitRecord {
            patient_id: self.id,
            name: self.name,
            age: parse_lenient(&self.age) as u32,
            sex,
            weight: parse_lenient(&self.weight),
            bp: self.bp,
            pulse: self.pulse,
            o2: self.o2,
            symptoms: self.symptoms,
            diagnosis: self.diagnosis,
            rx: self.rx,
            visit_date,
        })
    }
}

/// Serialize the log as a CSV spreadsheet. An empty log still gets the
/// header row.
pub fn export_csv(log: &VisitLog) -> Result<Vec<u8>, SessionError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;
    for visit in log.visits() {
        writer.serialize(CsvRow::from(visit))?;
    }
    writer
        .into_inner()
        .map_err(|e| SessionError::Csv(e.into_error().into()))
}

/// Parse a CSV spreadsheet into visits. Columns are matched by header name;
/// unknown columns are ignored and missing ones read as blank.
pub fn import_csv(bytes: &[u8]) -> Result<Vec<VisitRecord>, SessionError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(i, row)| row?.into_record(i + 1))
        .collect()
}

/// Write the day's JSON backup into `dir`. Returns the path written.
pub fn save_backup(
    log: &VisitLog,
    dir: &Path,
    date: jiff::civil::Date,
) -> Result<PathBuf, SessionError> {
    save_backup_as(log, dir, date, BackupFormat::Json)
}

/// Write the day's backup into `dir` in `format`. Returns the path written.
pub fn save_backup_as(
    log: &VisitLog,
    dir: &Path,
    date: jiff::civil::Date,
    format: BackupFormat,
) -> Result<PathBuf, SessionError> {
    let body = format.export(log)?;
    let path = dir.join(format.file_name(date));
    let io_err = |source| SessionError::Io {
        path: path.clone(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(io_err)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension(format!("{}.tmp", format.extension()));
    std::fs::write(&tmp_path, &body).map_err(io_err)?;
    std::fs::rename(&tmp_path, &path).map_err(io_err)?;

    info!(path = %path.display(), ?format, visits = log.len(), "backup saved");
    Ok(path)
}

/// Read visits from a backup file; the format follows the extension.
pub fn load_backup(path: &Path) -> Result<Vec<VisitRecord>, SessionError> {
    let bytes = std::fs::read(path).map_err(|source| SessionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = BackupFormat::from_path(path);
    let visits = format.import(&bytes)?;
    info!(path = %path.display(), ?format, visits = visits.len(), "backup loaded");
    Ok(visits)
}
