// 💾 Flat-file persistence
//
// Patient file (read/write), one line per patient, no header, no quoting:
//   IDDDD,name,email,phone,address,gender,YYYY-MM-DD,emergencyContact
//
// Appointment file (write-only):
//   IDDDD,YYYY-MM-DD,time,doctorName,reason,status
//
// Embedded commas are not escaped; a field containing one shifts the columns.

use chrono::NaiveDate;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use log::{debug, error, info, warn};
use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::entities::{NewPerson, Patient, PatientId, Person};
use crate::error::{ClinicError, Result};
use crate::registry::ClinicRegistry;
use crate::report::format_id;

/// Minimum number of columns for a patient line to be considered
pub const PATIENT_FIELDS: usize = 8;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Outcome of a patient file load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub loaded: usize,

    /// Lines dropped for having too few fields
    pub skipped: usize,
}

impl ClinicRegistry {
    /// Write every patient to `path`, replacing the file
    ///
    /// Rows come out in ascending id order, but readers should not depend on it.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = create_writer(path)?;

        for patient in self.patients() {
            writer
                .write_record(patient_row(patient))
                .map_err(|e| log_write_failure(path, e))?;
        }

        finish(writer, path)?;
        info!("Saved {} patients to {}", self.patient_count(), path.display());
        Ok(())
    }

    /// Write every appointment, in scheduling order, to `path`
    ///
    /// The line carries the doctor's name but not the patient.
    pub fn save_appointments_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = create_writer(path)?;

        for appointment in self.appointments() {
            writer.write_record([
                format_id(appointment.id()),
                appointment.date_key(),
                appointment.time().to_string(),
                self.doctor_name(appointment.doctor_id())
                    .unwrap_or_default()
                    .to_string(),
                appointment.reason().to_string(),
                appointment.status().to_string(),
            ])
            .map_err(|e| log_write_failure(path, e))?;
        }

        finish(writer, path)?;
        info!(
            "Saved {} appointments to {}",
            self.appointment_count(),
            path.display()
        );
        Ok(())
    }

    /// Replace all patients with the contents of `path`
    ///
    /// - The patient map and id counter are reset before the file is opened
    /// - Blank lines are ignored; lines with fewer than 8 fields are skipped with a warning
    /// - A bad id (including `PatientId::MAX`, which has no successor) or a date
    ///   that is not exactly `YYYY-MM-DD` aborts the load; patients read before it
    ///   stay loaded
    /// - Afterwards the counter sits one past the largest id seen
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary> {
        let path = path.as_ref();

        self.patients.clear();
        self.next_patient_id = 1;

        let file = File::open(path).map_err(|e| {
            error!("The file could not be read: {}: {}", path.display(), e);
            ClinicError::io(path, e)
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(file);

        let mut summary = LoadSummary::default();

        for result in reader.records() {
            let record = result.map_err(|e| {
                error!("The file could not be read: {}: {}", path.display(), e);
                ClinicError::from(e)
            })?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            if record.len() < PATIENT_FIELDS {
                warn!("Skipping bad line {}: {}", line, join_record(&record));
                summary.skipped += 1;
                continue;
            }

            let patient = parse_patient(&record, line)?;
            let id = patient.id();
            self.patients.insert(id, patient);
            summary.loaded += 1;

            if id >= self.next_patient_id {
                // parse_patient rejects PatientId::MAX, so this cannot overflow
                self.next_patient_id = id + 1;
            }
        }

        debug!(
            "Loaded {} patients ({} skipped) from {}; next id {:04}",
            summary.loaded,
            summary.skipped,
            path.display(),
            self.next_patient_id
        );
        Ok(summary)
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn create_writer(path: &Path) -> Result<csv::Writer<File>> {
    let file = File::create(path).map_err(|e| {
        error!("The file could not be written: {}: {}", path.display(), e);
        ClinicError::io(path, e)
    })?;

    Ok(WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(file))
}

fn log_write_failure(path: &Path, e: csv::Error) -> ClinicError {
    error!("The file could not be written: {}: {}", path.display(), e);
    ClinicError::from(e)
}

fn finish(mut writer: csv::Writer<File>, path: &Path) -> Result<()> {
    writer.flush().map_err(|e| {
        error!("The file could not be written: {}: {}", path.display(), e);
        ClinicError::io(path, e)
    })
}

fn patient_row(patient: &Patient) -> [String; PATIENT_FIELDS] {
    let person = patient.person();
    [
        format_id(patient.id()),
        person.name().to_string(),
        person.email().to_string(),
        person.phone().to_string(),
        person.address().to_string(),
        person.gender().to_string(),
        person.date_of_birth().format(DATE_FORMAT).to_string(),
        person.emergency_contact().to_string(),
    ]
}

fn parse_patient(record: &StringRecord, line: u64) -> Result<Patient> {
    let field = |index: usize| record.get(index).unwrap_or_default();

    let id_text = field(0).trim();
    let id = id_text
        .parse::<PatientId>()
        .ok()
        .filter(|id| *id < PatientId::MAX)
        .ok_or_else(|| ClinicError::InvalidId {
            line,
            value: id_text.to_string(),
        })?;

    let date_text = field(6);
    let date_of_birth = parse_date(date_text).ok_or_else(|| ClinicError::InvalidDate {
        line,
        value: date_text.to_string(),
    })?;

    let details = NewPerson::new(
        field(1),
        field(2),
        field(3),
        field(4),
        field(5),
        date_of_birth,
        field(7).trim(),
    );
    Ok(Patient::new(id, Person::new(details)))
}

/// Strict "YYYY-MM-DD": chrono alone would also take "1990-1-2"
fn parse_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

fn join_record(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}

// ============================================================================
// TESTS
// ============================================================================
