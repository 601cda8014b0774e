// Error types for the clinic registry
//
// Lookup misses are NOT errors (they come back as Option). Only file I/O,
// malformed persisted fields and explicit attach requests fail.

use std::path::PathBuf;
use thiserror::Error;

use crate::entities::{AppointmentId, PatientId, RecordId};

#[derive(Debug, Error)]
pub enum ClinicError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: invalid patient id '{value}'")]
    InvalidId { line: u64, value: String },

    #[error("line {line}: invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { line: u64, value: String },

    #[error("no patient with ID {0:04}")]
    PatientNotFound(PatientId),

    #[error("no medical record with ID {0:04}")]
    RecordNotFound(RecordId),

    #[error("no appointment with ID {0:04}")]
    AppointmentNotFound(AppointmentId),

    #[error("{0} ids exhausted")]
    IdsExhausted(&'static str),
}

impl ClinicError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ClinicError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClinicError>;
