// Clinic Desk - Core Library
// Patient/doctor registry, appointment scheduling, flat-file persistence and reports.
// Exposes all modules for use in the CLI and tests.

pub mod entities;
pub mod error;
pub mod registry;
pub mod storage;
pub mod report;
pub mod summary;
pub mod demo;

// Re-export commonly used types
pub use entities::{
    Appointment, AppointmentId, AppointmentStatus,
    Doctor, DoctorId, NewDoctor,
    MedicalRecord, RecordId,
    NewPerson, Person,
    Patient, PatientId, PatientStatus,
};
pub use error::{ClinicError, Result};
pub use registry::ClinicRegistry;
pub use report::{format_id, normalize_date_key};
pub use storage::{LoadSummary, PATIENT_FIELDS};
pub use summary::{DateCount, RegistrySummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
