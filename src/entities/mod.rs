// Entity Models
//
// Each entity has:
// - Numeric identity assigned by the registry (never reused)
// - Plain owned values; cross-entity links are ids, never owned copies

pub mod person;
pub mod patient;
pub mod doctor;
pub mod appointment;
pub mod medical_record;

pub use person::{NewPerson, Person};
pub use patient::{Patient, PatientId, PatientStatus};
pub use doctor::{Doctor, DoctorId, NewDoctor};
pub use appointment::{Appointment, AppointmentId, AppointmentStatus};
pub use medical_record::{MedicalRecord, RecordId};
