// 🩺 Patient Entity - Person + clinical state
//
// Identity: numeric patient id assigned by the registry (never reused)
// Values: status, allergies, attached medical records, own appointment index

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use super::appointment::{Appointment, AppointmentId};
use super::medical_record::RecordId;
use super::person::Person;

pub type PatientId = u32;

// ============================================================================
// PATIENT STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PatientStatus {
    /// Registered and currently under care
    #[default]
    Active,

    /// No longer seen at the clinic
    Inactive,
}

impl PatientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Active => "Active",
            PatientStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatientStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(PatientStatus::Active),
            "inactive" => Ok(PatientStatus::Inactive),
            _ => Err(format!("Unknown patient status: {}", s)),
        }
    }
}

// ============================================================================
// PATIENT ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    id: PatientId,
    person: Person,
    status: PatientStatus,

    /// Attached record ids, in attachment order
    medical_history: Vec<RecordId>,

    allergies: BTreeSet<String>,

    /// One appointment per date; a later attach on the same date replaces the earlier one
    appointments: BTreeMap<NaiveDate, AppointmentId>,
}

impl Patient {
    pub fn new(id: PatientId, person: Person) -> Self {
        Patient {
            id,
            person,
            status: PatientStatus::Active,
            medical_history: Vec::new(),
            allergies: BTreeSet::new(),
            appointments: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> PatientId {
        self.id
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn status(&self) -> PatientStatus {
        self.status
    }

    pub fn set_status(&mut self, status: PatientStatus) {
        self.status = status;
    }

    pub fn medical_history(&self) -> &[RecordId] {
        &self.medical_history
    }

    pub fn add_medical_record(&mut self, record_id: RecordId) {
        self.medical_history.push(record_id);
    }

    pub fn allergies(&self) -> &BTreeSet<String> {
        &self.allergies
    }

    /// Returns false when the allergy was already recorded
    pub fn add_allergy(&mut self, allergy: impl Into<String>) -> bool {
        self.allergies.insert(allergy.into())
    }

    pub fn appointments(&self) -> &BTreeMap<NaiveDate, AppointmentId> {
        &self.appointments
    }

    pub fn add_appointment(&mut self, appointment: &Appointment) {
        self.appointments.insert(appointment.date(), appointment.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::person::NewPerson;

    fn patient() -> Patient {
        Patient::new(
            1,
            Person::new(NewPerson::new(
                "Kofi",
                "kofi@example.com",
                "0240000000",
                "Kumasi",
                "Male",
                NaiveDate::from_ymd_opt(2001, 6, 30).unwrap(),
                "Dad: 0270000000",
            )),
        )
    }

    #[test]
    fn test_new_patient_defaults() {
        let p = patient();

        assert_eq!(p.id(), 1);
        assert_eq!(p.name(), "Kofi");
        assert_eq!(p.status(), PatientStatus::Active);
        assert!(p.medical_history().is_empty());
        assert!(p.allergies().is_empty());
        assert!(p.appointments().is_empty());
    }

    #[test]
    fn test_allergies_are_a_set() {
        let mut p = patient();

        assert!(p.add_allergy("Penicillin"));
        assert!(p.add_allergy("Peanuts"));
        assert!(!p.add_allergy("Penicillin")); // Duplicate - ignored

        assert_eq!(p.allergies().len(), 2);
        assert!(p.allergies().contains("Peanuts"));
    }

    #[test]
    fn test_history_keeps_attach_order() {
        let mut p = patient();
        p.add_medical_record(3);
        p.add_medical_record(1);

        assert_eq!(p.medical_history(), &[3, 1]);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("Active".parse::<PatientStatus>(), Ok(PatientStatus::Active));
        assert_eq!(" inactive ".parse::<PatientStatus>(), Ok(PatientStatus::Inactive));
        assert!("Discharged".parse::<PatientStatus>().is_err());
        assert_eq!(PatientStatus::Inactive.to_string(), "Inactive");
    }
}
