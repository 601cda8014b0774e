// 📋 MedicalRecord - one diagnosis/treatment note
//
// Created on its own by the registry. Attaching it to a patient's history is a
// separate step the caller performs explicitly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type RecordId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalRecord {
    id: RecordId,
    date: NaiveDate,
    diagnosis: String,
    treatment_notes: String,
    doctor_notes: String,
    prescriptions: Vec<String>,
}

impl MedicalRecord {
    pub fn new(
        id: RecordId,
        date: NaiveDate,
        diagnosis: impl Into<String>,
        treatment_notes: impl Into<String>,
        doctor_notes: impl Into<String>,
    ) -> Self {
        MedicalRecord {
            id,
            date,
            diagnosis: diagnosis.into(),
            treatment_notes: treatment_notes.into(),
            doctor_notes: doctor_notes.into(),
            prescriptions: Vec::new(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn diagnosis(&self) -> &str {
        &self.diagnosis
    }

    pub fn treatment_notes(&self) -> &str {
        &self.treatment_notes
    }

    pub fn set_treatment_notes(&mut self, notes: impl Into<String>) {
        self.treatment_notes = notes.into();
    }

    pub fn doctor_notes(&self) -> &str {
        &self.doctor_notes
    }

    pub fn set_doctor_notes(&mut self, notes: impl Into<String>) {
        self.doctor_notes = notes.into();
    }

    pub fn prescriptions(&self) -> &[String] {
        &self.prescriptions
    }

    pub fn add_prescription(&mut self, prescription: impl Into<String>) {
        self.prescriptions.push(prescription.into());
    }
}
