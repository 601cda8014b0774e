// 📊 Registry summary - counts for dashboards and the CLI `summary` command

use serde::Serialize;
use std::collections::BTreeMap;

use crate::registry::ClinicRegistry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateCount {
    pub date: String,
    pub appointments: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrySummary {
    pub total_patients: usize,
    pub total_doctors: usize,
    pub total_appointments: usize,
    pub total_medical_records: usize,

    /// Ascending by date
    pub appointments_by_date: Vec<DateCount>,

    /// Keyed by status text ("Scheduled", "Completed", ...)
    pub appointments_by_status: BTreeMap<String, usize>,

    /// Keyed by status text ("Active", "Inactive")
    pub patients_by_status: BTreeMap<String, usize>,
}

impl RegistrySummary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl ClinicRegistry {
    pub fn summary(&self) -> RegistrySummary {
        let mut appointments_by_status = BTreeMap::new();
        for appointment in self.appointments() {
            *appointments_by_status
                .entry(appointment.status().to_string())
                .or_insert(0) += 1;
        }

        let mut patients_by_status = BTreeMap::new();
        for patient in self.patients() {
            *patients_by_status
                .entry(patient.status().to_string())
                .or_insert(0) += 1;
        }

        RegistrySummary {
            total_patients: self.patient_count(),
            total_doctors: self.doctor_count(),
            total_appointments: self.appointment_count(),
            total_medical_records: self.medical_records().len(),
            appointments_by_date: self
                .appointment_dates()
                .map(|(date, appointments)| DateCount {
                    date: date.to_string(),
                    appointments,
                })
                .collect(),
            appointments_by_status,
            patients_by_status,
        }
    }
}
