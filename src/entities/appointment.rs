// 📅 Appointment Entity - links a patient and a doctor on a date
//
// Patient and doctor are held as ids (non-owning), resolved through the registry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::doctor::DoctorId;
use super::patient::PatientId;

pub type AppointmentId = u32;

// ============================================================================
// APPOINTMENT STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,

    /// Patient did not turn up
    NoShow,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::NoShow => "No Show",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" | "canceled" => Ok(AppointmentStatus::Cancelled),
            "no show" | "no-show" | "noshow" => Ok(AppointmentStatus::NoShow),
            _ => Err(format!("Unknown appointment status: {}", s)),
        }
    }
}

// ============================================================================
// APPOINTMENT ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    id: AppointmentId,

    /// Time of day as entered, e.g. "10:30"
    time: String,

    reason: String,
    patient_id: PatientId,
    doctor_id: DoctorId,
    date: NaiveDate,
    status: AppointmentStatus,
}

impl Appointment {
    pub fn new(
        id: AppointmentId,
        patient_id: PatientId,
        doctor_id: DoctorId,
        date: NaiveDate,
        time: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Appointment {
            id,
            time: time.into(),
            reason: reason.into(),
            patient_id,
            doctor_id,
            date,
            status: AppointmentStatus::Scheduled,
        }
    }

    pub fn id(&self) -> AppointmentId {
        self.id
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn patient_id(&self) -> PatientId {
        self.patient_id
    }

    pub fn doctor_id(&self) -> DoctorId {
        self.doctor_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Key used by the registry's date index ("YYYY-MM-DD")
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn status(&self) -> AppointmentStatus {
        self.status
    }

    pub fn set_status(&mut self, status: AppointmentStatus) {
        self.status = status;
    }
}
