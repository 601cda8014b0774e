// 🧾 Console reports
//
// Human-readable only. Each report has a `write_*` form taking any writer and a
// `generate_*` form that prints to stdout.

use std::io::{self, Write};

use crate::entities::{PatientId, Person};
use crate::registry::ClinicRegistry;

const UNKNOWN: &str = "<unknown>";

/// Zero-padded 4-digit display id ("0007")
pub fn format_id(id: u32) -> String {
    format!("{:04}", id)
}

/// Pad single-digit month/day so "2025-8-7" and "2025-08-07" name the same bucket
///
/// Text that is not three `-`-separated parts is returned unchanged.
pub fn normalize_date_key(date_text: &str) -> String {
    let parts: Vec<&str> = date_text.split('-').collect();
    if parts.len() != 3 {
        return date_text.to_string();
    }

    let pad = |part: &str| {
        if part.len() == 1 {
            format!("0{}", part)
        } else {
            part.to_string()
        }
    };
    format!("{}-{}-{}", parts[0], pad(parts[1]), pad(parts[2]))
}

impl ClinicRegistry {
    pub fn write_patient_report<W: Write>(
        &self,
        patient_id: PatientId,
        out: &mut W,
    ) -> io::Result<()> {
        let id = format_id(patient_id);

        let Some(patient) = self.find_patient(patient_id) else {
            return writeln!(out, "No patient found with ID: {}", id);
        };
        let person: &Person = patient.person();

        writeln!(out, "----- PATIENT REPORT -----")?;
        writeln!(out, "ID: {}", id)?;
        writeln!(out, "Name: {}", person.name())?;
        writeln!(out, "Email: {}", person.email())?;
        writeln!(out, "Phone: {}", person.phone())?;
        writeln!(out, "Address: {}", person.address())?;
        writeln!(out, "Gender: {}", person.gender())?;
        writeln!(out, "Date of Birth: {}", person.date_of_birth())?;
        writeln!(out, "Emergency Contact: {}", person.emergency_contact())?;
        writeln!(out, "Status: {}", patient.status())?;
        writeln!(
            out,
            "Registered: {}",
            person.registered_at().format("%Y-%m-%d %H:%M")
        )?;
        writeln!(out, "--------------------------")
    }

    /// Appointments in the bucket for `date_text`, in scheduling order
    pub fn write_appointment_report<W: Write>(
        &self,
        date_text: &str,
        out: &mut W,
    ) -> io::Result<()> {
        let date_key = normalize_date_key(date_text);
        let appointments = self.appointments_on(&date_key);

        if appointments.is_empty() {
            return writeln!(out, "No appointments on {}", date_key);
        }

        writeln!(out, "===== APPOINTMENTS ON {} =====", date_key)?;
        for appointment in appointments {
            writeln!(
                out,
                "ID: {}, Time: {}, Patient: {}, Doctor: {}, Reason: {}, Status: {}",
                format_id(appointment.id()),
                appointment.time(),
                self.patient_name(appointment.patient_id()).unwrap_or(UNKNOWN),
                self.doctor_name(appointment.doctor_id()).unwrap_or(UNKNOWN),
                appointment.reason(),
                appointment.status()
            )?;
        }
        writeln!(out, "=====================================")
    }

    pub fn generate_patient_report(&self, patient_id: PatientId) -> io::Result<()> {
        let stdout = io::stdout();
        self.write_patient_report(patient_id, &mut stdout.lock())
    }

    pub fn generate_appointment_report(&self, date_text: &str) -> io::Result<()> {
        let stdout = io::stdout();
        self.write_appointment_report(date_text, &mut stdout.lock())
    }
}
