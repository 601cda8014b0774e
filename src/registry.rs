// 🏥 Clinic Registry - owns every entity and hands out identifiers
//
// - Patients: map keyed by id
// - Doctors: ordered list, linear lookup (small clinics)
// - Appointments: flat list in scheduling order + date index of ids
// - Medical records: created standalone, attached to patients on request
//
// Counters live on the instance, so independent registries never share ids.

use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;

use crate::entities::{
    Appointment, AppointmentId, AppointmentStatus, Doctor, DoctorId, MedicalRecord, NewDoctor,
    NewPerson, Patient, PatientId, PatientStatus, Person, RecordId,
};
use crate::error::{ClinicError, Result};

// ============================================================================
// CLINIC REGISTRY
// ============================================================================

#[derive(Debug, Clone)]
pub struct ClinicRegistry {
    pub(crate) patients: BTreeMap<PatientId, Patient>,
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
    medical_records: Vec<MedicalRecord>,

    /// "YYYY-MM-DD" → appointment ids in scheduling order
    appointments_by_date: BTreeMap<String, Vec<AppointmentId>>,

    pub(crate) next_patient_id: PatientId,
    next_doctor_id: DoctorId,
    next_appointment_id: AppointmentId,
    next_record_id: RecordId,
}

impl ClinicRegistry {
    pub fn new() -> Self {
        ClinicRegistry {
            patients: BTreeMap::new(),
            doctors: Vec::new(),
            appointments: Vec::new(),
            medical_records: Vec::new(),
            appointments_by_date: BTreeMap::new(),
            next_patient_id: 1,
            next_doctor_id: 1,
            next_appointment_id: 1,
            next_record_id: 1,
        }
    }

    // ========================================================================
    // PATIENTS
    // ========================================================================

    /// Register a patient under the next free id (status Active)
    ///
    /// Fails only once the id space is used up.
    pub fn add_patient(&mut self, details: NewPerson) -> Result<&Patient> {
        let id = allocate_id(&mut self.next_patient_id, "patient")?;

        debug!("Registering patient {:04} ({})", id, details.name);
        self.patients.insert(id, Patient::new(id, Person::new(details)));
        Ok(&self.patients[&id])
    }

    pub fn find_patient(&self, patient_id: PatientId) -> Option<&Patient> {
        self.patients.get(&patient_id)
    }

    pub fn find_patient_mut(&mut self, patient_id: PatientId) -> Option<&mut Patient> {
        self.patients.get_mut(&patient_id)
    }

    /// Patients in ascending id order
    pub fn patients(&self) -> impl Iterator<Item = &Patient> {
        self.patients.values()
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    /// Returns false if no such patient
    pub fn set_patient_status(&mut self, patient_id: PatientId, status: PatientStatus) -> bool {
        match self.patients.get_mut(&patient_id) {
            Some(patient) => {
                patient.set_status(status);
                true
            }
            None => false,
        }
    }

    /// Returns false if no such patient or the allergy was already recorded
    pub fn add_allergy(&mut self, patient_id: PatientId, allergy: impl Into<String>) -> bool {
        self.patients
            .get_mut(&patient_id)
            .map(|patient| patient.add_allergy(allergy))
            .unwrap_or(false)
    }

    // ========================================================================
    // DOCTORS
    // ========================================================================

    pub fn add_doctor(&mut self, request: NewDoctor) -> Result<&Doctor> {
        let id = allocate_id(&mut self.next_doctor_id, "doctor")?;

        debug!("Registering doctor {:04} ({})", id, request.person.name);
        self.doctors.push(Doctor::new(id, request));
        Ok(&self.doctors[self.doctors.len() - 1])
    }

    pub fn find_doctor(&self, doctor_id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|doctor| doctor.id() == doctor_id)
    }

    /// Doctors in registration order
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn doctor_count(&self) -> usize {
        self.doctors.len()
    }

    // ========================================================================
    // APPOINTMENTS
    // ========================================================================

    /// Book an appointment between an existing patient and doctor
    ///
    /// Returns None, and changes nothing, if either id is unknown or appointment
    /// ids are used up.
    pub fn schedule_appointment(
        &mut self,
        patient_id: PatientId,
        doctor_id: DoctorId,
        date: NaiveDate,
        time: impl Into<String>,
        reason: impl Into<String>,
    ) -> Option<&Appointment> {
        if self.find_patient(patient_id).is_none() || self.find_doctor(doctor_id).is_none() {
            debug!(
                "Cannot schedule: patient {:04} or doctor {:04} not registered",
                patient_id, doctor_id
            );
            return None;
        }

        let id = allocate_id(&mut self.next_appointment_id, "appointment").ok()?;

        let appointment = Appointment::new(id, patient_id, doctor_id, date, time, reason);
        self.appointments_by_date
            .entry(appointment.date_key())
            .or_default()
            .push(id);
        debug!("Scheduled appointment {:04} on {}", id, appointment.date_key());
        self.appointments.push(appointment);

        self.appointments.last()
    }

    /// Appointment ids increase with position, so the flat list is sorted by id
    pub fn find_appointment(&self, appointment_id: AppointmentId) -> Option<&Appointment> {
        let index = self
            .appointments
            .binary_search_by_key(&appointment_id, |a| a.id())
            .ok()?;
        self.appointments.get(index)
    }

    fn find_appointment_mut(&mut self, appointment_id: AppointmentId) -> Option<&mut Appointment> {
        let index = self
            .appointments
            .binary_search_by_key(&appointment_id, |a| a.id())
            .ok()?;
        self.appointments.get_mut(index)
    }

    /// All appointments in scheduling order
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn appointment_count(&self) -> usize {
        self.appointments.len()
    }

    /// Appointments in the bucket for an exact "YYYY-MM-DD" key, in scheduling order
    pub fn appointments_on(&self, date_key: &str) -> Vec<&Appointment> {
        self.appointments_by_date
            .get(date_key)
            .map(|ids| ids.iter().filter_map(|id| self.find_appointment(*id)).collect())
            .unwrap_or_default()
    }

    /// Date keys in ascending order with their bucket sizes
    pub fn appointment_dates(&self) -> impl Iterator<Item = (&str, usize)> {
        self.appointments_by_date
            .iter()
            .map(|(date, ids)| (date.as_str(), ids.len()))
    }

    pub fn set_appointment_status(
        &mut self,
        appointment_id: AppointmentId,
        status: AppointmentStatus,
    ) -> bool {
        match self.find_appointment_mut(appointment_id) {
            Some(appointment) => {
                appointment.set_status(status);
                true
            }
            None => false,
        }
    }

    /// Copy an appointment into its patient's own per-date index
    pub fn attach_appointment_to_patient(&mut self, appointment_id: AppointmentId) -> Result<()> {
        let appointment = self
            .find_appointment(appointment_id)
            .cloned()
            .ok_or(ClinicError::AppointmentNotFound(appointment_id))?;

        let patient = self
            .patients
            .get_mut(&appointment.patient_id())
            .ok_or(ClinicError::PatientNotFound(appointment.patient_id()))?;
        patient.add_appointment(&appointment);
        Ok(())
    }

    // ========================================================================
    // MEDICAL RECORDS
    // ========================================================================

    /// Create a record under the next record id; NOT attached to any patient
    pub fn create_medical_record(
        &mut self,
        date: NaiveDate,
        diagnosis: impl Into<String>,
        treatment_notes: impl Into<String>,
        doctor_notes: impl Into<String>,
    ) -> Result<&mut MedicalRecord> {
        let id = allocate_id(&mut self.next_record_id, "medical record")?;

        debug!("Created medical record {:04}", id);
        self.medical_records.push(MedicalRecord::new(
            id,
            date,
            diagnosis,
            treatment_notes,
            doctor_notes,
        ));
        let last = self.medical_records.len() - 1;
        Ok(&mut self.medical_records[last])
    }

    pub fn find_medical_record(&self, record_id: RecordId) -> Option<&MedicalRecord> {
        self.medical_records.iter().find(|r| r.id() == record_id)
    }

    pub fn find_medical_record_mut(&mut self, record_id: RecordId) -> Option<&mut MedicalRecord> {
        self.medical_records.iter_mut().find(|r| r.id() == record_id)
    }

    pub fn medical_records(&self) -> &[MedicalRecord] {
        &self.medical_records
    }

    /// Append an existing record to a patient's history
    pub fn attach_medical_record(
        &mut self,
        patient_id: PatientId,
        record_id: RecordId,
    ) -> Result<()> {
        if self.find_medical_record(record_id).is_none() {
            return Err(ClinicError::RecordNotFound(record_id));
        }
        let patient = self
            .patients
            .get_mut(&patient_id)
            .ok_or(ClinicError::PatientNotFound(patient_id))?;

        patient.add_medical_record(record_id);
        debug!("Attached record {:04} to patient {:04}", record_id, patient_id);
        Ok(())
    }

    /// A patient's attached records in attachment order (None if unknown patient)
    pub fn medical_history(&self, patient_id: PatientId) -> Option<Vec<&MedicalRecord>> {
        let patient = self.find_patient(patient_id)?;
        Some(
            patient
                .medical_history()
                .iter()
                .filter_map(|id| self.find_medical_record(*id))
                .collect(),
        )
    }

    // ========================================================================
    // DISPLAY HELPERS
    // ========================================================================

    pub(crate) fn patient_name(&self, patient_id: PatientId) -> Option<&str> {
        self.find_patient(patient_id).map(|p| p.name())
    }

    pub(crate) fn doctor_name(&self, doctor_id: DoctorId) -> Option<&str> {
        self.find_doctor(doctor_id).map(|d| d.name())
    }
}

/// Hand out the counter's value and advance it
///
/// The last representable value is never issued, so the counter always has a successor.
fn allocate_id(counter: &mut u32, kind: &'static str) -> Result<u32> {
    let id = *counter;
    *counter = id.checked_add(1).ok_or(ClinicError::IdsExhausted(kind))?;
    Ok(id)
}

impl Default for ClinicRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn person(name: &str) -> NewPerson {
        NewPerson::new(
            name,
            format!("{}@example.com", name.to_lowercase()),
            "0550000000",
            "Accra",
            "Female",
            NaiveDate::from_ymd_opt(1995, 3, 14).unwrap(),
            "Mum: 0240000000",
        )
    }

    pub(crate) fn doctor(name: &str) -> NewDoctor {
        NewDoctor::new(person(name), "General Practice", 12, "Room 1", "Mon - Fri, 8:00 - 17:00")
    }

    pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_patient_ids_are_sequential() {
        let mut registry = ClinicRegistry::new();

        let ama = registry.add_patient(person("Ama")).unwrap().id();
        let kofi = registry.add_patient(person("Kofi")).unwrap().id();
        let esi = registry.add_patient(person("Esi")).unwrap().id();

        assert_eq!((ama, kofi, esi), (1, 2, 3));
        assert_eq!(registry.patient_count(), 3);
        assert_eq!(registry.find_patient(2).unwrap().name(), "Kofi");
        assert_eq!(registry.find_patient(2).unwrap().status(), PatientStatus::Active);
    }

    #[test]
    fn test_find_patient_miss_is_none() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient(person("Ama")).unwrap();

        assert!(registry.find_patient(0).is_none());
        assert!(registry.find_patient(2).is_none());
    }

    #[test]
    fn test_doctor_ids_independent_of_patients() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient(person("Ama")).unwrap();
        registry.add_patient(person("Kofi")).unwrap();

        let first = registry.add_doctor(doctor("Dr. Sly")).unwrap().id();
        let second = registry.add_doctor(doctor("Dr. Eric")).unwrap().id();

        assert_eq!((first, second), (1, 2));
        assert_eq!(registry.find_doctor(2).unwrap().name(), "Dr. Eric");
        assert!(registry.find_doctor(3).is_none());
        assert_eq!(registry.doctors().len(), 2);
    }

    #[test]
    fn test_registries_do_not_share_counters() {
        let mut a = ClinicRegistry::new();
        let mut b = ClinicRegistry::new();

        a.add_patient(person("Ama")).unwrap();
        a.add_patient(person("Kofi")).unwrap();

        assert_eq!(b.add_patient(person("Esi")).unwrap().id(), 1);
    }

    #[test]
    fn test_allocate_id_never_issues_last_value() {
        let mut counter = u32::MAX - 1;

        assert_eq!(allocate_id(&mut counter, "doctor").unwrap(), u32::MAX - 1);
        assert!(matches!(
            allocate_id(&mut counter, "doctor"),
            Err(ClinicError::IdsExhausted("doctor"))
        ));
        assert_eq!(counter, u32::MAX);
    }

    #[test]
    fn test_schedule_appointment_success() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient(person("Ama")).unwrap();
        registry.add_doctor(doctor("Dr. Sly")).unwrap();

        let appt = registry
            .schedule_appointment(1, 1, date(2025, 12, 5), "10:30", "General Checkup")
            .cloned()
            .unwrap();

        assert_eq!(appt.id(), 1);
        assert_eq!(appt.status(), AppointmentStatus::Scheduled);
        assert_eq!(registry.appointment_count(), 1);
        assert_eq!(registry.appointments_on("2025-12-05")[0].id(), 1);
    }

    #[test]
    fn test_schedule_with_unknown_doctor_changes_nothing() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient(person("Ama")).unwrap();
        registry.add_patient(person("Kofi")).unwrap();

        assert!(registry
            .schedule_appointment(1, 99, date(2025, 8, 7), "09:00", "Checkup")
            .is_none());
        assert_eq!(registry.appointment_count(), 0);
        assert_eq!(registry.appointment_dates().count(), 0);

        // Counter untouched: the next successful booking still gets id 1
        registry.add_doctor(doctor("Dr. Sly")).unwrap();
        let id = registry
            .schedule_appointment(2, 1, date(2025, 8, 7), "09:00", "Checkup")
            .unwrap()
            .id();
        assert_eq!(id, 1);
    }

    #[test]
    fn test_schedule_with_unknown_patient_changes_nothing() {
        let mut registry = ClinicRegistry::new();
        registry.add_doctor(doctor("Dr. Sly")).unwrap();

        assert!(registry
            .schedule_appointment(7, 1, date(2025, 8, 7), "09:00", "Checkup")
            .is_none());
        assert!(registry.appointments().is_empty());
        assert!(registry.appointments_on("2025-08-07").is_empty());
    }

    #[test]
    fn test_date_index_matches_flat_list() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient(person("Ama")).unwrap();
        registry.add_patient(person("Kofi")).unwrap();
        registry.add_doctor(doctor("Dr. Sly")).unwrap();

        let plan = [
            (1, date(2025, 12, 5), "10:30"),
            (2, date(2025, 8, 7), "12:45"),
            (2, date(2025, 12, 5), "08:00"),
            (1, date(2025, 12, 5), "16:15"),
        ];
        for (patient, day, time) in plan {
            registry.schedule_appointment(patient, 1, day, time, "Review");
        }

        // Every appointment is in exactly one bucket, exactly once
        for appt in registry.appointments() {
            let matches: usize = registry
                .appointment_dates()
                .map(|(key, _)| {
                    registry
                        .appointments_on(key)
                        .iter()
                        .filter(|a| a.id() == appt.id())
                        .count()
                })
                .sum();
            assert_eq!(matches, 1);
            assert!(registry
                .appointments_on(&appt.date_key())
                .iter()
                .any(|a| a.id() == appt.id()));
        }

        // Buckets keep scheduling order, dates ascend
        let december: Vec<_> = registry
            .appointments_on("2025-12-05")
            .iter()
            .map(|a| a.id())
            .collect();
        assert_eq!(december, vec![1, 3, 4]);

        let dates: Vec<_> = registry.appointment_dates().collect();
        assert_eq!(dates, vec![("2025-08-07", 1), ("2025-12-05", 3)]);
    }

    #[test]
    fn test_set_appointment_status() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient(person("Ama")).unwrap();
        registry.add_doctor(doctor("Dr. Sly")).unwrap();
        registry.schedule_appointment(1, 1, date(2025, 8, 7), "09:00", "Checkup");

        assert!(registry.set_appointment_status(1, AppointmentStatus::Completed));
        assert!(!registry.set_appointment_status(2, AppointmentStatus::Cancelled));
        assert_eq!(
            registry.find_appointment(1).unwrap().status(),
            AppointmentStatus::Completed
        );
        assert_eq!(
            registry.appointments_on("2025-08-07")[0].status(),
            AppointmentStatus::Completed
        );
    }

    #[test]
    fn test_scheduling_does_not_touch_patient_index_until_attached() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient(person("Ama")).unwrap();
        registry.add_doctor(doctor("Dr. Sly")).unwrap();
        registry.schedule_appointment(1, 1, date(2025, 8, 7), "09:00", "Checkup");

        assert!(registry.find_patient(1).unwrap().appointments().is_empty());

        registry.attach_appointment_to_patient(1).unwrap();
        let index = registry.find_patient(1).unwrap().appointments();
        assert_eq!(index.get(&date(2025, 8, 7)), Some(&1));

        assert!(matches!(
            registry.attach_appointment_to_patient(9),
            Err(ClinicError::AppointmentNotFound(9))
        ));
    }

    #[test]
    fn test_medical_record_is_not_attached_on_creation() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient(person("Ama")).unwrap();

        let record_id = registry
            .create_medical_record(
                date(2025, 12, 5),
                "Flu",
                "Fluids and rest",
                "Recheck in 3 days",
            )
            .unwrap()
            .id();

        assert_eq!(record_id, 1);
        assert!(registry.medical_history(1).unwrap().is_empty());

        registry.attach_medical_record(1, record_id).unwrap();
        let history = registry.medical_history(1).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].diagnosis(), "Flu");
    }

    #[test]
    fn test_attach_medical_record_misses() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient(person("Ama")).unwrap();
        let record_id = registry
            .create_medical_record(date(2025, 1, 1), "Cough", "", "")
            .unwrap()
            .id();

        assert!(matches!(
            registry.attach_medical_record(5, record_id),
            Err(ClinicError::PatientNotFound(5))
        ));
        assert!(matches!(
            registry.attach_medical_record(1, 42),
            Err(ClinicError::RecordNotFound(42))
        ));
        assert!(registry.find_patient(1).unwrap().medical_history().is_empty());
        assert!(registry.medical_history(5).is_none());
    }

    #[test]
    fn test_history_order_and_record_edits() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient(person("Ama")).unwrap();

        let first = registry
            .create_medical_record(date(2025, 1, 1), "Cough", "Syrup", "")
            .unwrap()
            .id();
        let second = registry
            .create_medical_record(date(2025, 2, 1), "Rash", "Cream", "")
            .unwrap()
            .id();
        registry
            .find_medical_record_mut(second)
            .unwrap()
            .add_prescription("Hydrocortisone 1%");

        registry.attach_medical_record(1, second).unwrap();
        registry.attach_medical_record(1, first).unwrap();

        let diagnoses: Vec<_> = registry
            .medical_history(1)
            .unwrap()
            .iter()
            .map(|r| r.diagnosis().to_string())
            .collect();
        assert_eq!(diagnoses, vec!["Rash", "Cough"]);
        assert_eq!(
            registry.find_medical_record(second).unwrap().prescriptions(),
            &["Hydrocortisone 1%"]
        );
    }

    #[test]
    fn test_patient_status_and_allergies() {
        let mut registry = ClinicRegistry::new();
        registry.add_patient(person("Ama")).unwrap();

        assert!(registry.set_patient_status(1, PatientStatus::Inactive));
        assert!(!registry.set_patient_status(2, PatientStatus::Inactive));
        assert!(registry.add_allergy(1, "Latex"));
        assert!(!registry.add_allergy(1, "Latex"));
        assert!(!registry.add_allergy(2, "Latex"));

        let ama = registry.find_patient(1).unwrap();
        assert_eq!(ama.status(), PatientStatus::Inactive);
        assert_eq!(ama.allergies().len(), 1);
    }
}
