use chrono::NaiveDate;
use clinic_desk::demo::seed_sample_clinic;
use clinic_desk::{ClinicError, ClinicRegistry, LoadSummary, NewDoctor, NewPerson};

fn person(name: &str) -> NewPerson {
    NewPerson::new(
        name,
        format!("{}@clinic.test", name.to_lowercase()),
        "0200000000",
        "Cape Coast",
        "Male",
        NaiveDate::from_ymd_opt(1980, 10, 1).unwrap(),
        "Wife: 0201111111",
    )
}

fn report_for(registry: &ClinicRegistry, date_text: &str) -> String {
    let mut out = Vec::new();
    registry.write_appointment_report(date_text, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_front_desk_day() {
    let dir = tempfile::tempdir().unwrap();
    let patients_file = dir.path().join("patients.txt");
    let appointments_file = dir.path().join("appointments.txt");

    let mut registry = ClinicRegistry::new();
    let ids = seed_sample_clinic(&mut registry).unwrap();
    assert_eq!(ids.appointments.len(), 3);

    // Booking against an unknown doctor leaves everything as it was
    let missing = registry.schedule_appointment(
        1,
        99,
        NaiveDate::from_ymd_opt(2025, 8, 7).unwrap(),
        "15:00",
        "Walk-in",
    );
    assert!(missing.is_none());
    assert_eq!(registry.appointment_count(), 3);

    assert_eq!(
        report_for(&registry, "2025-8-7"),
        report_for(&registry, "2025-08-07")
    );
    let report = report_for(&registry, "2025-08-07");
    assert!(report.contains("Patient: Michelle, Doctor: Dr.Slyvester"));

    registry.save_to_file(&patients_file).unwrap();
    registry.save_appointments_to_file(&appointments_file).unwrap();

    let appointment_lines = std::fs::read_to_string(&appointments_file).unwrap();
    assert_eq!(appointment_lines.lines().count(), 3);
    assert!(appointment_lines
        .starts_with("0001,2025-12-05,10:30,Dr.Slyvester,General Checkup,Scheduled"));

    // A fresh registry picks the patients back up and keeps allocating after them
    let mut reloaded = ClinicRegistry::new();
    let summary = reloaded.load_from_file(&patients_file).unwrap();
    assert_eq!(summary, LoadSummary { loaded: 3, skipped: 0 });
    assert_eq!(reloaded.find_patient(2).unwrap().name(), "Michelle");
    assert_eq!(reloaded.add_patient(person("Yaw")).unwrap().id(), 4);
}

#[test]
fn test_records_are_attached_explicitly() {
    let mut registry = ClinicRegistry::new();
    let patient = registry.add_patient(person("Kwesi")).unwrap().id();
    let dermatologist = NewDoctor::new(person("Dr. Adjoa"), "Dermatology", 6, "Room 2", "Tue, Thu");
    registry.add_doctor(dermatologist).unwrap();

    let record = registry
        .create_medical_record(
            NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            "Eczema",
            "Moisturise twice daily",
            "Review in a month",
        )
        .unwrap();
    record.add_prescription("Emollient cream");
    let record_id = record.id();

    assert!(registry.medical_history(patient).unwrap().is_empty());
    registry.attach_medical_record(patient, record_id).unwrap();
    let history = registry.medical_history(patient).unwrap();
    assert_eq!(history[0].prescriptions(), &["Emollient cream"]);

    let err = registry.attach_medical_record(patient + 1, record_id).unwrap_err();
    assert!(matches!(err, ClinicError::PatientNotFound(_)));
}
