// Sample clinic used by the CLI `demo`/`summary` commands

use chrono::NaiveDate;

use crate::entities::{AppointmentId, DoctorId, NewDoctor, NewPerson, PatientId};
use crate::error::Result;
use crate::registry::ClinicRegistry;

/// Ids handed out while seeding, in registration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeededIds {
    pub patients: Vec<PatientId>,
    pub doctors: Vec<DoctorId>,
    pub appointments: Vec<AppointmentId>,
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("sample clinic dates are valid")
}

fn sample_patients() -> [NewPerson; 3] {
    [
        NewPerson::new(
            "Christine",
            "christine@gmail.com",
            "0552349986",
            "Kumasi",
            "Female",
            ymd(2007, 5, 8),
            "Dad: 02445678923",
        ),
        NewPerson::new(
            "Michelle",
            "michelle@gmail.com",
            "0249988775",
            "Accra",
            "Female",
            ymd(2005, 11, 6),
            "Mum: 054330211",
        ),
        NewPerson::new(
            "Getrude",
            "getrude@gmail.com",
            "0554697843",
            "HO",
            "Female",
            ymd(2007, 3, 17),
            "Aunt: 024567891",
        ),
    ]
}

fn sample_doctors() -> [NewDoctor; 3] {
    [
        NewDoctor::new(
            NewPerson::new(
                "Dr.Slyvester",
                "drsly@clinic.com",
                "02445678945",
                "Kumasi, Ghana",
                "Male",
                ymd(1971, 3, 19),
                "Mum: 0209988776",
            ),
            "Orthopedic Surgeon",
            15,
            "Theatre 1",
            "Mon - Fri, 8:00 - 20:00",
        ),
        NewDoctor::new(
            NewPerson::new(
                "Dr.Eric",
                "eric@clinic.com",
                "0554678912",
                "Tema, Ghana",
                "Male",
                ymd(1985, 7, 9),
                "Mum: 0245567890",
            ),
            "Pediatrician",
            10,
            "Room 6",
            "Mon - Fri, 8:00 - 21:00",
        ),
        NewDoctor::new(
            NewPerson::new(
                "Dr.Eunice",
                "eunice@clinic.com",
                "0554667912",
                "Takoradi, Ghana",
                "Female",
                ymd(1985, 9, 9),
                "Sis: 045678912",
            ),
            "Gynecologist",
            18,
            "Theatre 2",
            "Mon - Fri, 8:00 - 22:00",
        ),
    ]
}

/// Register three patients, three doctors and three appointments
pub fn seed_sample_clinic(registry: &mut ClinicRegistry) -> Result<SeededIds> {
    let mut ids = SeededIds::default();

    for details in sample_patients() {
        ids.patients.push(registry.add_patient(details)?.id());
    }
    for request in sample_doctors() {
        ids.doctors.push(registry.add_doctor(request)?.id());
    }

    let bookings = [
        (0, 0, ymd(2025, 12, 5), "10:30", "General Checkup"),
        (1, 0, ymd(2025, 8, 7), "12:45", "Knee pain"),
        (2, 1, ymd(2025, 12, 10), "09:00", "Follow-up therapy"),
    ];
    for (patient, doctor, date, time, reason) in bookings {
        let (patient_id, doctor_id) = (ids.patients[patient], ids.doctors[doctor]);
        if let Some(appointment) =
            registry.schedule_appointment(patient_id, doctor_id, date, time, reason)
        {
            ids.appointments.push(appointment.id());
        }
    }

    Ok(ids)
}
