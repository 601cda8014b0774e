// 👩‍⚕️ Doctor Entity - Person + professional attributes
//
// Immutable once registered. Looked up by linear scan over the registry's list.

use serde::{Deserialize, Serialize};

use super::person::{NewPerson, Person};

pub type DoctorId = u32;

/// Registration request for a doctor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDoctor {
    pub person: NewPerson,
    pub specialization: String,
    pub years_of_experience: u32,
    pub room: String,
    pub availability: String,
}

impl NewDoctor {
    pub fn new(
        person: NewPerson,
        specialization: impl Into<String>,
        years_of_experience: u32,
        room: impl Into<String>,
        availability: impl Into<String>,
    ) -> Self {
        NewDoctor {
            person,
            specialization: specialization.into(),
            years_of_experience,
            room: room.into(),
            availability: availability.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    id: DoctorId,
    person: Person,
    specialization: String,
    years_of_experience: u32,
    room: String,

    /// Free text, e.g. "Mon - Fri, 8:00 - 20:00"
    availability: String,
}

impl Doctor {
    pub fn new(id: DoctorId, request: NewDoctor) -> Self {
        Doctor {
            id,
            person: Person::new(request.person),
            specialization: request.specialization,
            years_of_experience: request.years_of_experience,
            room: request.room,
            availability: request.availability,
        }
    }

    pub fn id(&self) -> DoctorId {
        self.id
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    pub fn years_of_experience(&self) -> u32 {
        self.years_of_experience
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn availability(&self) -> &str {
        &self.availability
    }
}
