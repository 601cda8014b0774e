// 🧍 Person - identity and contact fields shared by patients and doctors
//
// Embedded by composition in Patient and Doctor. Built once, read-only after.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Contact details handed to the registry when registering someone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    pub emergency_contact: String,
}

impl NewPerson {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        gender: impl Into<String>,
        date_of_birth: NaiveDate,
        emergency_contact: impl Into<String>,
    ) -> Self {
        NewPerson {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
            gender: gender.into(),
            date_of_birth,
            emergency_contact: emergency_contact.into(),
        }
    }
}

/// Person record - stamped with its registration time on creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    email: String,
    phone: String,
    address: String,
    gender: String,
    date_of_birth: NaiveDate,
    emergency_contact: String,
    registered_at: DateTime<Utc>,
}

impl Person {
    pub fn new(details: NewPerson) -> Self {
        Person {
            name: details.name,
            email: details.email,
            phone: details.phone,
            address: details.address,
            gender: details.gender,
            date_of_birth: details.date_of_birth,
            emergency_contact: details.emergency_contact,
            registered_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn emergency_contact(&self) -> &str {
        &self.emergency_contact
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}
