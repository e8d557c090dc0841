use serde::{Deserialize, Deserializer, Serialize};

use crate::model::RecordId;
use crate::model::lenient;

/// Role given to a responsible person when none is recorded.
pub const DEFAULT_ROLE: &str = "Contact";

/// An entry of the person directory (`GET /persons`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "Person_id")]
    pub person_id: RecordId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub job_title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone_number: String,
    #[serde(default = "default_role", deserialize_with = "role")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub zone_name: String,
}

impl Person {
    /// Label shown in the directory picker, e.g. `Ada Lovelace - Buyer`.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        if self.job_title.is_empty() {
            name
        } else {
            format!("{} - {}", name, self.job_title)
        }
    }
}

/// Copy of a directory person taken when it is picked for a unit.
///
/// Later changes to the directory do not flow into the snapshot, and edits
/// to the snapshot never touch the directory. Only `person_id` is sent back
/// to the backend (as the unit's `com_person_id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsiblePerson {
    #[serde(rename = "Person_id", default, deserialize_with = "lenient::id")]
    pub person_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub job_title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone_number: String,
    #[serde(default = "default_role", deserialize_with = "role")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub zone_name: String,
}

impl Default for ResponsiblePerson {
    fn default() -> Self {
        Self {
            person_id: None,
            first_name: String::new(),
            last_name: String::new(),
            job_title: String::new(),
            email: String::new(),
            phone_number: String::new(),
            role: default_role(),
            zone_name: String::new(),
        }
    }
}

impl From<&Person> for ResponsiblePerson {
    fn from(person: &Person) -> Self {
        Self {
            person_id: Some(person.person_id),
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            job_title: person.job_title.clone(),
            email: person.email.clone(),
            phone_number: person.phone_number.clone(),
            role: if person.role.is_empty() {
                default_role()
            } else {
                person.role.clone()
            },
            zone_name: person.zone_name.clone(),
        }
    }
}

impl ResponsiblePerson {
    pub fn is_assigned(&self) -> bool {
        self.person_id.is_some()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Replaces one snapshot field without touching the others.
    pub fn set(&mut self, field: ResponsibleField, value: String) {
        match field {
            ResponsibleField::FirstName => self.first_name = value,
            ResponsibleField::LastName => self.last_name = value,
            ResponsibleField::JobTitle => self.job_title = value,
            ResponsibleField::Email => self.email = value,
            ResponsibleField::PhoneNumber => self.phone_number = value,
            ResponsibleField::Role => self.role = value,
            ResponsibleField::ZoneName => self.zone_name = value,
        }
    }
}

/// Editable text fields of a responsible person snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponsibleField {
    FirstName,
    LastName,
    JobTitle,
    Email,
    PhoneNumber,
    Role,
    ZoneName,
}

impl ResponsibleField {
    pub const ALL: [ResponsibleField; 7] = [
        ResponsibleField::FirstName,
        ResponsibleField::LastName,
        ResponsibleField::JobTitle,
        ResponsibleField::Email,
        ResponsibleField::PhoneNumber,
        ResponsibleField::Role,
        ResponsibleField::ZoneName,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResponsibleField::FirstName => "First Name",
            ResponsibleField::LastName => "Last Name",
            ResponsibleField::JobTitle => "Job Title",
            ResponsibleField::Email => "Email",
            ResponsibleField::PhoneNumber => "Phone Number",
            ResponsibleField::Role => "Role",
            ResponsibleField::ZoneName => "Zone",
        }
    }
}

impl ResponsiblePerson {
    /// Current value of one snapshot field.
    pub fn get(&self, field: ResponsibleField) -> &str {
        match field {
            ResponsibleField::FirstName => &self.first_name,
            ResponsibleField::LastName => &self.last_name,
            ResponsibleField::JobTitle => &self.job_title,
            ResponsibleField::Email => &self.email,
            ResponsibleField::PhoneNumber => &self.phone_number,
            ResponsibleField::Role => &self.role,
            ResponsibleField::ZoneName => &self.zone_name,
        }
    }
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

fn role<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let role = lenient::text(deserializer)?;
    Ok(if role.is_empty() { default_role() } else { role })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_role_defaults_to_contact() {
        let person: Person =
            serde_json::from_str(r#"{"Person_id": 7, "first_name": "Ada", "role": null}"#).unwrap();
        assert_eq!(person.role, DEFAULT_ROLE);
        assert_eq!(person.last_name, "");
    }

    #[test]
    fn display_name_includes_job_title_when_present() {
        let mut person = Person {
            person_id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            ..Default::default()
        };
        assert_eq!(person.display_name(), "Ada Lovelace");
        person.job_title = "Buyer".into();
        assert_eq!(person.display_name(), "Ada Lovelace - Buyer");
    }
}
