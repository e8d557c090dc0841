//! Request bodies sent to the supplier API and the small response shapes
//! read back from it.

use serde::{Deserialize, Serialize};

use crate::model::RecordId;
use crate::model::certificate::Certificate;
use crate::model::group::SupplierGroup;
use crate::model::lenient;
use crate::model::unit::{Unit, UnitDetails};

/// Body of `POST /groups` and `PUT /groups/{id}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GroupPayload {
    pub supplier_name: String,
    pub description: String,
}

impl From<&SupplierGroup> for GroupPayload {
    fn from(group: &SupplierGroup) -> Self {
        Self {
            supplier_name: group.supplier_name.clone(),
            description: group.description.clone(),
        }
    }
}

/// Body of `POST /units` and `PUT /units/{id}`: every unit attribute plus
/// the owning group and the responsible person's id.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UnitPayload<'a> {
    pub supplier_id: RecordId,
    pub com_person_id: Option<RecordId>,
    #[serde(flatten)]
    pub details: &'a UnitDetails,
}

impl<'a> UnitPayload<'a> {
    pub fn new(supplier_id: RecordId, unit: &'a Unit) -> Self {
        Self {
            supplier_id,
            com_person_id: unit.responsible.person_id,
            details: &unit.details,
        }
    }
}

/// Body of `POST /certificates` and `PUT /certificates/{id}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CertificatePayload {
    pub unit_id: RecordId,
    #[serde(rename = "Type")]
    pub cert_type: String,
    #[serde(rename = "Date")]
    pub date: String,
}

impl CertificatePayload {
    pub fn new(unit_id: RecordId, certificate: &Certificate) -> Self {
        Self {
            unit_id,
            cert_type: certificate.persisted_type().to_string(),
            date: certificate.effective_date().to_string(),
        }
    }
}

/// Response of `POST /groups`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GroupCreated {
    pub supplier_id: RecordId,
}

/// Response of `POST /units`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct UnitSaved {
    pub unit_id: RecordId,
}

/// Error body returned by the backend on non-success statuses.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "lenient::text")]
    pub error: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub message: String,
}

impl ErrorBody {
    /// The user-facing message carried by the body, if any.
    pub fn into_message(self) -> Option<String> {
        [self.error, self.message]
            .into_iter()
            .find(|m| !m.trim().is_empty())
    }
}

/// Settings handed to the browser application by its host server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// Base URL of the hosted supplier API.
pub const DEFAULT_API_BASE_URL: &str = "https://supplier-back.azurewebsites.net/ajouter/api";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::person::ResponsiblePerson;

    #[test]
    fn unit_payload_is_flat_and_sends_empty_text_as_null() {
        let mut unit = Unit::default();
        unit.details.unit_name = "Plant A".into();
        unit.details.quality_agreement = true;
        unit.responsible = ResponsiblePerson {
            person_id: Some(11),
            first_name: "Ada".into(),
            ..Default::default()
        };

        let json = serde_json::to_value(UnitPayload::new(3, &unit)).unwrap();
        assert_eq!(json["supplier_id"], 3);
        assert_eq!(json["com_person_id"], 11);
        assert_eq!(json["unit_name"], "Plant A");
        assert!(json["city"].is_null());
        assert_eq!(json["type"], serde_json::Value::Null);
        assert_eq!(json["quality_agreement"], true);
        assert!(json.get("responsible").is_none());
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn unassigned_responsible_sends_null_contact() {
        let unit = Unit::default();
        let json = serde_json::to_value(UnitPayload::new(1, &unit)).unwrap();
        assert!(json["com_person_id"].is_null());
    }

    #[test]
    fn certificate_payload_uses_backend_column_names() {
        let cert = Certificate {
            cert_type: String::new(),
            custom_type: "Halal".into(),
            validity_date: "2025-01-01".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(CertificatePayload::new(8, &cert)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"unit_id": 8, "Type": "Halal", "Date": "2025-01-01"})
        );
    }

    #[test]
    fn error_body_prefers_error_field() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error": "Name taken", "message": "ignored"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Name taken"));

        let body: ErrorBody = serde_json::from_str(r#"{"message": "Bad date"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Bad date"));

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.into_message(), None);
    }
}
