use serde::{Deserialize, Serialize};

use crate::model::RecordId;
use crate::model::lenient;

/// A compliance certificate held by one unit.
///
/// The backend names the category `Type` and, depending on the endpoint,
/// the expiry either `validity_date` or `Date`. Both date spellings are kept
/// so that a record read from one endpoint can be validated and sent back
/// without losing its date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(default, deserialize_with = "lenient::id")]
    pub certificat_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient::id", skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<RecordId>,
    #[serde(rename = "Type", default, deserialize_with = "lenient::text")]
    pub cert_type: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub validity_date: String,
    #[serde(
        rename = "Date",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "String::is_empty"
    )]
    pub legacy_date: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub custom_type: String,
}

impl Certificate {
    /// The date the certificate is valid until, preferring `validity_date`
    /// over the legacy `Date` column.
    pub fn effective_date(&self) -> &str {
        if self.validity_date.is_empty() {
            &self.legacy_date
        } else {
            &self.validity_date
        }
    }

    /// The category persisted for this certificate: `Type` wins, the free
    /// text `custom_type` is only used when `Type` is empty.
    pub fn persisted_type(&self) -> &str {
        if self.cert_type.is_empty() {
            &self.custom_type
        } else {
            &self.cert_type
        }
    }

    pub fn is_other(&self) -> bool {
        self.cert_type == CertificateType::Other.code()
    }

    /// Replaces one editable field.
    pub fn set(&mut self, field: CertificateField, value: String) {
        match field {
            CertificateField::Type => self.cert_type = value,
            CertificateField::ValidityDate => self.validity_date = value,
            CertificateField::CustomType => self.custom_type = value,
        }
    }
}

/// Editable certificate fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateField {
    Type,
    ValidityDate,
    CustomType,
}

/// Certificate categories offered by the editor. `Other` pairs with a free
/// text `custom_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateType {
    Iso9001,
    Iso14001,
    Iso45001,
    Iatf16949,
    As9100,
    Iso13485,
    Iso27001,
    Fda,
    CeMarking,
    Rohs,
    Reach,
    Ul,
    Other,
}

impl CertificateType {
    pub const ALL: [CertificateType; 13] = [
        CertificateType::Iso9001,
        CertificateType::Iso14001,
        CertificateType::Iso45001,
        CertificateType::Iatf16949,
        CertificateType::As9100,
        CertificateType::Iso13485,
        CertificateType::Iso27001,
        CertificateType::Fda,
        CertificateType::CeMarking,
        CertificateType::Rohs,
        CertificateType::Reach,
        CertificateType::Ul,
        CertificateType::Other,
    ];

    /// Value stored in the `Type` column.
    pub fn code(self) -> &'static str {
        match self {
            CertificateType::Iso9001 => "ISO 9001",
            CertificateType::Iso14001 => "ISO 14001",
            CertificateType::Iso45001 => "ISO 45001",
            CertificateType::Iatf16949 => "IATF 16949",
            CertificateType::As9100 => "AS9100",
            CertificateType::Iso13485 => "ISO 13485",
            CertificateType::Iso27001 => "ISO 27001",
            CertificateType::Fda => "FDA",
            CertificateType::CeMarking => "CE Marking",
            CertificateType::Rohs => "RoHS",
            CertificateType::Reach => "REACH",
            CertificateType::Ul => "UL",
            CertificateType::Other => "Other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CertificateType::Iso9001 => "ISO 9001 - Quality Management",
            CertificateType::Iso14001 => "ISO 14001 - Environmental Management",
            CertificateType::Iso45001 => "ISO 45001 - Occupational Health & Safety",
            CertificateType::Iatf16949 => "IATF 16949 - Automotive Quality",
            CertificateType::As9100 => "AS9100 - Aerospace Quality",
            CertificateType::Iso13485 => "ISO 13485 - Medical Devices",
            CertificateType::Iso27001 => "ISO 27001 - Information Security",
            CertificateType::Fda => "FDA - Food and Drug Administration",
            CertificateType::CeMarking => "CE Marking",
            CertificateType::Rohs => "RoHS Compliance",
            CertificateType::Reach => "REACH Compliance",
            CertificateType::Ul => "UL Certification",
            CertificateType::Other => "Other",
        }
    }

    pub fn from_code(code: &str) -> Option<CertificateType> {
        CertificateType::ALL.into_iter().find(|t| t.code() == code)
    }
}
