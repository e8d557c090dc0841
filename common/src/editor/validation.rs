//! Required-field checks run before a supplier is submitted.

use std::collections::BTreeMap;
use std::fmt;

use crate::model::group::SupplierGroup;

/// Location of a field in the supplier form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldPath {
    GroupName,
    UnitName(usize),
    CertificateType(usize, usize),
    CertificateDate(usize, usize),
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::GroupName => write!(f, "group_name"),
            FieldPath::UnitName(unit) => write!(f, "unit_{}_name", unit),
            FieldPath::CertificateType(unit, cert) => write!(f, "cert_{}_{}_type", unit, cert),
            FieldPath::CertificateDate(unit, cert) => write!(f, "cert_{}_{}_date", unit, cert),
        }
    }
}

/// Field path to message map. Empty means the form may be submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<FieldPath, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, path: FieldPath) -> Option<&str> {
        self.0.get(&path).map(String::as_str)
    }

    pub fn contains(&self, path: FieldPath) -> bool {
        self.0.contains_key(&path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &str)> {
        self.0.iter().map(|(path, message)| (path, message.as_str()))
    }

    fn insert(&mut self, path: FieldPath, message: String) {
        self.0.insert(path, message);
    }
}

/// Checks the group name, every unit name, and each certificate's type and
/// date. Numbers in messages are 1-based, matching what the form shows.
pub fn validate(group: &SupplierGroup) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if group.supplier_name.trim().is_empty() {
        errors.insert(FieldPath::GroupName, "Group name is required".to_string());
    }

    for (u, unit) in group.units.iter().enumerate() {
        if unit.details.unit_name.trim().is_empty() {
            errors.insert(
                FieldPath::UnitName(u),
                format!("Unit {} name is required", u + 1),
            );
        }

        for (c, cert) in unit.certificates.iter().enumerate() {
            if cert.cert_type.is_empty() {
                errors.insert(
                    FieldPath::CertificateType(u, c),
                    format!("Unit {}, Certificate {} type is required", u + 1, c + 1),
                );
            }
            if cert.effective_date().is_empty() {
                errors.insert(
                    FieldPath::CertificateDate(u, c),
                    format!(
                        "Unit {}, Certificate {} validity date is required",
                        u + 1,
                        c + 1
                    ),
                );
            }
        }
    }

    errors
}
