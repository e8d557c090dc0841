use serde::{Deserialize, Serialize};

use crate::model::RecordId;
use crate::model::lenient;
use crate::model::unit::Unit;

/// Top-level supplier record owning zero or more units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierGroup {
    #[serde(default, deserialize_with = "lenient::id")]
    pub supplier_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub supplier_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing)]
    pub units: Vec<Unit>,
}

impl SupplierGroup {
    /// Whether the supplier name contains `term`, ignoring case.
    pub fn matches(&self, term: &str) -> bool {
        self.supplier_name
            .to_lowercase()
            .contains(&term.to_lowercase())
    }

    /// Units whose name contains `term`; an empty term keeps every unit.
    pub fn units_matching<'a>(&'a self, term: &'a str) -> impl Iterator<Item = &'a Unit> + 'a {
        self.units.iter().filter(move |unit| unit.matches(term))
    }
}

/// Scalar fields of a group editable in the supplier form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    SupplierName,
    Description,
}
