//! In-memory supplier aggregate edited by the supplier form.
//!
//! `AggregateEditor` owns one group with its ordered units and their
//! ordered certificates. Every mutation addresses its target by position and
//! replaces only that slot, so sibling units and certificates never share
//! storage. Mutators return `true` when the aggregate changed, which lets a
//! component decide whether to re-render.

pub mod validation;

use crate::model::RecordId;
use crate::model::certificate::{Certificate, CertificateField};
use crate::model::group::{GroupField, SupplierGroup};
use crate::model::person::{Person, ResponsibleField, ResponsiblePerson};
use crate::model::unit::{Unit, UnitField, UnitFlag};

use validation::ValidationErrors;

/// Whether the aggregate already exists on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    New,
    Existing(RecordId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateEditor {
    mode: EditMode,
    group: SupplierGroup,
}

impl AggregateEditor {
    /// Empty aggregate for the "add supplier" flow.
    pub fn new_aggregate() -> Self {
        Self {
            mode: EditMode::New,
            group: SupplierGroup::default(),
        }
    }

    /// Aggregate hydrated from `GET /groups/{id}/complete`. `supplier_id` is
    /// the id that was requested; it wins over whatever the body carries.
    pub fn existing(supplier_id: RecordId, mut group: SupplierGroup) -> Self {
        group.supplier_id = Some(supplier_id);
        Self {
            mode: EditMode::Existing(supplier_id),
            group,
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Existing(_))
    }

    pub fn group(&self) -> &SupplierGroup {
        &self.group
    }

    pub fn units(&self) -> &[Unit] {
        &self.group.units
    }

    pub fn validate(&self) -> ValidationErrors {
        validation::validate(&self.group)
    }

    pub fn set_group_field(&mut self, field: GroupField, value: String) -> bool {
        match field {
            GroupField::SupplierName => self.group.supplier_name = value,
            GroupField::Description => self.group.description = value,
        }
        true
    }

    /// Appends a blank unit with no id and no certificates.
    pub fn add_unit(&mut self) -> bool {
        self.group.units.push(Unit::default());
        true
    }

    /// Removes the unit at `index`. A supplier being edited keeps its last
    /// unit; a new supplier may drop down to zero units.
    pub fn remove_unit(&mut self, index: usize) -> bool {
        if index >= self.group.units.len() {
            return false;
        }
        if self.is_editing() && self.group.units.len() <= 1 {
            return false;
        }
        self.group.units.remove(index);
        true
    }

    pub fn set_unit_field(&mut self, unit_index: usize, field: UnitField, value: String) -> bool {
        match self.group.units.get_mut(unit_index) {
            Some(unit) => {
                *unit.details.text_mut(field) = value;
                true
            }
            None => false,
        }
    }

    pub fn set_unit_flag(&mut self, unit_index: usize, flag: UnitFlag, value: bool) -> bool {
        match self.group.units.get_mut(unit_index) {
            Some(unit) => {
                *unit.details.flag_mut(flag) = value;
                true
            }
            None => false,
        }
    }

    /// Edits one field of the unit's responsible person snapshot.
    pub fn set_responsible(
        &mut self,
        unit_index: usize,
        field: ResponsibleField,
        value: String,
    ) -> bool {
        match self.group.units.get_mut(unit_index) {
            Some(unit) => {
                unit.responsible.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Copies every snapshot field from `person`, or resets the snapshot
    /// (role back to `Contact`) when `person` is `None`.
    pub fn select_person(&mut self, unit_index: usize, person: Option<&Person>) -> bool {
        match self.group.units.get_mut(unit_index) {
            Some(unit) => {
                unit.responsible = person.map(ResponsiblePerson::from).unwrap_or_default();
                true
            }
            None => false,
        }
    }

    /// Appends an empty certificate to the unit at `unit_index`.
    pub fn add_certificate(&mut self, unit_index: usize) -> bool {
        match self.group.units.get_mut(unit_index) {
            Some(unit) => {
                unit.certificates.push(Certificate::default());
                true
            }
            None => false,
        }
    }

    pub fn remove_certificate(&mut self, unit_index: usize, cert_index: usize) -> bool {
        match self.group.units.get_mut(unit_index) {
            Some(unit) if cert_index < unit.certificates.len() => {
                unit.certificates.remove(cert_index);
                true
            }
            _ => false,
        }
    }

    /// Replaces one certificate field; a missing unit or certificate leaves
    /// the aggregate untouched.
    pub fn set_certificate_field(
        &mut self,
        unit_index: usize,
        cert_index: usize,
        field: CertificateField,
        value: String,
    ) -> bool {
        match self
            .group
            .units
            .get_mut(unit_index)
            .and_then(|unit| unit.certificates.get_mut(cert_index))
        {
            Some(cert) => {
                cert.set(field, value);
                true
            }
            None => false,
        }
    }
}
