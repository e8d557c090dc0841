//! In-memory `SupplierApi` that records every call it receives.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use common::error::{ApiError, ApiResult};
use common::model::RecordId;
use common::model::certificate::Certificate;
use common::model::group::SupplierGroup;
use common::model::person::Person;
use common::model::unit::Unit;
use common::requests::{
    CertificatePayload, GroupCreated, GroupPayload, UnitPayload, UnitSaved,
};
use common::sync::SupplierApi;
use serde_json::Value;
use tokio::sync::Notify;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListGroups,
    GetGroupComplete(RecordId),
    CreateGroup(GroupPayload),
    UpdateGroup(RecordId, GroupPayload),
    DeleteGroup(RecordId),
    GetUnit(RecordId),
    CreateUnit(Value),
    UpdateUnit(RecordId, Value),
    ListCertificates(RecordId),
    CreateCertificate(CertificatePayload),
    UpdateCertificate(RecordId, CertificatePayload),
    DeleteCertificate(RecordId),
    ListPersons,
}

type FailRule = Box<dyn Fn(&Call) -> Option<ApiError>>;

pub struct RecordingApi {
    calls: RefCell<Vec<Call>>,
    next_id: Cell<RecordId>,
    groups: Vec<SupplierGroup>,
    units: HashMap<RecordId, Unit>,
    certificates: HashMap<RecordId, Vec<Certificate>>,
    persons: Vec<Person>,
    fail_rules: Vec<FailRule>,
    gate: Option<UnitGate>,
}

/// Keeps one unit's update pending until another unit's certificate is created.
struct UnitGate {
    held: RecordId,
    released_by: RecordId,
    open: Notify,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            next_id: Cell::new(100),
            groups: Vec::new(),
            units: HashMap::new(),
            certificates: HashMap::new(),
            persons: Vec::new(),
            fail_rules: Vec::new(),
            gate: None,
        }
    }

    pub fn with_groups(mut self, groups: Vec<SupplierGroup>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_persons(mut self, persons: Vec<Person>) -> Self {
        self.persons = persons;
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        let id = unit.unit_id.expect("stored units need an id");
        self.units.insert(id, unit);
        self
    }

    /// Certificates returned by `GET /certificates/by-unit/{unit_id}`.
    pub fn with_certificates(mut self, unit_id: RecordId, ids: &[RecordId]) -> Self {
        let certs = ids
            .iter()
            .map(|&id| Certificate {
                certificat_id: Some(id),
                unit_id: Some(unit_id),
                cert_type: "ISO 9001".into(),
                validity_date: "2026-06-30".into(),
                ..Default::default()
            })
            .collect();
        self.certificates.insert(unit_id, certs);
        self
    }

    pub fn fail_when(mut self, rule: impl Fn(&Call) -> Option<ApiError> + 'static) -> Self {
        self.fail_rules.push(Box::new(rule));
        self
    }

    /// `update_unit(held)` does not return until a certificate is created
    /// for `released_by`.
    pub fn hold_unit_update(mut self, held: RecordId, released_by: RecordId) -> Self {
        self.gate = Some(UnitGate {
            held,
            released_by,
            open: Notify::new(),
        });
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(*c)).count()
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        let failure = self.fail_rules.iter().find_map(|rule| rule(&call));
        self.calls.borrow_mut().push(call);
        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fresh_id(&self) -> RecordId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

pub fn rejected(message: Option<&str>) -> ApiError {
    ApiError::Rejected {
        status: 500,
        message: message.map(str::to_string),
    }
}

impl SupplierApi for RecordingApi {
    async fn list_groups(&self) -> ApiResult<Vec<SupplierGroup>> {
        self.record(Call::ListGroups)?;
        Ok(self.groups.clone())
    }

    async fn get_group_complete(&self, supplier_id: RecordId) -> ApiResult<SupplierGroup> {
        self.record(Call::GetGroupComplete(supplier_id))?;
        self.groups
            .iter()
            .find(|g| g.supplier_id == Some(supplier_id))
            .cloned()
            .ok_or(ApiError::Rejected {
                status: 404,
                message: Some("Group not found".into()),
            })
    }

    async fn create_group(&self, payload: &GroupPayload) -> ApiResult<GroupCreated> {
        self.record(Call::CreateGroup(payload.clone()))?;
        Ok(GroupCreated {
            supplier_id: self.fresh_id(),
        })
    }

    async fn update_group(&self, supplier_id: RecordId, payload: &GroupPayload) -> ApiResult<()> {
        self.record(Call::UpdateGroup(supplier_id, payload.clone()))
    }

    async fn delete_group(&self, supplier_id: RecordId) -> ApiResult<()> {
        self.record(Call::DeleteGroup(supplier_id))
    }

    async fn get_unit(&self, unit_id: RecordId) -> ApiResult<Unit> {
        self.record(Call::GetUnit(unit_id))?;
        self.units.get(&unit_id).cloned().ok_or(ApiError::Rejected {
            status: 404,
            message: None,
        })
    }

    async fn create_unit(&self, payload: &UnitPayload<'_>) -> ApiResult<UnitSaved> {
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.record(Call::CreateUnit(body))?;
        Ok(UnitSaved {
            unit_id: self.fresh_id(),
        })
    }

    async fn update_unit(&self, unit_id: RecordId, payload: &UnitPayload<'_>) -> ApiResult<()> {
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.record(Call::UpdateUnit(unit_id, body))?;
        if let Some(gate) = self.gate.as_ref().filter(|g| g.held == unit_id) {
            gate.open.notified().await;
        }
        Ok(())
    }

    async fn list_certificates(&self, unit_id: RecordId) -> ApiResult<Vec<Certificate>> {
        self.record(Call::ListCertificates(unit_id))?;
        Ok(self.certificates.get(&unit_id).cloned().unwrap_or_default())
    }

    async fn create_certificate(&self, payload: &CertificatePayload) -> ApiResult<()> {
        self.record(Call::CreateCertificate(payload.clone()))?;
        if let Some(gate) = self.gate.as_ref().filter(|g| g.released_by == payload.unit_id) {
            gate.open.notify_one();
        }
        Ok(())
    }

    async fn update_certificate(
        &self,
        certificat_id: RecordId,
        payload: &CertificatePayload,
    ) -> ApiResult<()> {
        self.record(Call::UpdateCertificate(certificat_id, payload.clone()))
    }

    async fn delete_certificate(&self, certificat_id: RecordId) -> ApiResult<()> {
        self.record(Call::DeleteCertificate(certificat_id))
    }

    async fn list_persons(&self) -> ApiResult<Vec<Person>> {
        self.record(Call::ListPersons)?;
        Ok(self.persons.clone())
    }
}

/// A unit as the edit flow hydrates it: persisted id plus certificates.
pub fn persisted_unit(unit_id: RecordId, name: &str, cert_ids: &[RecordId]) -> Unit {
    let mut unit = Unit {
        unit_id: Some(unit_id),
        ..Default::default()
    };
    unit.details.unit_name = name.to_string();
    unit.certificates = cert_ids
        .iter()
        .map(|&id| Certificate {
            certificat_id: Some(id),
            cert_type: "ISO 9001".into(),
            validity_date: "2026-06-30".into(),
            ..Default::default()
        })
        .collect();
    unit
}
