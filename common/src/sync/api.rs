//! Abstraction over the supplier REST API.
//!
//! The browser client implements it on top of `fetch`; tests implement it
//! in memory. Futures are not required to be `Send` because the browser
//! runs everything on a single-threaded event loop.

use std::future::Future;

use crate::error::ApiResult;
use crate::model::RecordId;
use crate::model::certificate::Certificate;
use crate::model::group::SupplierGroup;
use crate::model::person::Person;
use crate::model::unit::Unit;
use crate::requests::{CertificatePayload, GroupCreated, GroupPayload, UnitPayload, UnitSaved};

pub trait SupplierApi {
    /// `GET /groups`: every group with its units in short form.
    fn list_groups(&self) -> impl Future<Output = ApiResult<Vec<SupplierGroup>>>;

    /// `GET /groups/{id}/complete`: one group with fully populated units.
    fn get_group_complete(&self, supplier_id: RecordId)
    -> impl Future<Output = ApiResult<SupplierGroup>>;

    /// `POST /groups`
    fn create_group(&self, payload: &GroupPayload) -> impl Future<Output = ApiResult<GroupCreated>>;

    /// `PUT /groups/{id}`
    fn update_group(
        &self,
        supplier_id: RecordId,
        payload: &GroupPayload,
    ) -> impl Future<Output = ApiResult<()>>;

    /// `DELETE /groups/{id}`; the backend removes the group's units too.
    fn delete_group(&self, supplier_id: RecordId) -> impl Future<Output = ApiResult<()>>;

    /// `GET /units/{id}`
    fn get_unit(&self, unit_id: RecordId) -> impl Future<Output = ApiResult<Unit>>;

    /// `POST /units`
    fn create_unit(&self, payload: &UnitPayload<'_>) -> impl Future<Output = ApiResult<UnitSaved>>;

    /// `PUT /units/{id}`
    fn update_unit(
        &self,
        unit_id: RecordId,
        payload: &UnitPayload<'_>,
    ) -> impl Future<Output = ApiResult<()>>;

    /// `GET /certificates/by-unit/{id}`
    fn list_certificates(&self, unit_id: RecordId)
    -> impl Future<Output = ApiResult<Vec<Certificate>>>;

    /// `POST /certificates`
    fn create_certificate(
        &self,
        payload: &CertificatePayload,
    ) -> impl Future<Output = ApiResult<()>>;

    /// `PUT /certificates/{id}`
    fn update_certificate(
        &self,
        certificat_id: RecordId,
        payload: &CertificatePayload,
    ) -> impl Future<Output = ApiResult<()>>;

    /// `DELETE /certificates/{id}`
    fn delete_certificate(&self, certificat_id: RecordId) -> impl Future<Output = ApiResult<()>>;

    /// `GET /persons`
    fn list_persons(&self) -> impl Future<Output = ApiResult<Vec<Person>>>;
}
