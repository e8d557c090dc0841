//! `SupplierApi` over the browser's `fetch`, via `gloo-net`.
//!
//! Non-success responses are read for the backend's `{error}` / `{message}`
//! body so the user sees what the server said, when it said anything.

use std::rc::Rc;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use common::error::{ApiError, ApiResult};
use common::model::certificate::Certificate;
use common::model::group::SupplierGroup;
use common::model::person::Person;
use common::model::unit::Unit;
use common::model::RecordId;
use common::requests::{
    CertificatePayload, ErrorBody, GroupCreated, GroupPayload, UnitPayload, UnitSaved,
};
use common::sync::SupplierApi;

#[derive(Clone, PartialEq)]
pub struct HttpSupplierApi {
    base_url: Rc<str>,
}

impl HttpSupplierApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = send(Request::get(&self.url(path)).build()).await?;
        read(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let request = Request::post(&self.url(path)).json(body);
        let response = send(request).await?;
        read(response).await
    }

    /// POST whose response body is not needed.
    async fn post_only<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        send(Request::post(&self.url(path)).json(body)).await?;
        Ok(())
    }

    async fn put<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        send(Request::put(&self.url(path)).json(body)).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        send(Request::delete(&self.url(path)).build()).await?;
        Ok(())
    }
}

async fn send(request: Result<Request, gloo_net::Error>) -> ApiResult<Response> {
    let request = request.map_err(|err| ApiError::Decode(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_message);
    gloo_console::warn!(format!(
        "{} {} -> {}",
        response.url(),
        status,
        message.as_deref().unwrap_or("no message")
    ));
    Err(ApiError::Rejected { status, message })
}

async fn read<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

impl SupplierApi for HttpSupplierApi {
    async fn list_groups(&self) -> ApiResult<Vec<SupplierGroup>> {
        self.get("/groups").await
    }

    async fn get_group_complete(&self, supplier_id: RecordId) -> ApiResult<SupplierGroup> {
        self.get(&format!("/groups/{}/complete", supplier_id)).await
    }

    async fn create_group(&self, payload: &GroupPayload) -> ApiResult<GroupCreated> {
        self.post("/groups", payload).await
    }

    async fn update_group(&self, supplier_id: RecordId, payload: &GroupPayload) -> ApiResult<()> {
        self.put(&format!("/groups/{}", supplier_id), payload).await
    }

    async fn delete_group(&self, supplier_id: RecordId) -> ApiResult<()> {
        self.delete(&format!("/groups/{}", supplier_id)).await
    }

    async fn get_unit(&self, unit_id: RecordId) -> ApiResult<Unit> {
        self.get(&format!("/units/{}", unit_id)).await
    }

    async fn create_unit(&self, payload: &UnitPayload<'_>) -> ApiResult<UnitSaved> {
        self.post("/units", payload).await
    }

    async fn update_unit(&self, unit_id: RecordId, payload: &UnitPayload<'_>) -> ApiResult<()> {
        self.put(&format!("/units/{}", unit_id), payload).await
    }

    async fn list_certificates(&self, unit_id: RecordId) -> ApiResult<Vec<Certificate>> {
        self.get(&format!("/certificates/by-unit/{}", unit_id)).await
    }

    async fn create_certificate(&self, payload: &CertificatePayload) -> ApiResult<()> {
        self.post_only("/certificates", payload).await
    }

    async fn update_certificate(
        &self,
        certificat_id: RecordId,
        payload: &CertificatePayload,
    ) -> ApiResult<()> {
        self.put(&format!("/certificates/{}", certificat_id), payload)
            .await
    }

    async fn delete_certificate(&self, certificat_id: RecordId) -> ApiResult<()> {
        self.delete(&format!("/certificates/{}", certificat_id)).await
    }

    async fn list_persons(&self) -> ApiResult<Vec<Person>> {
        self.get("/persons").await
    }
}
