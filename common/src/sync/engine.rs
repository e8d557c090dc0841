//! Writes an edited supplier aggregate back to the API.
//!
//! Phases run strictly in order: the group, then every unit concurrently,
//! and for each unit its certificates as soon as that unit has an id.
//! The first failing call aborts the save and is the error reported. Calls
//! already issued are not rolled back; retrying the save re-applies them
//! (updates by id are idempotent on the backend).

use futures_util::future::try_join_all;
use log::{debug, warn};

use crate::editor::{AggregateEditor, EditMode};
use crate::error::{Action, ApiError, SyncError};
use crate::model::RecordId;
use crate::model::unit::Unit;
use crate::requests::{GroupPayload, UnitPayload};
use crate::sync::api::SupplierApi;
use crate::sync::reconcile::{CertificateOp, plan_certificates};

/// Validates and persists the aggregate, returning the supplier id.
///
/// Validation failures return before any request is made.
pub async fn save<A: SupplierApi>(api: &A, editor: &AggregateEditor) -> Result<RecordId, SyncError> {
    let errors = editor.validate();
    if !errors.is_empty() {
        return Err(SyncError::Validation(errors));
    }

    let supplier_id = save_group(api, editor).await?;

    let units = editor
        .units()
        .iter()
        .map(|unit| save_unit(api, supplier_id, unit));
    try_join_all(units).await?;

    debug!("Supplier {} saved with {} unit(s)", supplier_id, editor.units().len());
    Ok(supplier_id)
}

async fn save_group<A: SupplierApi>(api: &A, editor: &AggregateEditor) -> Result<RecordId, SyncError> {
    let payload = GroupPayload::from(editor.group());
    match editor.mode() {
        EditMode::Existing(supplier_id) => {
            api.update_group(supplier_id, &payload)
                .await
                .map_err(|source| group_error(Action::Update, source))?;
            Ok(supplier_id)
        }
        EditMode::New => {
            let created = api
                .create_group(&payload)
                .await
                .map_err(|source| group_error(Action::Create, source))?;
            debug!("Created supplier {}", created.supplier_id);
            Ok(created.supplier_id)
        }
    }
}

fn group_error(action: Action, source: ApiError) -> SyncError {
    warn!("Supplier {} failed: {}", action, source);
    SyncError::Group { action, source }
}

/// Upserts one unit, then reconciles its certificates.
async fn save_unit<A: SupplierApi>(api: &A, supplier_id: RecordId, unit: &Unit) -> Result<(), SyncError> {
    let payload = UnitPayload::new(supplier_id, unit);
    let unit_error = |action, source| SyncError::Unit {
        action,
        unit_name: unit.name().to_string(),
        source,
    };

    let (unit_id, persisted) = match unit.unit_id {
        Some(unit_id) => {
            api.update_unit(unit_id, &payload)
                .await
                .map_err(|source| unit_error(Action::Update, source))?;
            let persisted = api
                .list_certificates(unit_id)
                .await
                .map_err(|source| SyncError::CertificateFetch {
                    unit_name: unit.name().to_string(),
                    source,
                })?;
            (unit_id, persisted)
        }
        // A unit created just now cannot own persisted certificates yet.
        None => {
            let saved = api
                .create_unit(&payload)
                .await
                .map_err(|source| unit_error(Action::Create, source))?;
            (saved.unit_id, Vec::new())
        }
    };

    let ops = plan_certificates(unit_id, &persisted, &unit.certificates);
    debug!("Unit {}: {} certificate operation(s)", unit_id, ops.len());
    try_join_all(ops.into_iter().map(|op| apply(api, unit, op))).await?;
    Ok(())
}

async fn apply<A: SupplierApi>(api: &A, unit: &Unit, op: CertificateOp) -> Result<(), SyncError> {
    let (action, result) = match &op {
        CertificateOp::Create(payload) => (Action::Create, api.create_certificate(payload).await),
        CertificateOp::Update(id, payload) => {
            (Action::Update, api.update_certificate(*id, payload).await)
        }
        CertificateOp::Delete(id) => (Action::Delete, api.delete_certificate(*id).await),
    };
    result.map_err(|source| SyncError::Certificate {
        action,
        unit_name: unit.name().to_string(),
        source,
    })
}
