//! Read side of the supplier screen: list hydration, search filtering, and
//! the standalone loaders used outside of the save workflow.

use futures_util::future::join_all;
use log::warn;

use crate::editor::AggregateEditor;
use crate::error::{ApiError, ApiResult};
use crate::model::RecordId;
use crate::model::group::SupplierGroup;
use crate::model::unit::Unit;
use crate::sync::api::SupplierApi;

/// Fetches every group, then each unit's certificates concurrently.
///
/// A unit whose certificates cannot be fetched is listed without any;
/// only a failure of the group list itself fails the load.
pub async fn load_catalog<A: SupplierApi>(api: &A) -> ApiResult<Vec<SupplierGroup>> {
    let groups = api.list_groups().await?;
    Ok(join_all(groups.into_iter().map(|group| with_certificates(api, group))).await)
}

async fn with_certificates<A: SupplierApi>(api: &A, mut group: SupplierGroup) -> SupplierGroup {
    let units = std::mem::take(&mut group.units);
    group.units = join_all(units.into_iter().map(|unit| attach_certificates(api, unit))).await;
    group
}

async fn attach_certificates<A: SupplierApi>(api: &A, mut unit: Unit) -> Unit {
    let Some(unit_id) = unit.unit_id else {
        return unit;
    };
    match api.list_certificates(unit_id).await {
        Ok(certificates) => unit.certificates = certificates,
        Err(err) => warn!("Error fetching certificates for unit {}: {}", unit_id, err),
    }
    unit
}

/// Loads one unit for the detail dialog, with its certificates when they
/// can be fetched.
pub async fn load_unit_detail<A: SupplierApi>(api: &A, unit_id: RecordId) -> ApiResult<Unit> {
    let unit = api.get_unit(unit_id).await?;
    let mut unit = attach_certificates(api, unit).await;
    unit.unit_id.get_or_insert(unit_id);
    Ok(unit)
}

/// Hydrates an editor for an existing supplier from its complete record.
pub async fn load_for_edit<A: SupplierApi>(
    api: &A,
    supplier_id: RecordId,
) -> ApiResult<AggregateEditor> {
    let group = api.get_group_complete(supplier_id).await?;
    Ok(AggregateEditor::existing(supplier_id, group))
}

/// Deletes a supplier and its units. Returns the message to show on failure.
pub async fn delete_supplier<A: SupplierApi>(api: &A, supplier_id: RecordId) -> Result<(), String> {
    api.delete_group(supplier_id).await.map_err(|err| match err {
        ApiError::Rejected { message: Some(message), .. } => message,
        ApiError::Rejected { message: None, .. } => "Failed to delete group".to_string(),
        other => other.to_string(),
    })
}

/// Groups whose name contains `term` ignoring case; a blank term keeps all.
pub fn filter_groups<'a>(groups: &'a [SupplierGroup], term: &str) -> Vec<&'a SupplierGroup> {
    if term.trim().is_empty() {
        return groups.iter().collect();
    }
    groups.iter().filter(|group| group.matches(term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &str) -> SupplierGroup {
        SupplierGroup {
            supplier_name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn blank_term_keeps_every_group() {
        let groups = vec![group("Acme"), group("Globex")];
        assert_eq!(filter_groups(&groups, "   ").len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let groups = vec![group("Acme Metals"), group("Globex"), group("ACME Plastics")];
        let names: Vec<_> = filter_groups(&groups, "acme")
            .into_iter()
            .map(|g| g.supplier_name.as_str())
            .collect();
        assert_eq!(names, ["Acme Metals", "ACME Plastics"]);
    }

    #[test]
    fn unit_search_filters_within_a_group() {
        let mut g = group("Acme");
        for name in ["Plant Lyon", "Warehouse", "plant Graz"] {
            let mut unit = Unit::default();
            unit.details.unit_name = name.into();
            g.units.push(unit);
        }
        assert_eq!(g.units_matching("PLANT").count(), 2);
        assert_eq!(g.units_matching("").count(), 3);
    }
}
