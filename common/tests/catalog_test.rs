//! List hydration and the standalone loaders.

mod support;

use common::catalog::{delete_supplier, load_catalog, load_for_edit, load_unit_detail};
use common::error::ApiError;
use common::model::group::SupplierGroup;
use common::model::unit::Unit;
use support::{Call, RecordingApi, rejected};

fn listed_unit(unit_id: i64, name: &str) -> Unit {
    let mut unit = Unit {
        unit_id: Some(unit_id),
        supplier_id: Some(1),
        ..Default::default()
    };
    unit.details.unit_name = name.into();
    unit
}

fn catalog() -> Vec<SupplierGroup> {
    vec![
        SupplierGroup {
            supplier_id: Some(1),
            supplier_name: "Acme".into(),
            units: vec![listed_unit(7, "Plant A"), listed_unit(8, "Plant B")],
            ..Default::default()
        },
        SupplierGroup {
            supplier_id: Some(2),
            supplier_name: "Globex".into(),
            ..Default::default()
        },
    ]
}

#[tokio::test]
async fn catalog_attaches_certificates_to_each_unit() {
    let api = RecordingApi::new()
        .with_groups(catalog())
        .with_certificates(7, &[1, 2])
        .with_certificates(8, &[3]);

    let groups = load_catalog(&api).await.unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].units[0].certificates.len(), 2);
    assert_eq!(groups[0].units[1].certificates.len(), 1);
    assert_eq!(api.count(|c| matches!(c, Call::ListCertificates(_))), 2);
}

#[tokio::test]
async fn unit_with_unreachable_certificates_is_still_listed() {
    let api = RecordingApi::new()
        .with_groups(catalog())
        .with_certificates(7, &[1])
        .with_certificates(8, &[3])
        .fail_when(|c| match c {
            Call::ListCertificates(8) => Some(ApiError::Transport("timeout".into())),
            _ => None,
        });

    let groups = load_catalog(&api).await.unwrap();

    assert_eq!(groups[0].units.len(), 2);
    assert_eq!(groups[0].units[0].certificates.len(), 1);
    assert!(groups[0].units[1].certificates.is_empty());
}

#[tokio::test]
async fn group_list_failure_fails_the_load() {
    let api = RecordingApi::new().fail_when(|c| match c {
        Call::ListGroups => Some(ApiError::Transport("offline".into())),
        _ => None,
    });

    let err = load_catalog(&api).await.unwrap_err();

    assert_eq!(err.to_string(), "Network error: offline");
}

#[tokio::test]
async fn unit_detail_includes_certificates() {
    let api = RecordingApi::new()
        .with_unit(listed_unit(7, "Plant A"))
        .with_certificates(7, &[1]);

    let unit = load_unit_detail(&api, 7).await.unwrap();

    assert_eq!(unit.name(), "Plant A");
    assert_eq!(unit.certificates[0].certificat_id, Some(1));
    assert_eq!(api.calls(), vec![Call::GetUnit(7), Call::ListCertificates(7)]);
}

#[tokio::test]
async fn edit_load_hydrates_an_existing_aggregate() {
    let api = RecordingApi::new().with_groups(catalog());

    let editor = load_for_edit(&api, 1).await.unwrap();

    assert!(editor.is_editing());
    assert_eq!(editor.group().supplier_name, "Acme");
    assert_eq!(editor.units().len(), 2);

    let err = load_for_edit(&api, 99).await.unwrap_err();
    assert_eq!(err.to_string(), "Group not found");
}

#[tokio::test]
async fn delete_reports_backend_message_or_fallback() {
    let api = RecordingApi::new();
    assert_eq!(delete_supplier(&api, 1).await, Ok(()));
    assert_eq!(api.calls(), vec![Call::DeleteGroup(1)]);

    let api = RecordingApi::new().fail_when(|_| Some(rejected(Some("Supplier has open orders"))));
    assert_eq!(
        delete_supplier(&api, 1).await,
        Err("Supplier has open orders".to_string())
    );

    let api = RecordingApi::new().fail_when(|_| Some(rejected(None)));
    assert_eq!(
        delete_supplier(&api, 1).await,
        Err("Failed to delete group".to_string())
    );
}
