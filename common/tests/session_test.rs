//! Dialog lifecycle: loading, submitting and stale results.

mod support;

use common::editor::AggregateEditor;
use common::editor::validation::{FieldPath, ValidationErrors};
use common::error::{Action, ApiError, SyncError};
use common::model::group::{GroupField, SupplierGroup};
use common::session::{EditSession, SessionState, SubmitOutcome};
use support::{persisted_unit, rejected};

fn loaded_supplier(supplier_id: i64) -> AggregateEditor {
    AggregateEditor::existing(
        supplier_id,
        SupplierGroup {
            supplier_name: "Acme".into(),
            units: vec![persisted_unit(7, "Plant A", &[])],
            ..Default::default()
        },
    )
}

#[test]
fn new_session_opens_on_an_empty_aggregate() {
    let mut session = EditSession::default();
    assert!(session.is_closed());

    session.open_new();

    let editor = session.editor().unwrap();
    assert!(!editor.is_editing());
    assert!(editor.units().is_empty());
    assert_eq!(editor.group().supplier_name, "");
}

#[test]
fn loading_opens_the_fetched_aggregate() {
    let mut session = EditSession::default();
    let ticket = session.start_loading(5);
    assert_eq!(session.state(), &SessionState::Loading(5));
    assert!(session.editor().is_none());

    let message = session.finish_loading(ticket, Ok(loaded_supplier(5)));

    assert_eq!(message, None);
    assert!(session.editor().unwrap().is_editing());
    assert_eq!(session.editor().unwrap().group().supplier_id, Some(5));
}

#[test]
fn failed_load_reports_and_stays_closed() {
    let mut session = EditSession::default();
    let ticket = session.start_loading(5);

    let message = session.finish_loading(ticket, Err(ApiError::Transport("offline".into())));

    assert_eq!(
        message.as_deref(),
        Some("Error loading customer data: Network error: offline")
    );
    assert!(session.is_closed());
}

#[test]
fn load_finishing_after_close_is_dropped() {
    let mut session = EditSession::default();
    let ticket = session.start_loading(5);
    session.close();

    assert_eq!(session.finish_loading(ticket, Ok(loaded_supplier(5))), None);
    assert!(session.is_closed());
}

#[test]
fn load_for_a_previous_supplier_is_dropped() {
    let mut session = EditSession::default();
    let first = session.start_loading(5);
    let second = session.start_loading(6);

    session.finish_loading(first, Ok(loaded_supplier(5)));
    assert_eq!(session.state(), &SessionState::Loading(6));

    session.finish_loading(second, Ok(loaded_supplier(6)));
    assert_eq!(session.editor().unwrap().group().supplier_id, Some(6));
}

#[test]
fn invalid_aggregate_is_not_submitted() {
    let mut session = EditSession::default();
    session.open_new();
    session.editor_mut().unwrap().add_unit();

    assert!(session.begin_submit().is_none());

    assert!(!session.is_submitting());
    assert!(session.field_errors().contains(FieldPath::GroupName));
    assert!(session.field_errors().contains(FieldPath::UnitName(0)));
}

#[test]
fn submitting_freezes_edits() {
    let mut session = EditSession::default();
    session.open_new();
    session
        .editor_mut()
        .unwrap()
        .set_group_field(GroupField::SupplierName, "Acme".into());

    let (_, editor) = session.begin_submit().unwrap();

    assert_eq!(editor.group().supplier_name, "Acme");
    assert!(session.is_submitting());
    assert!(session.editor_mut().is_none());
    assert!(session.editor().is_some());
    assert!(session.begin_submit().is_none());
}

#[test]
fn successful_save_closes_the_dialog() {
    let mut session = EditSession::default();
    session.open_new();
    session
        .editor_mut()
        .unwrap()
        .set_group_field(GroupField::SupplierName, "Acme".into());
    let (ticket, _) = session.begin_submit().unwrap();

    let outcome = session.finish_submit(ticket, Ok(100));

    assert_eq!(
        outcome,
        SubmitOutcome::Saved {
            supplier_id: 100,
            created: true,
        }
    );
    assert!(session.is_closed());
}

#[test]
fn failed_save_keeps_the_edits_and_the_message() {
    let mut session = EditSession::default();
    let ticket = session.start_loading(5);
    session.finish_loading(ticket, Ok(loaded_supplier(5)));
    session
        .editor_mut()
        .unwrap()
        .set_group_field(GroupField::Description, "Castings".into());
    let (ticket, _) = session.begin_submit().unwrap();

    let outcome = session.finish_submit(
        ticket,
        Err(SyncError::Group {
            action: Action::Update,
            source: rejected(Some("Name already used")),
        }),
    );

    assert_eq!(outcome, SubmitOutcome::Failed("Name already used".into()));
    assert_eq!(session.error(), Some("Name already used"));
    let editor = session.editor_mut().unwrap();
    assert_eq!(editor.group().description, "Castings");

    session.dismiss_error();
    assert_eq!(session.error(), None);
}

#[test]
fn validation_failure_from_save_marks_fields() {
    let mut session = EditSession::default();
    session.open_new();
    session
        .editor_mut()
        .unwrap()
        .set_group_field(GroupField::SupplierName, "Acme".into());
    let (ticket, _) = session.begin_submit().unwrap();

    let errors = {
        let mut editor = AggregateEditor::new_aggregate();
        editor.add_unit();
        editor.validate()
    };
    session.finish_submit(ticket, Err(SyncError::Validation(errors)));

    assert!(session.field_errors().contains(FieldPath::GroupName));
    assert_eq!(session.error(), None);
    assert!(session.editor_mut().is_some());
}

#[test]
fn save_result_after_close_is_ignored() {
    let mut session = EditSession::default();
    session.open_new();
    session
        .editor_mut()
        .unwrap()
        .set_group_field(GroupField::SupplierName, "Acme".into());
    let (ticket, _) = session.begin_submit().unwrap();
    session.close();

    assert_eq!(session.finish_submit(ticket, Ok(1)), SubmitOutcome::Ignored);
    assert!(session.is_closed());
    assert_eq!(session.field_errors(), &ValidationErrors::default());
}
