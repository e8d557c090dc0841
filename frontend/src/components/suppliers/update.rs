//! State transitions of the supplier screen.
//!
//! Every remote call is spawned on the browser event loop and reports back
//! through a message; results for a dialog that was closed in the meantime
//! are dropped by `EditSession`.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::catalog::{delete_supplier, load_catalog, load_for_edit, load_unit_detail};
use common::editor::AggregateEditor;
use common::model::person::Person;
use common::session::SubmitOutcome;
use common::sync::{save, SupplierApi};

use super::helpers::{show_toast, ToastKind};
use super::messages::{EditMsg, Msg};
use super::state::{SupplierManagement, UnitDetail};

/// Central update function. Returns `true` when the view must re-render.
pub fn update(
    component: &mut SupplierManagement,
    ctx: &Context<SupplierManagement>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::LoadCatalog => {
            component.loading = true;
            component.load_error = None;
            let api = component.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = load_catalog(&api).await;
                link.send_message(Msg::CatalogLoaded(result));
            });
            true
        }
        Msg::CatalogLoaded(result) => {
            component.loading = false;
            match result {
                Ok(groups) => component.groups = groups,
                Err(err) => {
                    gloo_console::error!(format!("Error loading suppliers: {}", err));
                    component.load_error = Some(err.to_string());
                }
            }
            true
        }
        Msg::SetSearch(term) => {
            component.search = term;
            true
        }
        Msg::SetUnitSearch(supplier_id, term) => {
            component.unit_search.insert(supplier_id, term);
            true
        }

        Msg::ViewUnit(unit_id) => {
            component.unit_detail = Some(UnitDetail::Loading(unit_id));
            let api = component.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = load_unit_detail(&api, unit_id).await;
                link.send_message(Msg::UnitLoaded(unit_id, result));
            });
            true
        }
        Msg::UnitLoaded(unit_id, result) => {
            if !matches!(component.unit_detail, Some(UnitDetail::Loading(id)) if id == unit_id) {
                return false;
            }
            component.unit_detail = match result {
                Ok(unit) => Some(UnitDetail::Ready(unit)),
                Err(err) => {
                    show_toast(&format!("Error loading unit details: {}", err), ToastKind::Error);
                    None
                }
            };
            true
        }
        Msg::CloseUnitDetail => {
            component.unit_detail = None;
            true
        }

        Msg::OpenCreate => {
            component.session.open_new();
            load_persons(component, ctx);
            true
        }
        Msg::OpenEdit(supplier_id) => {
            let ticket = component.session.start_loading(supplier_id);
            let api = component.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = load_for_edit(&api, supplier_id).await;
                link.send_message(Msg::EditorLoaded(ticket, result));
            });
            load_persons(component, ctx);
            true
        }
        Msg::EditorLoaded(ticket, result) => {
            if let Some(message) = component.session.finish_loading(ticket, result) {
                gloo_console::error!(message.clone());
                show_toast(&message, ToastKind::Error);
            }
            true
        }
        Msg::PersonsLoaded(result) => {
            component.persons_loading = false;
            match result {
                Ok(persons) => component.persons = persons,
                Err(err) => {
                    gloo_console::warn!(format!("Error fetching persons: {}", err));
                    component.persons.clear();
                }
            }
            true
        }
        Msg::Edit(edit) => match component.session.editor_mut() {
            Some(editor) => apply_edit(editor, &component.persons, edit),
            None => false,
        },
        Msg::Submit => {
            let Some((ticket, editor)) = component.session.begin_submit() else {
                return true;
            };
            let api = component.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = save(&api, &editor).await;
                link.send_message(Msg::Submitted(ticket, result));
            });
            true
        }
        Msg::Submitted(ticket, result) => match component.session.finish_submit(ticket, result) {
            SubmitOutcome::Saved { created, .. } => {
                let message = if created {
                    "Supplier created successfully!"
                } else {
                    "Supplier updated successfully!"
                };
                show_toast(message, ToastKind::Success);
                ctx.link().send_message(Msg::LoadCatalog);
                true
            }
            SubmitOutcome::Failed(message) => {
                gloo_console::error!(format!("Error saving supplier: {}", message));
                true
            }
            SubmitOutcome::Ignored => false,
        },
        Msg::DismissError => {
            component.session.dismiss_error();
            true
        }
        Msg::CloseEditor => {
            component.session.close();
            true
        }

        Msg::ConfirmDelete(supplier_id) => {
            component.pending_delete = Some(supplier_id);
            true
        }
        Msg::CancelDelete => {
            if component.deleting {
                return false;
            }
            component.pending_delete = None;
            true
        }
        Msg::Delete => {
            let Some(supplier_id) = component.pending_delete else {
                return false;
            };
            if component.deleting {
                return false;
            }
            component.deleting = true;
            let api = component.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = delete_supplier(&api, supplier_id).await;
                link.send_message(Msg::Deleted(supplier_id, result));
            });
            true
        }
        Msg::Deleted(supplier_id, result) => {
            component.deleting = false;
            if component.pending_delete == Some(supplier_id) {
                component.pending_delete = None;
            }
            match result {
                Ok(()) => {
                    show_toast("Supplier deleted successfully!", ToastKind::Success);
                    ctx.link().send_message(Msg::LoadCatalog);
                }
                Err(message) => show_toast(&message, ToastKind::Error),
            }
            true
        }
    }
}

/// Refreshes the person directory shown in each unit's responsible picker.
fn load_persons(component: &mut SupplierManagement, ctx: &Context<SupplierManagement>) {
    component.persons_loading = true;
    let api = component.api.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api.list_persons().await;
        link.send_message(Msg::PersonsLoaded(result));
    });
}

fn apply_edit(
    editor: &mut AggregateEditor,
    persons: &[Person],
    edit: EditMsg,
) -> bool {
    match edit {
        EditMsg::SetGroupField(field, value) => editor.set_group_field(field, value),
        EditMsg::AddUnit => editor.add_unit(),
        EditMsg::RemoveUnit(unit) => editor.remove_unit(unit),
        EditMsg::SetUnitField(unit, field, value) => editor.set_unit_field(unit, field, value),
        EditMsg::SetUnitFlag(unit, flag, value) => editor.set_unit_flag(unit, flag, value),
        EditMsg::SetResponsible(unit, field, value) => editor.set_responsible(unit, field, value),
        EditMsg::SelectPerson(unit, person_id) => {
            let person = person_id.and_then(|id| persons.iter().find(|p| p.person_id == id));
            editor.select_person(unit, person)
        }
        EditMsg::AddCertificate(unit) => editor.add_certificate(unit),
        EditMsg::RemoveCertificate(unit, cert) => editor.remove_certificate(unit, cert),
        EditMsg::SetCertificateField(unit, cert, field, value) => {
            editor.set_certificate_field(unit, cert, field, value)
        }
    }
}
