//! Editor dialog for a complete supplier: the group, its units with every
//! attribute and responsible person, and each unit's certificates.
//!
//! Inputs dispatch `Msg::Edit` with positional indices; the aggregate itself
//! lives in the screen's `EditSession`, so this module only renders.

use yew::html::Scope;
use yew::prelude::*;

use common::editor::validation::{FieldPath, ValidationErrors};
use common::editor::AggregateEditor;
use common::model::certificate::{Certificate, CertificateField, CertificateType};
use common::model::group::GroupField;
use common::model::person::{Person, ResponsibleField};
use common::model::unit::{Unit, UnitField, UnitFlag, UnitSection};

use crate::components::suppliers::helpers::{
    checkbox_value, date_only, input_value, select_value, textarea_value,
};
use crate::components::suppliers::{EditMsg, Msg, SupplierManagement};
use crate::tops_sheet::top_sheet::TopSheet;

pub fn supplier_form_dialog(component: &SupplierManagement, link: &Scope<SupplierManagement>) -> Html {
    let session = &component.session;
    if session.is_closed() {
        return html! {};
    }
    let on_close = link.callback(|_| Msg::CloseEditor);

    let Some(editor) = session.editor() else {
        return html! {
            <TopSheet title="Loading supplier..." size={Some("large-modal")} {on_close}>
                <div class="modal-body">
                    <div class="loading-spinner"><div class="spin"></div></div>
                </div>
            </TopSheet>
        };
    };

    let submitting = session.is_submitting();
    let title = if editor.is_editing() {
        "Edit Complete Supplier"
    } else {
        "Add Complete Supplier"
    };
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <TopSheet title={title} icon={Some("🏢")} size={Some("large-modal")} busy={submitting} {on_close}>
            <form class="modal-form" {onsubmit}>
                { error_banner(session.error(), link) }
                <fieldset disabled={submitting}>
                    { group_section(editor, session.field_errors(), link) }
                    { units_section(component, editor, link) }
                </fieldset>
                <div class="form-actions">
                    <button
                        type="button"
                        class="btn-secondary"
                        onclick={link.callback(|_| Msg::CloseEditor)}
                    >
                        {"Cancel"}
                    </button>
                    <button type="submit" class="btn-primary" disabled={submitting}>
                        {
                            match (submitting, editor.is_editing()) {
                                (true, _) => "Saving...",
                                (false, true) => "Update Supplier",
                                (false, false) => "Create Supplier",
                            }
                        }
                    </button>
                </div>
            </form>
        </TopSheet>
    }
}

fn error_banner(error: Option<&str>, link: &Scope<SupplierManagement>) -> Html {
    let Some(error) = error else {
        return html! {};
    };
    html! {
        <div class="form-error-banner">
            <span>{error.to_string()}</span>
            <button type="button" class="banner-close" onclick={link.callback(|_| Msg::DismissError)}>
                {"✕"}
            </button>
        </div>
    }
}

fn field_error(errors: &ValidationErrors, path: FieldPath) -> Html {
    match errors.get(path) {
        Some(message) => html! { <span class="error-message">{message.to_string()}</span> },
        None => html! {},
    }
}

fn input_class(errors: &ValidationErrors, path: FieldPath) -> Classes {
    classes!("form-input", errors.contains(path).then_some("error"))
}

fn group_section(
    editor: &AggregateEditor,
    errors: &ValidationErrors,
    link: &Scope<SupplierManagement>,
) -> Html {
    let group = editor.group();
    html! {
        <div class="form-section">
            <h3>{"Supplier Group Information"}</h3>
            <div class="form-group">
                <label class="form-label">{"Group Name *"}</label>
                <input
                    type="text"
                    class={input_class(errors, FieldPath::GroupName)}
                    placeholder="Enter group name"
                    value={group.supplier_name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::Edit(EditMsg::SetGroupField(GroupField::SupplierName, input_value(e)))
                    })}
                />
                { field_error(errors, FieldPath::GroupName) }
            </div>
            <div class="form-group">
                <label class="form-label">{"Description"}</label>
                <textarea
                    class="form-textarea"
                    rows="3"
                    placeholder="Enter supplier description"
                    value={group.description.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::Edit(EditMsg::SetGroupField(GroupField::Description, textarea_value(e)))
                    })}
                />
            </div>
        </div>
    }
}

fn units_section(
    component: &SupplierManagement,
    editor: &AggregateEditor,
    link: &Scope<SupplierManagement>,
) -> Html {
    let units = editor.units();
    // An existing supplier must keep at least one unit.
    let can_remove = !editor.is_editing() || units.len() > 1;

    html! {
        <div class="form-section">
            <div class="section-header">
                <h3>{format!("Units ({})", units.len())}</h3>
                <button
                    type="button"
                    class="btn-secondary"
                    onclick={link.callback(|_| Msg::Edit(EditMsg::AddUnit))}
                >
                    {"+ Add Unit"}
                </button>
            </div>
            {
                if units.is_empty() {
                    html! {
                        <div class="empty-units">
                            <h4>{"No Units Added Yet"}</h4>
                            <p>{"Start by adding your first unit to this supplier group"}</p>
                        </div>
                    }
                } else {
                    units
                        .iter()
                        .enumerate()
                        .map(|(index, unit)| unit_card(component, index, unit, can_remove, link))
                        .collect::<Html>()
                }
            }
        </div>
    }
}

fn unit_card(
    component: &SupplierManagement,
    index: usize,
    unit: &Unit,
    can_remove: bool,
    link: &Scope<SupplierManagement>,
) -> Html {
    let errors = component.session.field_errors();
    let heading = if unit.name().is_empty() {
        format!("Unit {}", index + 1)
    } else {
        format!("Unit {}: {}", index + 1, unit.name())
    };

    html! {
        <div class="unit-form-card">
            <div class="unit-form-header">
                <h4>{heading}</h4>
                {
                    if can_remove {
                        html! {
                            <button
                                type="button"
                                class="btn-icon btn-delete"
                                title="Remove unit"
                                onclick={link.callback(move |_| Msg::Edit(EditMsg::RemoveUnit(index)))}
                            >
                                {"🗑"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            { for UnitSection::ALL.into_iter().map(|section| unit_fields(index, unit, section, errors, link)) }
            { responsible_fields(index, unit, &component.persons, component.persons_loading, link) }
            { certificate_fields(index, unit, errors, link) }
        </div>
    }
}

fn unit_fields(
    index: usize,
    unit: &Unit,
    section: UnitSection,
    errors: &ValidationErrors,
    link: &Scope<SupplierManagement>,
) -> Html {
    html! {
        <div class="unit-form-section">
            <h5>{section.title()}</h5>
            <div class="form-grid">
                { for section.fields().iter().map(|&field| text_field(index, unit, field, errors, link)) }
                { for section.flags().iter().map(|&flag| flag_field(index, unit, flag, link)) }
            </div>
        </div>
    }
}

fn text_field(
    index: usize,
    unit: &Unit,
    field: UnitField,
    errors: &ValidationErrors,
    link: &Scope<SupplierManagement>,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        Msg::Edit(EditMsg::SetUnitField(index, field, input_value(e)))
    });

    if field == UnitField::UnitName {
        let path = FieldPath::UnitName(index);
        return html! {
            <div class="form-group">
                <label class="form-label">{"Unit Name *"}</label>
                <input
                    type="text"
                    class={input_class(errors, path)}
                    placeholder="Enter unit name"
                    value={unit.details.text(field).to_string()}
                    {oninput}
                />
                { field_error(errors, path) }
            </div>
        };
    }

    html! {
        <div class="form-group">
            <label class="form-label">{field.label()}</label>
            <input
                type="text"
                class="form-input"
                placeholder={field.label()}
                value={unit.details.text(field).to_string()}
                {oninput}
            />
        </div>
    }
}

fn flag_field(index: usize, unit: &Unit, flag: UnitFlag, link: &Scope<SupplierManagement>) -> Html {
    html! {
        <div class="form-group checkbox-group">
            <label class="checkbox-label">
                <input
                    type="checkbox"
                    checked={unit.details.flag(flag)}
                    onchange={link.callback(move |e: Event| {
                        Msg::Edit(EditMsg::SetUnitFlag(index, flag, checkbox_value(e)))
                    })}
                />
                {flag.label()}
            </label>
        </div>
    }
}

fn responsible_fields(
    index: usize,
    unit: &Unit,
    persons: &[Person],
    persons_loading: bool,
    link: &Scope<SupplierManagement>,
) -> Html {
    let responsible = &unit.responsible;
    let selected = responsible
        .person_id
        .map(|id| id.to_string())
        .unwrap_or_default();

    let options = if persons_loading {
        html! { <option value="" disabled=true>{"Loading persons..."}</option> }
    } else if persons.is_empty() {
        html! { <option value="" disabled=true>{"No persons found"}</option> }
    } else {
        persons
            .iter()
            .map(|person| {
                let value = person.person_id.to_string();
                let is_selected = value == selected;
                html! {
                    <option selected={is_selected} {value}>{person.display_name()}</option>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="unit-form-section">
            <h5>{"Responsible Person"}</h5>
            <div class="form-group">
                <label class="form-label">{"Select Person"}</label>
                <select
                    class="form-input"
                    onchange={link.callback(move |e: Event| {
                        let person_id = select_value(e).parse().ok();
                        Msg::Edit(EditMsg::SelectPerson(index, person_id))
                    })}
                >
                    <option value="" selected={selected.is_empty()}>{"-- No responsible person --"}</option>
                    { options }
                </select>
            </div>
            <div class="form-grid">
                { for ResponsibleField::ALL.into_iter().map(|field| html! {
                    <div class="form-group">
                        <label class="form-label">{field.label()}</label>
                        <input
                            type="text"
                            class="form-input"
                            value={responsible.get(field).to_string()}
                            oninput={link.callback(move |e: InputEvent| {
                                Msg::Edit(EditMsg::SetResponsible(index, field, input_value(e)))
                            })}
                        />
                    </div>
                }) }
            </div>
        </div>
    }
}

fn certificate_fields(
    index: usize,
    unit: &Unit,
    errors: &ValidationErrors,
    link: &Scope<SupplierManagement>,
) -> Html {
    html! {
        <div class="unit-form-section">
            <div class="section-header">
                <h5>{format!("Certificates ({})", unit.certificates.len())}</h5>
                <button
                    type="button"
                    class="btn-secondary"
                    onclick={link.callback(move |_| Msg::Edit(EditMsg::AddCertificate(index)))}
                >
                    {"+ Add Certificate"}
                </button>
            </div>
            {
                if unit.certificates.is_empty() {
                    html! { <p class="no-units">{"No Certificates Added Yet"}</p> }
                } else {
                    unit.certificates
                        .iter()
                        .enumerate()
                        .map(|(cert, certificate)| certificate_row(index, cert, certificate, errors, link))
                        .collect::<Html>()
                }
            }
        </div>
    }
}

fn certificate_row(
    index: usize,
    cert: usize,
    certificate: &Certificate,
    errors: &ValidationErrors,
    link: &Scope<SupplierManagement>,
) -> Html {
    let type_path = FieldPath::CertificateType(index, cert);
    let date_path = FieldPath::CertificateDate(index, cert);
    let set = move |field: CertificateField, value: String| {
        Msg::Edit(EditMsg::SetCertificateField(index, cert, field, value))
    };

    html! {
        <div class="certificate-form-row">
            <div class="form-group">
                <label class="form-label">{"Certificate Type *"}</label>
                <select
                    class={input_class(errors, type_path)}
                    onchange={link.callback(move |e: Event| set(CertificateField::Type, select_value(e)))}
                >
                    <option value="" selected={certificate.cert_type.is_empty()}>
                        {"Select certificate type"}
                    </option>
                    { for CertificateType::ALL.into_iter().map(|kind| html! {
                        <option value={kind.code()} selected={certificate.cert_type == kind.code()}>
                            {kind.label()}
                        </option>
                    }) }
                    {
                        // A stored type outside the catalog stays selectable.
                        if !certificate.cert_type.is_empty()
                            && CertificateType::from_code(&certificate.cert_type).is_none()
                        {
                            html! {
                                <option value={certificate.cert_type.clone()} selected=true>
                                    {certificate.cert_type.clone()}
                                </option>
                            }
                        } else {
                            html! {}
                        }
                    }
                </select>
                { field_error(errors, type_path) }
            </div>
            {
                if certificate.is_other() {
                    html! {
                        <div class="form-group">
                            <label class="form-label">{"Custom Type"}</label>
                            <input
                                type="text"
                                class="form-input"
                                placeholder="Specify custom certificate type"
                                value={certificate.custom_type.clone()}
                                oninput={link.callback(move |e: InputEvent| set(CertificateField::CustomType, input_value(e)))}
                            />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="form-group">
                <label class="form-label">{"Validity Date *"}</label>
                <input
                    type="date"
                    class={input_class(errors, date_path)}
                    value={date_only(certificate.effective_date()).to_string()}
                    oninput={link.callback(move |e: InputEvent| set(CertificateField::ValidityDate, input_value(e)))}
                />
                { field_error(errors, date_path) }
            </div>
            <button
                type="button"
                class="btn-icon btn-delete"
                title="Remove certificate"
                onclick={link.callback(move |_| Msg::Edit(EditMsg::RemoveCertificate(index, cert)))}
            >
                {"🗑"}
            </button>
        </div>
    }
}
