//! Read-only dialog showing every known attribute of one unit.

use yew::html::Scope;
use yew::prelude::*;

use common::model::certificate::CertificateType;
use common::model::unit::{Unit, UnitField, UnitSection};

use crate::components::suppliers::state::UnitDetail;
use crate::components::suppliers::{Msg, SupplierManagement};
use crate::tops_sheet::top_sheet::TopSheet;

pub fn unit_detail_dialog(component: &SupplierManagement, link: &Scope<SupplierManagement>) -> Html {
    let on_close = link.callback(|_| Msg::CloseUnitDetail);
    match &component.unit_detail {
        None => html! {},
        Some(UnitDetail::Loading(_)) => html! {
            <TopSheet title="Loading unit..." icon={Some("🏭")} {on_close}>
                <div class="modal-body">
                    <div class="loading-spinner"><div class="spin"></div></div>
                </div>
            </TopSheet>
        },
        Some(UnitDetail::Ready(unit)) => html! {
            <TopSheet title={unit.name().to_string()} icon={Some("🏭")} {on_close}>
                <div class="modal-body">
                    { for UnitSection::ALL.into_iter().map(|section| detail_section(unit, section)) }
                    { responsible_section(unit) }
                    { certificates_section(unit) }
                </div>
            </TopSheet>
        },
    }
}

fn detail_section(unit: &Unit, section: UnitSection) -> Html {
    let mut items: Vec<Html> = Vec::new();
    if section == UnitSection::General && !unit.supplier_name.is_empty() {
        items.push(detail_item("Group", html! { <>{unit.supplier_name.clone()}</> }));
    }
    for &field in section.fields() {
        let value = unit.details.text(field);
        if !value.is_empty() {
            items.push(detail_item(field.label(), field_value(field, value)));
        }
    }
    for &flag in section.flags() {
        let value = if unit.details.flag(flag) { "Yes" } else { "No" };
        items.push(detail_item(flag.label(), html! { <>{value}</> }));
    }

    if items.is_empty() {
        return html! {};
    }
    html! {
        <div class="detail-section">
            <h3>{section.title()}</h3>
            <div class="detail-grid">{ for items }</div>
        </div>
    }
}

fn field_value(field: UnitField, value: &str) -> Html {
    match field {
        UnitField::Phone => html! { <a href={format!("tel:{}", value)}>{value.to_string()}</a> },
        UnitField::Website => {
            let href = if value.starts_with("http://") || value.starts_with("https://") {
                value.to_string()
            } else {
                format!("https://{}", value)
            };
            html! { <a {href} target="_blank" rel="noopener noreferrer">{value.to_string()}</a> }
        }
        _ => html! { <>{value.to_string()}</> },
    }
}

fn detail_item(label: &str, value: Html) -> Html {
    html! {
        <div class="detail-item">
            <span class="detail-label">{label.to_string()}</span>
            <span class="detail-value">{value}</span>
        </div>
    }
}

fn responsible_section(unit: &Unit) -> Html {
    let person = &unit.responsible;
    let name = person.full_name();
    if !person.is_assigned() && name.is_empty() {
        return html! {};
    }

    let mut items = vec![detail_item("Name", html! { <>{name}</> })];
    if !person.job_title.is_empty() {
        items.push(detail_item("Job Title", html! { <>{person.job_title.clone()}</> }));
    }
    if !person.email.is_empty() {
        items.push(detail_item(
            "Email",
            html! { <a href={format!("mailto:{}", person.email)}>{person.email.clone()}</a> },
        ));
    }
    if !person.phone_number.is_empty() {
        items.push(detail_item(
            "Phone",
            html! { <a href={format!("tel:{}", person.phone_number)}>{person.phone_number.clone()}</a> },
        ));
    }
    items.push(detail_item("Role", html! { <>{person.role.clone()}</> }));
    if !person.zone_name.is_empty() {
        items.push(detail_item("Zone", html! { <>{person.zone_name.clone()}</> }));
    }

    html! {
        <div class="detail-section">
            <h3>{"Responsible Person"}</h3>
            <div class="detail-grid">{ for items }</div>
        </div>
    }
}

fn certificates_section(unit: &Unit) -> Html {
    html! {
        <div class="detail-section">
            <h3>{format!("Certificates ({})", unit.certificates.len())}</h3>
            {
                if unit.certificates.is_empty() {
                    html! { <p class="no-units">{"No certificates"}</p> }
                } else {
                    html! {
                        <div class="certificates-list">
                            { for unit.certificates.iter().map(|cert| {
                                let name = CertificateType::from_code(cert.persisted_type())
                                    .map(|t| t.label().to_string())
                                    .unwrap_or_else(|| cert.persisted_type().to_string());
                                html! {
                                    <div class="certificate-item">
                                        <span class="certificate-type">{name}</span>
                                        <span class="certificate-date">
                                            {format!("Valid until {}", cert.effective_date())}
                                        </span>
                                    </div>
                                }
                            }) }
                        </div>
                    }
                }
            }
        </div>
    }
}
