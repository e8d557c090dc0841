//! View rendering for the supplier screen.
//!
//! The page is a header (title, search, add button) over a grid of supplier
//! cards. While the catalog loads, or when it failed, the grid is replaced by
//! a full-page loading or error panel. Dialogs are drawn on top from
//! `dialogs`.

use yew::html::Scope;
use yew::prelude::*;

use common::catalog::filter_groups;
use common::model::group::SupplierGroup;
use common::model::unit::Unit;
use common::model::RecordId;

use super::dialogs::{delete_confirm, supplier_form, unit_detail};
use super::helpers::{initials, input_value, location};
use super::messages::Msg;
use super::state::SupplierManagement;

pub fn view(component: &SupplierManagement, ctx: &Context<SupplierManagement>) -> Html {
    let link = ctx.link();

    if component.loading && component.groups.is_empty() {
        return loading_screen();
    }
    if let Some(error) = &component.load_error {
        return error_screen(error, link);
    }

    html! {
        <div class="customer-management">
            { build_header(component, link) }
            { build_grid(component, link) }

            { unit_detail::unit_detail_dialog(component, link) }
            { supplier_form::supplier_form_dialog(component, link) }
            { delete_confirm::delete_dialog(component, link) }
        </div>
    }
}

fn loading_screen() -> Html {
    html! {
        <div class="loading-container">
            <div class="loading-spinner">
                <div class="spin"></div>
                <p>{"Loading suppliers..."}</p>
            </div>
        </div>
    }
}

fn error_screen(error: &str, link: &Scope<SupplierManagement>) -> Html {
    html! {
        <div class="error-container">
            <div class="error-message">
                <h3>{"Error Loading Data"}</h3>
                <p>{error.to_string()}</p>
                <button class="retry-btn" onclick={link.callback(|_| Msg::LoadCatalog)}>
                    {"Try Again"}
                </button>
            </div>
        </div>
    }
}

fn build_header(component: &SupplierManagement, link: &Scope<SupplierManagement>) -> Html {
    html! {
        <header class="app-header">
            <div class="header-content">
                <div class="header-title">
                    <h1>{"Supplier Management"}</h1>
                </div>
                <p class="header-subtitle">{"Manage your suppliers and their units efficiently"}</p>

                <div class="header-actions">
                    <div class="customer-filter">
                        <input
                            type="text"
                            placeholder="Search suppliers by supplier name..."
                            value={component.search.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetSearch(input_value(e)))}
                        />
                    </div>
                    <div class="action-buttons">
                        <button class="btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                            {"Add Complete Supplier"}
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

fn build_grid(component: &SupplierManagement, link: &Scope<SupplierManagement>) -> Html {
    let groups = filter_groups(&component.groups, &component.search);

    if groups.is_empty() {
        return html! {
            <main class="main-content">
                <div class="empty-state">
                    <h3>{"No Suppliers Found"}</h3>
                    <p>{"No suppliers match your search criteria."}</p>
                    <button class="btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                        {"Add Your First Supplier"}
                    </button>
                </div>
            </main>
        };
    }

    html! {
        <main class="main-content">
            <div class="customers-grid">
                { for groups.into_iter().map(|group| supplier_card(component, group, link)) }
            </div>
        </main>
    }
}

fn supplier_card(
    component: &SupplierManagement,
    group: &SupplierGroup,
    link: &Scope<SupplierManagement>,
) -> Html {
    // The list endpoint always assigns ids; a record without one cannot be acted on.
    let Some(supplier_id) = group.supplier_id else {
        return html! {};
    };
    let term = component.unit_search_term(supplier_id);
    let units: Vec<&Unit> = group.units_matching(term).collect();

    html! {
        <div class="customer-card" key={supplier_id.to_string()}>
            <div class="customer-header">
                <div class="customer-icon">
                    <span class="customer-initials">{initials(&group.supplier_name)}</span>
                </div>
                <div class="customer-info">
                    <div class="customer-title-section">
                        <h3 class="customer-name">{group.supplier_name.clone()}</h3>
                        <div class="customer-actions">
                            <button
                                class="btn-icon btn-edit"
                                title="Edit Complete Supplier"
                                onclick={link.callback(move |_| Msg::OpenEdit(supplier_id))}
                            >
                                {"✎"}
                            </button>
                            <button
                                class="btn-icon btn-delete"
                                title="Delete Group"
                                onclick={link.callback(move |_| Msg::ConfirmDelete(supplier_id))}
                            >
                                {"🗑"}
                            </button>
                        </div>
                    </div>
                    {
                        if group.description.is_empty() {
                            html! {}
                        } else {
                            html! { <p class="customer-description">{group.description.clone()}</p> }
                        }
                    }
                    <div class="input-wrapper">
                        <input
                            type="text"
                            class="customer-input"
                            placeholder="Search units..."
                            value={term.to_string()}
                            oninput={link.callback(move |e: InputEvent| {
                                Msg::SetUnitSearch(supplier_id, input_value(e))
                            })}
                        />
                    </div>
                </div>
            </div>

            <div class="units-section">
                <div class="units-header">
                    <h4>{format!("Units ({})", units.len())}</h4>
                </div>
                <div class="units-list">
                    {
                        if units.is_empty() {
                            html! { <p class="no-units">{"No units found"}</p> }
                        } else {
                            units.into_iter().map(|unit| unit_item(unit, link)).collect::<Html>()
                        }
                    }
                </div>
            </div>
        </div>
    }
}

fn unit_item(unit: &Unit, link: &Scope<SupplierManagement>) -> Html {
    let onclick = unit
        .unit_id
        .map(|unit_id: RecordId| link.callback(move |_| Msg::ViewUnit(unit_id)));
    let place = location(&unit.details.city, &unit.details.country);

    html! {
        <div class="unit-item" {onclick}>
            <div class="unit-info">
                <div class="unit-name">
                    {unit.name().to_string()}
                    {
                        if unit.certificates.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <span class="certificate-count-badge">
                                    {format!("🏅 {}", unit.certificates.len())}
                                </span>
                            }
                        }
                    }
                </div>
                <div class="unit-details">
                    {
                        if place.is_empty() {
                            html! {}
                        } else {
                            html! { <span class="unit-location">{place}</span> }
                        }
                    }
                    {
                        if unit.details.zone_name.is_empty() {
                            html! {}
                        } else {
                            html! { <span class="unit-zone">{unit.details.zone_name.clone()}</span> }
                        }
                    }
                </div>
            </div>
            <div class="unit-arrow">{"›"}</div>
        </div>
    }
}
