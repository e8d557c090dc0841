use yew::html::Scope;
use yew::prelude::*;

use crate::components::suppliers::{Msg, SupplierManagement};
use crate::tops_sheet::top_sheet::TopSheet;

pub fn delete_dialog(component: &SupplierManagement, link: &Scope<SupplierManagement>) -> Html {
    let Some(group) = component.pending_delete.and_then(|id| component.group(id)) else {
        return html! {};
    };
    let unit_count = group.units.len();

    html! {
        <TopSheet
            title="Delete Group"
            icon={Some("⚠")}
            size={Some("modal-sm")}
            busy={component.deleting}
            on_close={link.callback(|_| Msg::CancelDelete)}
        >
            <div class="modal-body">
                <p>
                    {"Are you sure you want to delete the group "}
                    <strong>{format!("\"{}\"", group.supplier_name)}</strong>
                    {"?"}
                </p>
                {
                    if unit_count > 0 {
                        html! {
                            <div class="warning-message">
                                {format!(
                                    "This group has {} unit(s). Deleting it will also remove all associated units.",
                                    unit_count
                                )}
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="form-actions">
                <button
                    type="button"
                    class="btn-secondary"
                    disabled={component.deleting}
                    onclick={link.callback(|_| Msg::CancelDelete)}
                >
                    {"Cancel"}
                </button>
                <button
                    type="button"
                    class="btn-danger"
                    disabled={component.deleting}
                    onclick={link.callback(|_| Msg::Delete)}
                >
                    { if component.deleting { "Deleting..." } else { "Delete Group" } }
                </button>
            </div>
        </TopSheet>
    }
}
