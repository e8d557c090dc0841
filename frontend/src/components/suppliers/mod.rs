//! Supplier screen: the searchable list of supplier cards plus the unit
//! detail, editor and delete dialogs.
//!
//! `update` owns every state transition and spawns the remote calls;
//! `view` renders from state only.

use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::{EditMsg, Msg};
pub use props::SupplierManagementProps;
pub use state::SupplierManagement;

use crate::api::HttpSupplierApi;

impl Component for SupplierManagement {
    type Message = Msg;
    type Properties = SupplierManagementProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::LoadCatalog);
        SupplierManagement::new(HttpSupplierApi::new(&ctx.props().api_base_url))
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().api_base_url != old_props.api_base_url {
            self.api = HttpSupplierApi::new(&ctx.props().api_base_url);
            ctx.link().send_message(Msg::LoadCatalog);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
