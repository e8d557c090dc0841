use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

use common::requests::ClientConfig;

use crate::components::navbar::Navbar;
use crate::components::suppliers::SupplierManagement;

pub enum Msg {
    ConfigLoaded(ClientConfig),
}

/// Application shell. Asks the host server where the supplier API lives
/// before mounting the supplier screen.
pub struct App {
    config: Option<ClientConfig>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            let config = match Request::get("/api/config").send().await {
                Ok(resp) if resp.ok() => resp.json::<ClientConfig>().await.ok(),
                _ => None,
            };
            let config = config.unwrap_or_else(|| {
                gloo_console::warn!("Could not read /api/config, using the default API URL");
                ClientConfig::default()
            });
            link.send_message(Msg::ConfigLoaded(config));
        });
        Self { config: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                self.config = Some(config);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                <Navbar />
                {
                    match &self.config {
                        Some(config) => html! {
                            <SupplierManagement api_base_url={config.api_base_url.clone()} />
                        },
                        None => html! {
                            <div class="loading-container">
                                <div class="loading-spinner"></div>
                            </div>
                        },
                    }
                }
            </div>
        }
    }
}
