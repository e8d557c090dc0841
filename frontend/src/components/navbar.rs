use yew::{classes, html, Component, Context, Html};

pub enum Msg {
    ToggleMenu,
    CloseMenu,
}

/// Top navigation bar. On narrow screens the links collapse behind a
/// toggle button with an overlay that closes the menu when tapped.
pub struct Navbar {
    menu_open: bool,
}

impl Component for Navbar {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { menu_open: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let open = match msg {
            Msg::ToggleMenu => !self.menu_open,
            Msg::CloseMenu => false,
        };
        let changed = open != self.menu_open;
        self.menu_open = open;
        changed
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let active = if self.menu_open { "active" } else { "" };

        html! {
            <nav class="navbar">
                <div class="nav-container">
                    <div class="nav-logo">
                        <span class="logo-text">{"Supplier Admin"}</span>
                    </div>

                    <div class={classes!("nav-menu", active)}>
                        <div class="nav-links">
                            <a href="#suppliers" class="nav-link active">
                                <span class="nav-icon">{"📦"}</span>
                                <span class="nav-text">{"Suppliers"}</span>
                            </a>
                        </div>
                    </div>

                    <button
                        class={classes!("nav-toggle", active)}
                        onclick={link.callback(|_| Msg::ToggleMenu)}
                    >
                        <span class="toggle-line"></span>
                        <span class="toggle-line"></span>
                        <span class="toggle-line"></span>
                    </button>
                </div>

                {
                    if self.menu_open {
                        html! { <div class="nav-overlay" onclick={link.callback(|_| Msg::CloseMenu)} /> }
                    } else {
                        html! {}
                    }
                }
            </nav>
        }
    }
}
