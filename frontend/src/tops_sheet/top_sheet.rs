use yew::{classes, html, Callback, Component, Context, Html, MouseEvent, Properties};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    #[prop_or_default]
    pub icon: Option<&'static str>,
    /// Extra class for the panel, e.g. `large-modal` or `modal-sm`.
    #[prop_or_default]
    pub size: Option<&'static str>,
    /// Clicking the backdrop or the close button calls this.
    pub on_close: Callback<()>,
    /// Hides the close button while a request is in flight.
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub children: Html,
}

/// Modal sheet drawn over the page. The parent decides whether it exists;
/// the sheet only reports close requests.
pub struct TopSheet;

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let close = {
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| on_close.emit(()))
        };

        html! {
            <div class="modal-overlay" onclick={close.clone()}>
                <div
                    class={classes!("modal-content", props.size)}
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    <div class="modal-header">
                        <div class="modal-title">
                            {
                                match props.icon {
                                    Some(icon) => html! { <span class="modal-icon">{icon}</span> },
                                    None => html! {},
                                }
                            }
                            <h2>{props.title.clone()}</h2>
                        </div>
                        {
                            if props.busy {
                                html! {}
                            } else {
                                html! { <button class="modal-close" onclick={close}>{"✕"}</button> }
                            }
                        }
                    </div>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
