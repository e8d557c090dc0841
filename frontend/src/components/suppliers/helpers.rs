//! Small utilities shared by the supplier view, its dialogs and `update.rs`:
//! toast notifications, input event decoding, and display formatting.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn background(self) -> &'static str {
        match self {
            ToastKind::Success => "#2e7d32",
            ToastKind::Error => "#c62828",
        }
    }
}

/// Shows a notification at the top center of the page and removes it after
/// a few seconds. Stacks below the navbar so it does not hide the menu.
pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("top", "80px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", kind.background()).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "12px 24px").ok();
    style.set_property("border-radius", "6px").ok();
    style.set_property("box-shadow", "0 4px 12px rgba(0, 0, 0, 0.2)").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("font-family", "Arial, sans-serif").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(4000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

pub fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn textarea_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(e: Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

pub fn checkbox_value(e: Event) -> bool {
    e.target_unchecked_into::<HtmlInputElement>().checked()
}

/// The `YYYY-MM-DD` part of a stored date, which may carry a time suffix.
pub fn date_only(value: &str) -> &str {
    match value.find('T') {
        Some(pos) => &value[..pos],
        None => value,
    }
}

/// Up to two uppercase initials, shown in place of a logo.
pub fn initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    }
}

/// `"City, Country"`, or whichever part is known.
pub fn location(city: &str, country: &str) -> String {
    match (city.is_empty(), country.is_empty()) {
        (false, false) => format!("{}, {}", city, country),
        (false, true) => city.to_string(),
        (true, false) => country.to_string(),
        (true, true) => String::new(),
    }
}
