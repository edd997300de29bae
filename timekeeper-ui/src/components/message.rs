//! Inline status messages shown next to a page or form

use leptos::*;

#[component]
pub fn ErrorMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|msg| view! {
            <div class="text-red-400 mb-2">{msg}</div>
        })
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|msg| view! {
            <div class="text-green-400 mb-2">{msg}</div>
        })
    }
}
