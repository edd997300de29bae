//! Customers Page

use leptos::*;
use timekeeper::views::{CustomersView, EntityView};

use super::{BUTTON_CLASS, INPUT_CLASS};
use crate::components::{DataTable, ErrorMessage, InlineLoading};
use crate::state::{spawn_load, spawn_submit};

#[component]
pub fn Customers() -> impl IntoView {
    let page = create_rw_signal(CustomersView::new());
    spawn_load(page);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_submit(page);
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold">"Customers"</h1>
            <ErrorMessage message=Signal::derive(move || page.with(|v| v.error().map(str::to_string))) />

            <form on:submit=on_submit class="grid gap-3 md:grid-cols-5 bg-gray-800 rounded-lg p-4">
                <input
                    class=INPUT_CLASS
                    placeholder="Name"
                    prop:value=move || page.with(|v| v.form.name.clone())
                    on:input=move |ev| page.update(|v| v.form.name = event_target_value(&ev))
                />
                <input
                    class=INPUT_CLASS
                    type="email"
                    placeholder="Email"
                    prop:value=move || page.with(|v| v.form.email.clone())
                    on:input=move |ev| page.update(|v| v.form.email = event_target_value(&ev))
                />
                <input
                    class=INPUT_CLASS
                    placeholder="Notes"
                    prop:value=move || page.with(|v| v.form.notes.clone())
                    on:input=move |ev| page.update(|v| v.form.notes = event_target_value(&ev))
                />
                <label class="flex items-center gap-2">
                    <input
                        type="checkbox"
                        prop:checked=move || page.with(|v| v.form.active)
                        on:change=move |ev| page.update(|v| v.form.active = event_target_checked(&ev))
                    />
                    "Active"
                </label>
                <button
                    type="submit"
                    class=BUTTON_CLASS
                    disabled=move || page.with(|v| !v.can_submit())
                >
                    "Add Customer"
                </button>
            </form>

            <Show when=move || page.with(|v| v.state().is_loading())>
                <InlineLoading />
            </Show>
            <DataTable table=Signal::derive(move || page.with(|v| v.table())) />
        </div>
    }
}
