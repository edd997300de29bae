//! Projects Page
//!
//! The department selector only lists the chosen customer's departments and
//! is cleared whenever the customer changes.

use leptos::*;
use timekeeper::views::form::parse_id;
use timekeeper::views::{EntityView, ProjectsView};

use super::{BUTTON_CLASS, INPUT_CLASS};
use crate::components::{DataTable, ErrorMessage, InlineLoading};
use crate::state::{spawn_load, spawn_submit};

#[component]
pub fn Projects() -> impl IntoView {
    let page = create_rw_signal(ProjectsView::new());
    spawn_load(page);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_submit(page);
    };

    let selected = |id: Option<i64>| id.map(|id| id.to_string()).unwrap_or_default();

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold">"Projects"</h1>
            <ErrorMessage message=Signal::derive(move || page.with(|v| v.error().map(str::to_string))) />

            <form on:submit=on_submit class="grid gap-3 md:grid-cols-5 bg-gray-800 rounded-lg p-4">
                <input
                    class=INPUT_CLASS
                    placeholder="Name"
                    prop:value=move || page.with(|v| v.form.name.clone())
                    on:input=move |ev| page.update(|v| v.form.name = event_target_value(&ev))
                />
                <select
                    class=INPUT_CLASS
                    prop:value=move || page.with(|v| selected(v.form.customer_id()))
                    on:change=move |ev| page.update(|v| v.select_customer(parse_id(&event_target_value(&ev))))
                >
                    <option value="">"Select customer"</option>
                    {move || page.with(|v| {
                        v.customer_options()
                            .iter()
                            .map(|c| view! { <option value=c.id.to_string()>{c.name.clone()}</option> })
                            .collect_view()
                    })}
                </select>
                <select
                    class=INPUT_CLASS
                    disabled=move || page.with(|v| v.form.customer_id().is_none())
                    prop:value=move || page.with(|v| selected(v.form.department_id()))
                    on:change=move |ev| page.update(|v| {
                        v.select_department(parse_id(&event_target_value(&ev)));
                    })
                >
                    <option value="">"No department"</option>
                    {move || page.with(|v| {
                        v.department_options()
                            .into_iter()
                            .map(|d| view! { <option value=d.id.to_string()>{d.name.clone()}</option> })
                            .collect_view()
                    })}
                </select>
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
                    "Add Project"
                </button>
            </form>

            <Show when=move || page.with(|v| v.state().is_loading())>
                <InlineLoading />
            </Show>
            <DataTable table=Signal::derive(move || page.with(|v| v.table())) />
        </div>
    }
}
