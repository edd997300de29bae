//! Time Entries Page

use leptos::*;
use timekeeper::views::form::parse_id;
use timekeeper::views::{EntityView, TimeEntriesView};

use super::{BUTTON_CLASS, INPUT_CLASS};
use crate::components::{DataTable, ErrorMessage, InlineLoading};
use crate::state::{spawn_load, spawn_submit};

#[component]
pub fn TimeEntries() -> impl IntoView {
    let page = create_rw_signal(TimeEntriesView::new());
    spawn_load(page);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_submit(page);
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold">"Time Entries"</h1>
            <ErrorMessage message=Signal::derive(move || page.with(|v| v.error().map(str::to_string))) />

            <form on:submit=on_submit class="grid gap-3 md:grid-cols-6 bg-gray-800 rounded-lg p-4">
                <select
                    class=INPUT_CLASS
                    prop:value=move || page.with(|v| v.form.project_id.map(|id| id.to_string()).unwrap_or_default())
                    on:change=move |ev| page.update(|v| v.form.project_id = parse_id(&event_target_value(&ev)))
                >
                    <option value="">"Select project"</option>
                    {move || page.with(|v| {
                        v.project_options()
                            .iter()
                            .map(|p| view! { <option value=p.id.to_string()>{p.name.clone()}</option> })
                            .collect_view()
                    })}
                </select>
                <input
                    class=INPUT_CLASS
                    type="date"
                    prop:value=move || page.with(|v| v.form.work_date.clone())
                    on:input=move |ev| page.update(|v| v.form.work_date = event_target_value(&ev))
                />
                <input
                    class=INPUT_CLASS
                    type="number"
                    step="0.25"
                    min="0"
                    placeholder="Hours"
                    prop:value=move || page.with(|v| v.form.hours.clone())
                    on:input=move |ev| page.update(|v| v.form.hours = event_target_value(&ev))
                />
                <input
                    class=INPUT_CLASS
                    placeholder="Description"
                    prop:value=move || page.with(|v| v.form.description.clone())
                    on:input=move |ev| page.update(|v| v.form.description = event_target_value(&ev))
                />
                <label class="flex items-center gap-2">
                    <input
                        type="checkbox"
                        prop:checked=move || page.with(|v| v.form.billable)
                        on:change=move |ev| page.update(|v| v.form.billable = event_target_checked(&ev))
                    />
                    "Billable"
                </label>
                <button
                    type="submit"
                    class=BUTTON_CLASS
                    disabled=move || page.with(|v| !v.can_submit())
                >
                    "Add Entry"
                </button>
            </form>

            <Show when=move || page.with(|v| v.state().is_loading())>
                <InlineLoading />
            </Show>
            <DataTable table=Signal::derive(move || page.with(|v| v.table())) />
        </div>
    }
}
