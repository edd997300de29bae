//! Dashboard Page
//!
//! Quick-add form, hours overview and the latest time logs. The overview
//! and the detail lists load independently; each reports its own failure.

use leptos::*;
use timekeeper::client::ClientResult;
use timekeeper::views::dashboard::SUCCESS_MESSAGE;
use timekeeper::views::form::parse_id;
use timekeeper::views::{DashboardView, LoadOutcome, SummaryTab};

use super::{BUTTON_CLASS, INPUT_CLASS};
use crate::api;
use crate::components::{DataTable, ErrorMessage, SuccessMessage};
use crate::state::global::use_global_state;
use crate::state::page::log_error;

/// Start both load phases
fn spawn_refresh(page: RwSignal<DashboardView>) {
    let Some((summaries, details, range)) =
        page.try_update(|v| (v.begin_summaries(), v.begin_details(), v.range))
    else {
        return;
    };

    spawn_local(async move {
        let result = DashboardView::fetch_summaries(&api::client(), &range).await;
        if page.try_update(|v| v.finish_summaries(summaries, result)) == Some(LoadOutcome::Failed) {
            page.with_untracked(|v| log_error("summaries failed", v.error()));
        }
    });

    spawn_local(async move {
        let result = DashboardView::fetch_details(&api::client()).await;
        if page.try_update(|v| v.finish_details(details, result)) == Some(LoadOutcome::Failed) {
            page.with_untracked(|v| log_error("details failed", v.form_error()));
        }
    });
}

/// Apply a quick-add result. `None` when the page was left meanwhile.
fn apply_quick_add(page: RwSignal<DashboardView>, result: ClientResult<()>) -> Option<bool> {
    let created = page.try_update(|v| v.finish_quick_add(result))?;
    if !created {
        page.with_untracked(|v| log_error("quick add failed", v.form_error()));
    }
    Some(created)
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_global_state();
    let today = chrono::Local::now().date_naive();
    let page = create_rw_signal(DashboardView::new(today));
    spawn_refresh(page);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = page.try_update(|v| v.begin_quick_add()).flatten() else {
            return;
        };

        spawn_local(async move {
            let result = api::client().create_time_entry(&payload).await.map(|_| ());
            if apply_quick_add(page, result) == Some(true) {
                state.show_success(SUCCESS_MESSAGE);
                spawn_refresh(page);
            }
        });
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-semibold">"Dashboard"</h1>
            <ErrorMessage message=Signal::derive(move || page.with(|v| v.error().map(str::to_string))) />

            <section class="bg-gray-800 rounded-lg p-4">
                <h2 class="font-medium text-gray-300 mb-3">"Quick add task"</h2>
                <ErrorMessage message=Signal::derive(move || page.with(|v| v.form_error().map(str::to_string))) />
                <SuccessMessage message=Signal::derive(move || page.with(|v| v.success().map(str::to_string))) />

                <form on:submit=on_submit class="grid gap-3 md:grid-cols-5">
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
                    <div class="md:col-span-5">
                        <button
                            type="submit"
                            class=BUTTON_CLASS
                            disabled=move || page.with(|v| !v.can_quick_add())
                        >
                            "Log Task"
                        </button>
                    </div>
                </form>
            </section>

            <section class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <Overview page=page />

                <div class="bg-gray-800 rounded-lg p-3">
                    <h2 class="font-medium text-gray-300 mb-2">"Recent time logs"</h2>
                    <DataTable table=Signal::derive(move || page.with(|v| v.recent_table())) />
                </div>
            </section>
        </div>
    }
}

#[component]
fn Overview(page: RwSignal<DashboardView>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg">
            <div class="flex items-center justify-between p-3 border-b border-gray-700">
                <h2 class="font-medium text-gray-300">"Overview"</h2>
                <div class="flex rounded-md overflow-hidden border border-gray-600">
                    <TabButton page=page tab=SummaryTab::Project />
                    <TabButton page=page tab=SummaryTab::Customer />
                </div>
            </div>
            <ul class="divide-y divide-gray-700">
                {move || page.with(|v| {
                    v.overview()
                        .into_iter()
                        .map(|row| view! {
                            <li class="px-3 py-2 text-sm">
                                <div class="flex items-center justify-between gap-3">
                                    <div class="min-w-0">
                                        {row.subtitle.map(|s| view! {
                                            <div class="text-gray-400 truncate">{s}</div>
                                        })}
                                        <div class="font-medium truncate">{row.title}</div>
                                    </div>
                                    <div class="text-primary-400 font-semibold whitespace-nowrap">
                                        {format!("{:.2} h", row.hours)}
                                    </div>
                                </div>
                            </li>
                        })
                        .collect_view()
                })}
                {move || page.with(|v| v.overview_empty_message()).map(|message| view! {
                    <li class="px-3 py-2 text-gray-400 text-sm">{message}</li>
                })}
            </ul>
        </div>
    }
}

#[component]
fn TabButton(page: RwSignal<DashboardView>, tab: SummaryTab) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || {
                let base = "px-3 py-1 text-sm";
                if page.with(|v| v.tab) == tab {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300", base)
                }
            }
            on:click=move |_| page.update(|v| v.tab = tab)
        >
            {tab.label()}
        </button>
    }
}
