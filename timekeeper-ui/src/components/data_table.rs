//! Table Component
//!
//! Renders a [`Table`] model: header row, then either the data rows or one
//! placeholder row spanning every column.

use leptos::*;
use timekeeper::views::{Table, TableBody};

#[component]
pub fn DataTable(#[prop(into)] table: Signal<Table>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full text-sm">
                <thead class="bg-gray-800">
                    <tr>
                        {move || table.with(|t| {
                            t.columns
                                .iter()
                                .map(|&column| view! { <th class="text-left p-2">{column}</th> })
                                .collect_view()
                        })}
                    </tr>
                </thead>
                <tbody>
                    {move || table.with(|t| match &t.body {
                        TableBody::Rows(rows) => rows
                            .iter()
                            .map(|row| view! {
                                <tr class="border-t border-gray-700">
                                    {row.cells
                                        .iter()
                                        .map(|cell| view! { <td class="p-2">{cell.clone()}</td> })
                                        .collect_view()}
                                </tr>
                            })
                            .collect_view(),
                        TableBody::Empty(message) => view! {
                            <tr>
                                <td class="p-3 text-gray-400" colspan=t.colspan()>{*message}</td>
                            </tr>
                        }
                        .into_view(),
                    })}
                </tbody>
            </table>
        </div>
    }
}
