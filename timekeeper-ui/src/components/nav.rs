//! Navigation Component
//!
//! Header bar with brand, page links and the mobile menu toggle.

use leptos::*;
use leptos_router::*;
use timekeeper::views::Route as Page;

use crate::state::global::use_global_state;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_global_state();
    let menu_open = move || state.nav.with(|n| n.menu_open);

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href=Page::Dashboard.path() class="flex items-center space-x-3">
                        <span class="text-xl font-bold text-white">"Timekeeper"</span>
                    </A>

                    // Desktop links
                    <div class="hidden md:flex items-center space-x-1">
                        <NavLinks />
                    </div>

                    <button
                        type="button"
                        class="md:hidden px-3 py-2 rounded-lg text-gray-300 hover:bg-gray-700"
                        aria-label="Toggle navigation"
                        on:click=move |_| state.nav.update(|n| n.toggle())
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>

                <Show when=menu_open>
                    <div class="md:hidden flex flex-col pb-3 space-y-1">
                        <NavLinks />
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[component]
fn NavLinks() -> impl IntoView {
    Page::ALL
        .into_iter()
        .map(|page| view! { <NavLink href=page.path() label=page.label() /> })
        .collect_view()
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    let state = use_global_state();

    view! {
        <span class="contents" on:click=move |_| state.nav.update(|n| n.navigate())>
            <A
                href=href
                class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                active_class="bg-gray-700 text-white"
                exact=true
            >
                {label}
            </A>
        </span>
    }
}
