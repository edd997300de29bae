//! Global Application State
//!
//! Reactive state shared by the shell and the pages.

use leptos::*;
use timekeeper::views::NavState;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Mobile menu
    pub nav: RwSignal<NavState>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        nav: create_rw_signal(NavState::default()),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

/// The state installed by [`provide_global_state`]
pub fn use_global_state() -> GlobalState {
    expect_context::<GlobalState>()
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }
}
