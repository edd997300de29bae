//! Drives [`EntityView`] models held in signals
//!
//! A signal cannot be borrowed across an await, so each operation is split:
//! begin under `update`, await the request with no borrow held, then finish
//! under `update`. Load tickets make a late response from an older load a
//! no-op.

use leptos::*;
use timekeeper::views::{EntityView, LoadOutcome};
use wasm_bindgen::JsValue;

use crate::api;

pub fn spawn_load<V: EntityView + 'static>(view: RwSignal<V>) {
    let Some(ticket) = view.try_update(|v| v.state_mut().begin_load()) else {
        return;
    };

    spawn_local(async move {
        let client = api::client();
        let result = V::fetch(&client).await;
        let outcome = view.try_update(|v| v.state_mut().finish_load(ticket, result));
        if outcome == Some(LoadOutcome::Failed) {
            view.with_untracked(|v| log_error("load failed", v.error()));
        }
    });
}

pub fn spawn_submit<V: EntityView + 'static>(view: RwSignal<V>) {
    let Some(payload) = view.try_update(|v| v.begin_submit()).flatten() else {
        return;
    };

    spawn_local(async move {
        let client = api::client();
        let result = V::submit(&client, &payload).await;
        match view.try_update(|v| v.finish_submit(result)) {
            Some(true) => spawn_load(view),
            Some(false) => view.with_untracked(|v| log_error("create failed", v.error())),
            None => {}
        }
    });
}

/// Write a failure to the browser console
pub fn log_error(context: &str, message: Option<&str>) {
    let text = format!("{}: {}", context, message.unwrap_or("unknown error"));
    web_sys::console::error_1(&JsValue::from_str(&text));
}
