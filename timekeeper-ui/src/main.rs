//! Timekeeper Dashboard
//!
//! Time-tracking dashboard built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Page state lives in the `timekeeper` view models, held in
//! signals; this crate only renders them and wires events to them. All
//! backend traffic goes through a `gloo-net` transport.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
