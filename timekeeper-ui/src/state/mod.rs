//! State Management
//!
//! Shell-wide signals and the glue that runs view-model loads and submits
//! on the browser event loop.

pub mod global;
pub mod page;

pub use page::{spawn_load, spawn_submit};
