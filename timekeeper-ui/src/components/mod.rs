//! UI Components
//!
//! Reusable Leptos components for the dashboard pages.

pub mod data_table;
pub mod loading;
pub mod message;
pub mod nav;
pub mod toast;

pub use data_table::DataTable;
pub use loading::InlineLoading;
pub use message::{ErrorMessage, SuccessMessage};
pub use nav::Nav;
pub use toast::Toast;
