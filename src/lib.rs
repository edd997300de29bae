//! # Timekeeper
//!
//! Client side of a small time-tracking service: customers, their
//! departments and projects, and the hours logged against those projects.
//!
//! ## Modules
//!
//! - [`models`]: entity, payload and query types matching the backend JSON
//! - [`client`]: the [`Transport`] seam and the typed [`ApiClient`]
//! - [`views`]: per-page view models shared by the web UI and the CLI
//! - [`config`]: TOML configuration for the CLI (`native` feature)
//!
//! The crate builds for `wasm32` with `default-features = false`; the
//! `native` feature adds the reqwest transport, config loading and the
//! `timekeeper` binary.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use timekeeper::client::{ApiClient, HttpTransport};
//! use timekeeper::views::{load, CustomersView, EntityView};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ApiClient::new(HttpTransport::new("http://localhost:8000"));
//!
//!     let mut customers = CustomersView::new();
//!     load(&mut customers, &client).await;
//!
//!     match customers.error() {
//!         Some(e) => eprintln!("{e}"),
//!         None => print!("{}", customers.table().render_text()),
//!     }
//! }
//! ```

pub mod client;
#[cfg(feature = "native")]
pub mod config;
pub mod models;
pub mod views;

pub use client::{ApiClient, ApiRequest, ClientError, ClientResult, Method, Transport};

#[cfg(feature = "native")]
pub use client::HttpTransport;

pub use models::{
    Customer, CustomerSummary, Department, Id, NewCustomer, NewDepartment, NewProject,
    NewTimeEntry, Project, ProjectSummary, ReportRange, TimeEntry,
};

pub use views::{
    DashboardView, CustomersView, DepartmentsView, EntityView, LoadOutcome, ProjectsView, Route,
    SubmitOutcome, Table, TimeEntriesView,
};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, OutputFormat};
