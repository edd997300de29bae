//! View models
//!
//! Each page of the dashboard is a plain struct holding its data snapshot,
//! its form and its error text. Front ends drive them in two steps around
//! every network call: `begin_*` before the await, `finish_*` after it.
//! The [`load`] and [`create`] helpers run both steps for callers that can
//! hold `&mut` across the await (the CLI and tests).
//!
//! - [`customers`], [`departments`], [`projects`], [`time_entries`]:
//!   list + create pages
//! - [`dashboard`]: report summaries, recent entries and quick-add
//! - [`shell`]: navigation routes

pub mod customers;
pub mod dashboard;
pub mod departments;
pub mod form;
pub mod lookup;
pub mod projects;
pub mod shell;
pub mod snapshot;
pub mod table;
pub mod time_entries;

pub use customers::{CustomerForm, CustomersData, CustomersView};
pub use dashboard::{DashboardDetails, DashboardView, Summaries, SummaryRow, SummaryTab};
pub use departments::{DepartmentForm, DepartmentsData, DepartmentsView};
pub use lookup::Lookup;
pub use projects::{ProjectForm, ProjectsData, ProjectsView};
pub use shell::{NavState, Route};
pub use snapshot::{LoadOutcome, LoadTicket, Snapshot, ViewState};
pub use table::{Row, Table, TableBody, PLACEHOLDER};
pub use time_entries::{TimeEntriesData, TimeEntriesView, TimeEntryForm};

use async_trait::async_trait;

use crate::client::{ApiClient, ClientResult, Transport};

/// Row limit used by the list pages
pub const LIST_LIMIT: u32 = 1000;

/// Outcome of a create attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form is incomplete or a submit is already in flight; nothing sent
    Invalid,
    /// The backend rejected the write; the form keeps its input
    Failed,
    /// Written, form reset, list reloaded
    Created,
}

/// A list + create page.
///
/// `fetch` and `submit` are the only parts that talk to the backend; the
/// rest is synchronous state handling shared by every front end.
#[async_trait(?Send)]
pub trait EntityView {
    type Data: Default + 'static;
    type Payload: Clone + 'static;

    /// Fetch this page's list and the parent lists it joins against
    async fn fetch<T: Transport>(client: &ApiClient<T>) -> ClientResult<Self::Data>;

    /// Send exactly one write request
    async fn submit<T: Transport>(client: &ApiClient<T>, payload: &Self::Payload) -> ClientResult<()>;

    fn state(&self) -> &ViewState<Self::Data>;

    fn state_mut(&mut self) -> &mut ViewState<Self::Data>;

    /// The payload the form would send, or `None` while it is incomplete
    fn payload(&self) -> Option<Self::Payload>;

    fn reset_form(&mut self);

    fn table(&self) -> Table;

    fn data(&self) -> &Self::Data {
        self.state().data()
    }

    fn error(&self) -> Option<&str> {
        self.state().error()
    }

    /// Whether the submit action should be enabled
    fn can_submit(&self) -> bool {
        !self.state().is_submitting() && self.payload().is_some()
    }

    /// Hand out the payload if the form is complete, clearing the error.
    /// An incomplete form leaves the error as it was.
    fn begin_submit(&mut self) -> Option<Self::Payload> {
        if self.state().is_submitting() {
            return None;
        }
        let payload = self.payload()?;
        self.state_mut().clear_error();
        self.state_mut().set_submitting(true);
        Some(payload)
    }

    /// Apply the write result. Returns `true` when the caller should reload.
    fn finish_submit(&mut self, result: ClientResult<()>) -> bool {
        self.state_mut().set_submitting(false);
        match result {
            Ok(()) => {
                self.reset_form();
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "create failed");
                self.state_mut().set_error(&e);
                false
            }
        }
    }
}

/// Run a full load cycle on `view`
pub async fn load<V: EntityView, T: Transport>(view: &mut V, client: &ApiClient<T>) -> LoadOutcome {
    let ticket = view.state_mut().begin_load();
    let result = V::fetch(client).await;
    view.state_mut().finish_load(ticket, result)
}

/// Submit the form on `view`, then reload on success
pub async fn create<V: EntityView, T: Transport>(
    view: &mut V,
    client: &ApiClient<T>,
) -> SubmitOutcome {
    let Some(payload) = view.begin_submit() else {
        return SubmitOutcome::Invalid;
    };

    let result = V::submit(client, &payload).await;
    if view.finish_submit(result) {
        load(view, client).await;
        SubmitOutcome::Created
    } else {
        SubmitOutcome::Failed
    }
}
