//! Time entries page
//!
//! [`TimeEntryForm`] is also the dashboard's quick-add form.

use async_trait::async_trait;
use chrono::NaiveDate;
use futures_util::future::try_join;
use serde::Serialize;

use super::form::{optional_text, parse_date, parse_hours};
use super::lookup::Lookup;
use super::table::{format_date, format_hours, or_placeholder, yes_no, Row, Table};
use super::{EntityView, ViewState, LIST_LIMIT};
use crate::client::{ApiClient, ClientResult, Transport};
use crate::models::{Id, ListQuery, NewTimeEntry, Project, TimeEntry, TimeEntryQuery};

const COLUMNS: &[&str] = &["Date", "Project", "Hours", "Billable", "Description"];

#[derive(Debug, Clone, Default, Serialize)]
pub struct TimeEntriesData {
    pub entries: Vec<TimeEntry>,
    /// Active projects only
    pub projects: Lookup<Project>,
}

/// Raw input for a new time entry. Date and hours stay as typed until
/// [`payload`](Self::payload) parses them.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntryForm {
    pub project_id: Option<Id>,
    pub work_date: String,
    pub hours: String,
    pub description: String,
    pub billable: bool,
}

impl Default for TimeEntryForm {
    fn default() -> Self {
        Self {
            project_id: None,
            work_date: String::new(),
            hours: String::new(),
            description: String::new(),
            billable: true,
        }
    }
}

impl TimeEntryForm {
    /// Empty form with the date prefilled
    pub fn with_date(date: NaiveDate) -> Self {
        Self {
            work_date: format_date(date),
            ..Self::default()
        }
    }

    /// Clear everything except the date
    pub fn clear_keeping_date(&mut self) {
        let work_date = std::mem::take(&mut self.work_date);
        *self = Self {
            work_date,
            ..Self::default()
        };
    }

    pub fn payload(&self) -> Option<NewTimeEntry> {
        Some(NewTimeEntry {
            project_id: self.project_id?,
            work_date: parse_date(&self.work_date)?,
            hours: parse_hours(&self.hours)?,
            description: optional_text(&self.description),
            billable: self.billable,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimeEntriesView {
    state: ViewState<TimeEntriesData>,
    pub form: TimeEntryForm,
}

impl TimeEntriesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_options(&self) -> &[Project] {
        self.data().projects.items()
    }
}

#[async_trait(?Send)]
impl EntityView for TimeEntriesView {
    type Data = TimeEntriesData;
    type Payload = NewTimeEntry;

    async fn fetch<T: Transport>(client: &ApiClient<T>) -> ClientResult<TimeEntriesData> {
        let (entries, projects) = try_join(
            client.list_time_entries(&TimeEntryQuery::limit(LIST_LIMIT)),
            client.list_projects(&ListQuery::limit(LIST_LIMIT).active_only()),
        )
        .await?;

        Ok(TimeEntriesData {
            entries,
            projects: Lookup::new(projects),
        })
    }

    async fn submit<T: Transport>(
        client: &ApiClient<T>,
        payload: &NewTimeEntry,
    ) -> ClientResult<()> {
        client.create_time_entry(payload).await.map(|_| ())
    }

    fn state(&self) -> &ViewState<TimeEntriesData> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ViewState<TimeEntriesData> {
        &mut self.state
    }

    fn payload(&self) -> Option<NewTimeEntry> {
        self.form.payload()
    }

    fn reset_form(&mut self) {
        self.form = TimeEntryForm::default();
    }

    fn table(&self) -> Table {
        let data = self.data();
        let rows = data
            .entries
            .iter()
            .map(|e| Row {
                key: e.id,
                cells: vec![
                    format_date(e.work_date),
                    data.projects.name_or_id(e.project_id),
                    format_hours(e.hours),
                    yes_no(e.billable),
                    or_placeholder(e.description.as_deref()),
                ],
            })
            .collect();

        Table::new(COLUMNS, rows, "No entries yet.")
    }
}
