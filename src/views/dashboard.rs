//! Dashboard: report overview, recent entries and quick-add
//!
//! The page loads in two independent phases. The summary phase feeds the
//! overview and reports failures as the page error. The detail phase feeds
//! the quick-add project selector and the recent-entries table, and reports
//! failures next to the quick-add form.

use chrono::NaiveDate;
use futures_util::future::{join, try_join, try_join3};
use serde::Serialize;

use super::lookup::Lookup;
use super::snapshot::{LoadOutcome, LoadTicket, ViewState};
use super::table::{format_date, format_hours, or_placeholder, Row, Table, PLACEHOLDER};
use super::time_entries::TimeEntryForm;
use super::SubmitOutcome;
use crate::client::{ApiClient, ClientResult, Transport};
use crate::models::{
    Customer, CustomerSummary, Id, ListQuery, NewTimeEntry, Project, ProjectSummary, ReportRange,
    TimeEntry, TimeEntryQuery,
};

/// Row limit for the selector and join lists
pub const DETAIL_LIMIT: u32 = 10_000;

/// Entries shown in the recent table
pub const RECENT_LIMIT: u32 = 10;

/// Summary rows shown in the overview
pub const OVERVIEW_LEN: usize = 5;

pub const SUCCESS_MESSAGE: &str = "Task logged successfully";

const RECENT_COLUMNS: &[&str] = &["Date", "Customer", "Project", "H", "B", "Description"];
const PROJECT_COLUMNS: &[&str] = &["Project", "Customer", "Hours"];
const CUSTOMER_COLUMNS: &[&str] = &["Customer", "Hours"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryTab {
    #[default]
    Project,
    Customer,
}

impl SummaryTab {
    pub fn label(self) -> &'static str {
        match self {
            SummaryTab::Project => "By Project",
            SummaryTab::Customer => "By Customer",
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            SummaryTab::Project => "No data yet. Create a project and log time.",
            SummaryTab::Customer => "No data yet.",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Summaries {
    pub by_project: Vec<ProjectSummary>,
    pub by_customer: Vec<CustomerSummary>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardDetails {
    pub projects: Lookup<Project>,
    pub customers: Lookup<Customer>,
    pub recent: Vec<TimeEntry>,
}

/// One line of the overview list
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub key: Id,
    pub title: String,
    /// Customer name above a project; absent on the customer tab
    pub subtitle: Option<String>,
    pub hours: f64,
}

#[derive(Debug, Clone)]
pub struct DashboardView {
    summaries: ViewState<Summaries>,
    details: ViewState<DashboardDetails>,
    quick_add_error: Option<String>,
    success: Option<String>,
    pub form: TimeEntryForm,
    pub tab: SummaryTab,
    pub range: ReportRange,
}

impl DashboardView {
    /// A dashboard whose quick-add date starts at `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            summaries: ViewState::default(),
            details: ViewState::default(),
            quick_add_error: None,
            success: None,
            form: TimeEntryForm::with_date(today),
            tab: SummaryTab::default(),
            range: ReportRange::default(),
        }
    }

    pub fn summaries(&self) -> &Summaries {
        self.summaries.data()
    }

    pub fn details(&self) -> &DashboardDetails {
        self.details.data()
    }

    /// Summary phase failure
    pub fn error(&self) -> Option<&str> {
        self.summaries.error()
    }

    /// Quick-add failure, else detail phase failure
    pub fn form_error(&self) -> Option<&str> {
        self.quick_add_error.as_deref().or(self.details.error())
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.details.is_submitting()
    }

    pub fn project_options(&self) -> &[Project] {
        self.details().projects.items()
    }

    pub async fn fetch_summaries<T: Transport>(
        client: &ApiClient<T>,
        range: &ReportRange,
    ) -> ClientResult<Summaries> {
        let (by_project, by_customer) =
            try_join(client.report_by_project(range), client.report_by_customer(range)).await?;
        Ok(Summaries {
            by_project,
            by_customer,
        })
    }

    pub async fn fetch_details<T: Transport>(client: &ApiClient<T>) -> ClientResult<DashboardDetails> {
        let (projects, customers, recent) = try_join3(
            client.list_projects(&ListQuery::limit(DETAIL_LIMIT)),
            client.list_customers(&ListQuery::limit(DETAIL_LIMIT)),
            client.list_time_entries(&TimeEntryQuery::limit(RECENT_LIMIT)),
        )
        .await?;

        Ok(DashboardDetails {
            projects: Lookup::new(projects),
            customers: Lookup::new(customers),
            recent,
        })
    }

    pub fn begin_summaries(&mut self) -> LoadTicket {
        self.summaries.begin_load()
    }

    pub fn finish_summaries(&mut self, ticket: LoadTicket, result: ClientResult<Summaries>) -> LoadOutcome {
        self.summaries.finish_load(ticket, result)
    }

    pub fn begin_details(&mut self) -> LoadTicket {
        self.details.begin_load()
    }

    pub fn finish_details(
        &mut self,
        ticket: LoadTicket,
        result: ClientResult<DashboardDetails>,
    ) -> LoadOutcome {
        self.details.finish_load(ticket, result)
    }

    pub fn can_quick_add(&self) -> bool {
        !self.is_submitting() && self.form.payload().is_some()
    }

    /// Hand out the payload if the form is complete, clearing the form
    /// messages. An incomplete form leaves them as they were.
    pub fn begin_quick_add(&mut self) -> Option<NewTimeEntry> {
        if self.is_submitting() {
            return None;
        }
        let payload = self.form.payload()?;
        self.quick_add_error = None;
        self.details.clear_error();
        self.success = None;
        self.details.set_submitting(true);
        Some(payload)
    }

    /// Apply the write result. Returns `true` when both phases should reload.
    pub fn finish_quick_add(&mut self, result: ClientResult<()>) -> bool {
        self.details.set_submitting(false);
        match result {
            Ok(()) => {
                self.form.clear_keeping_date();
                self.success = Some(SUCCESS_MESSAGE.to_string());
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "quick add failed");
                self.quick_add_error = Some(e.to_string());
                false
            }
        }
    }

    /// First rows of the selected tab, in backend order
    pub fn overview(&self) -> Vec<SummaryRow> {
        let summaries = self.summaries();
        match self.tab {
            SummaryTab::Project => summaries
                .by_project
                .iter()
                .take(OVERVIEW_LEN)
                .map(|s| SummaryRow {
                    key: s.project_id,
                    title: s.project_name.clone(),
                    subtitle: Some(s.customer_name.clone()),
                    hours: s.hours,
                })
                .collect(),
            SummaryTab::Customer => summaries
                .by_customer
                .iter()
                .take(OVERVIEW_LEN)
                .map(|s| SummaryRow {
                    key: s.customer_id,
                    title: s.customer_name.clone(),
                    subtitle: None,
                    hours: s.hours,
                })
                .collect(),
        }
    }

    /// Message for an empty overview, `None` when there are rows
    pub fn overview_empty_message(&self) -> Option<&'static str> {
        let summaries = self.summaries();
        let empty = match self.tab {
            SummaryTab::Project => summaries.by_project.is_empty(),
            SummaryTab::Customer => summaries.by_customer.is_empty(),
        };
        empty.then(|| self.tab.empty_message())
    }

    /// The overview as a table, for text front ends
    pub fn overview_table(&self) -> Table {
        let (columns, rows) = match self.tab {
            SummaryTab::Project => (
                PROJECT_COLUMNS,
                self.overview()
                    .into_iter()
                    .map(|r| Row {
                        key: r.key,
                        cells: vec![r.title, or_placeholder(r.subtitle.as_deref()), format_hours(r.hours)],
                    })
                    .collect(),
            ),
            SummaryTab::Customer => (
                CUSTOMER_COLUMNS,
                self.overview()
                    .into_iter()
                    .map(|r| Row {
                        key: r.key,
                        cells: vec![r.title, format_hours(r.hours)],
                    })
                    .collect(),
            ),
        };
        Table::new(columns, rows, self.tab.empty_message())
    }

    /// Recent entries joined to their project and, through it, the customer
    pub fn recent_table(&self) -> Table {
        let details = self.details();
        let rows = details
            .recent
            .iter()
            .map(|e| {
                let project = details.projects.get(e.project_id);
                let customer = project
                    .and_then(|p| details.customers.name_of(p.customer_id))
                    .unwrap_or(PLACEHOLDER)
                    .to_string();

                Row {
                    key: e.id,
                    cells: vec![
                        format_date(e.work_date),
                        customer,
                        details.projects.name_or_id(e.project_id),
                        format_hours(e.hours),
                        if e.billable { "Y" } else { "N" }.to_string(),
                        or_placeholder(e.description.as_deref()),
                    ],
                }
            })
            .collect();

        Table::new(RECENT_COLUMNS, rows, "No recent entries.")
    }
}

/// Run both load phases concurrently
pub async fn refresh<T: Transport>(
    view: &mut DashboardView,
    client: &ApiClient<T>,
) -> (LoadOutcome, LoadOutcome) {
    let summaries_ticket = view.begin_summaries();
    let details_ticket = view.begin_details();
    let range = view.range;

    let (summaries, details) = join(
        DashboardView::fetch_summaries(client, &range),
        DashboardView::fetch_details(client),
    )
    .await;

    (
        view.finish_summaries(summaries_ticket, summaries),
        view.finish_details(details_ticket, details),
    )
}

/// Log the quick-add form, then refresh both phases on success
pub async fn quick_add<T: Transport>(view: &mut DashboardView, client: &ApiClient<T>) -> SubmitOutcome {
    let Some(payload) = view.begin_quick_add() else {
        return SubmitOutcome::Invalid;
    };

    let result = client.create_time_entry(&payload).await.map(|_| ());
    if view.finish_quick_add(result) {
        refresh(view, client).await;
        SubmitOutcome::Created
    } else {
        SubmitOutcome::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::MockTransport;
    use crate::client::{ClientError, Method};
    use crate::views::TableBody;
    use serde_json::json;

    const BY_PROJECT: &str = "/reports/by-project";
    const BY_CUSTOMER: &str = "/reports/by-customer";
    const PROJECTS: &str = "/projects?limit=10000";
    const CUSTOMERS: &str = "/customers?limit=10000";
    const RECENT: &str = "/time-entries?limit=10";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn project_summary(id: i64, hours: f64) -> serde_json::Value {
        json!({
            "project_id": id,
            "project_name": format!("P{id}"),
            "customer_id": 1,
            "customer_name": "Acme",
            "hours": hours
        })
    }

    fn backend() -> MockTransport {
        MockTransport::new()
            .respond(
                BY_PROJECT,
                json!((1..=7).map(|i| project_summary(i, 10.0 - i as f64)).collect::<Vec<_>>()),
            )
            .respond(
                BY_CUSTOMER,
                json!([{"customer_id": 1, "customer_name": "Acme", "hours": 42.0}]),
            )
            .respond(
                PROJECTS,
                json!([
                    {"id": 1, "name": "P1", "customer_id": 1, "active": true},
                    {"id": 2, "name": "P2", "customer_id": 77, "active": true}
                ]),
            )
            .respond(
                CUSTOMERS,
                json!([{"id": 1, "name": "Acme", "active": true, "created_at": "2026-01-01T00:00:00"}]),
            )
            .respond(
                RECENT,
                json!([
                    {"id": 10, "project_id": 1, "work_date": "2026-10-17", "hours": 2.5,
                     "description": "Kickoff", "billable": true},
                    {"id": 11, "project_id": 2, "work_date": "2026-10-16", "hours": 1.0,
                     "description": null, "billable": false},
                    {"id": 12, "project_id": 99, "work_date": "2026-10-15", "hours": 0.5,
                     "description": "", "billable": true}
                ]),
            )
    }

    #[tokio::test]
    async fn test_overview_shows_top_five_in_backend_order() {
        let mock = backend();
        let mut view = DashboardView::new(today());
        refresh(&mut view, &ApiClient::new(&mock)).await;

        let rows = view.overview();
        let titles: Vec<_> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["P1", "P2", "P3", "P4", "P5"]);
        assert_eq!(rows[0].subtitle.as_deref(), Some("Acme"));
        assert_eq!(view.overview_empty_message(), None);

        view.tab = SummaryTab::Customer;
        let rows = view.overview();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].subtitle, None);
        assert_eq!(view.overview_table().rows()[0].cells, ["Acme", "42.00"]);
    }

    #[tokio::test]
    async fn test_recent_table_join_misses() {
        let mock = backend();
        let mut view = DashboardView::new(today());
        refresh(&mut view, &ApiClient::new(&mock)).await;

        let table = view.recent_table();
        assert_eq!(
            table.rows()[0].cells,
            ["2026-10-17", "Acme", "P1", "2.50", "Y", "Kickoff"]
        );
        // project known, customer unknown
        assert_eq!(table.rows()[1].cells, ["2026-10-16", "—", "P2", "1.00", "N", "—"]);
        // project unknown
        assert_eq!(table.rows()[2].cells, ["2026-10-15", "—", "99", "0.50", "Y", "—"]);
    }

    #[tokio::test]
    async fn test_phase_errors_are_routed_separately() {
        let mock = backend();
        mock.replace(BY_CUSTOMER, Err(ClientError::Network("reports down".to_string())));
        let mut view = DashboardView::new(today());

        let (summaries, details) = refresh(&mut view, &ApiClient::new(&mock)).await;
        assert_eq!(summaries, LoadOutcome::Failed);
        assert_eq!(details, LoadOutcome::Applied);
        assert_eq!(view.error(), Some("Network error: reports down"));
        assert_eq!(view.form_error(), None);

        let mock = backend();
        mock.replace(RECENT, Err(ClientError::request_failed(500, String::new(), "Internal Server Error")));
        let mut view = DashboardView::new(today());
        refresh(&mut view, &ApiClient::new(&mock)).await;
        assert_eq!(view.error(), None);
        assert_eq!(view.form_error(), Some("Internal Server Error"));
        assert_eq!(view.overview().len(), 5);
    }

    #[tokio::test]
    async fn test_quick_add_keeps_date_and_refreshes() {
        let mock = backend().respond(
            "/time-entries",
            json!({"id": 13, "project_id": 1, "work_date": "2026-10-17", "hours": 2.5,
                   "description": null, "billable": true}),
        );
        let client = ApiClient::new(&mock);
        let mut view = DashboardView::new(today());
        assert_eq!(view.form.work_date, "2026-10-17");
        assert!(!view.can_quick_add());

        view.form.project_id = Some(1);
        view.form.hours = "2.5".to_string();
        view.form.billable = false;
        assert!(view.can_quick_add());

        assert_eq!(quick_add(&mut view, &client).await, SubmitOutcome::Created);
        assert_eq!(
            mock.writes()[0].body,
            Some(json!({"project_id": 1, "work_date": "2026-10-17", "hours": 2.5, "billable": false}))
        );
        assert_eq!(view.success(), Some(SUCCESS_MESSAGE));
        assert_eq!(view.form, TimeEntryForm::with_date(today()));
        assert_eq!(mock.count(Method::Get, BY_PROJECT), 1);
        assert_eq!(mock.count(Method::Get, RECENT), 1);
    }

    #[tokio::test]
    async fn test_failed_quick_add_keeps_input() {
        let mock = backend().fail(
            "/time-entries",
            ClientError::request_failed(422, "invalid hours".to_string(), "Unprocessable Entity"),
        );
        let client = ApiClient::new(&mock);
        let mut view = DashboardView::new(today());
        view.form.project_id = Some(1);
        view.form.hours = "3".to_string();

        assert_eq!(quick_add(&mut view, &client).await, SubmitOutcome::Failed);
        assert_eq!(view.form_error(), Some("invalid hours"));
        assert_eq!(view.success(), None);
        assert_eq!(view.form.hours, "3");
        assert!(!view.is_submitting());
        assert_eq!(mock.count(Method::Get, BY_PROJECT), 0);
    }

    #[tokio::test]
    async fn test_second_quick_add_blocked_while_in_flight() {
        let mock = backend();
        let client = ApiClient::new(&mock);
        let mut view = DashboardView::new(today());
        view.form.project_id = Some(1);
        view.form.hours = "1".to_string();

        assert!(view.begin_quick_add().is_some());
        assert!(view.is_submitting());
        assert!(!view.can_quick_add());
        assert_eq!(view.begin_quick_add(), None);
        assert_eq!(quick_add(&mut view, &client).await, SubmitOutcome::Invalid);
        assert!(mock.writes().is_empty());

        let failed = Err(ClientError::Network("offline".to_string()));
        assert!(!view.finish_quick_add(failed));
        assert!(!view.is_submitting());
        assert!(view.begin_quick_add().is_some());
    }

    #[tokio::test]
    async fn test_late_detail_load_keeps_quick_add_error() {
        let mock = backend();
        let client = ApiClient::new(&mock);
        let mut view = DashboardView::new(today());

        // initial detail load still in flight when the quick-add fails
        let ticket = view.begin_details();
        view.form.project_id = Some(1);
        view.form.hours = "1".to_string();
        assert!(view.begin_quick_add().is_some());
        view.finish_quick_add(Err(ClientError::request_failed(
            400,
            "Project does not exist".to_string(),
            "Bad Request",
        )));

        let details = DashboardView::fetch_details(&client).await;
        assert_eq!(view.finish_details(ticket, details), LoadOutcome::Applied);
        assert_eq!(view.form_error(), Some("Project does not exist"));
        assert_eq!(view.recent_table().rows().len(), 3);
    }

    #[tokio::test]
    async fn test_incomplete_quick_add_keeps_messages() {
        let mock = backend();
        mock.replace(RECENT, Err(ClientError::Network("down".to_string())));
        let mut view = DashboardView::new(today());
        refresh(&mut view, &ApiClient::new(&mock)).await;
        assert_eq!(view.form_error(), Some("Network error: down"));

        assert_eq!(view.begin_quick_add(), None);
        assert_eq!(view.form_error(), Some("Network error: down"));
    }

    #[test]
    fn test_empty_overview_messages() {
        let mut view = DashboardView::new(today());
        assert_eq!(
            view.overview_empty_message(),
            Some("No data yet. Create a project and log time.")
        );
        view.tab = SummaryTab::Customer;
        assert_eq!(view.overview_empty_message(), Some("No data yet."));

        let recent = view.recent_table();
        assert_eq!(recent.body, TableBody::Empty("No recent entries."));
        assert_eq!(recent.colspan(), 6);
    }

    #[tokio::test]
    async fn test_report_range_reaches_both_endpoints() {
        let mock = MockTransport::new()
            .respond("/reports/by-project?from=2026-10-01&to=2026-10-31", json!([]))
            .respond("/reports/by-customer?from=2026-10-01&to=2026-10-31", json!([]));
        let range = ReportRange {
            from: NaiveDate::from_ymd_opt(2026, 10, 1),
            to: NaiveDate::from_ymd_opt(2026, 10, 31),
        };

        let summaries = DashboardView::fetch_summaries(&ApiClient::new(&mock), &range)
            .await
            .unwrap();
        assert!(summaries.by_project.is_empty());
        assert_eq!(mock.requests().len(), 2);
    }
}
