//! Projects page
//!
//! The department selector depends on the selected customer: changing the
//! customer always clears the department, and only that customer's
//! departments are offered.

use async_trait::async_trait;
use futures_util::future::try_join3;
use serde::Serialize;

use super::form::required_text;
use super::lookup::Lookup;
use super::table::{yes_no, Row, Table, PLACEHOLDER};
use super::{EntityView, ViewState, LIST_LIMIT};
use crate::client::{ApiClient, ClientResult, Transport};
use crate::models::{Customer, Department, Id, ListQuery, NewProject, Project};

const COLUMNS: &[&str] = &["Name", "Customer", "Department", "Active"];

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectsData {
    pub projects: Vec<Project>,
    /// Active customers only
    pub customers: Lookup<Customer>,
    pub departments: Lookup<Department>,
}

impl ProjectsData {
    /// Departments belonging to `customer_id`; none when no customer is chosen
    pub fn departments_of(&self, customer_id: Option<Id>) -> Vec<&Department> {
        match customer_id {
            Some(id) => self
                .departments
                .iter()
                .filter(|d| d.customer_id == id)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    pub name: String,
    customer_id: Option<Id>,
    department_id: Option<Id>,
    pub active: bool,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            customer_id: None,
            department_id: None,
            active: true,
        }
    }
}

impl ProjectForm {
    pub fn customer_id(&self) -> Option<Id> {
        self.customer_id
    }

    pub fn department_id(&self) -> Option<Id> {
        self.department_id
    }

    /// Change the customer; any department choice is dropped
    pub fn select_customer(&mut self, customer_id: Option<Id>) {
        self.customer_id = customer_id;
        self.department_id = None;
    }

    pub fn payload(&self) -> Option<NewProject> {
        Some(NewProject {
            name: required_text(&self.name)?,
            customer_id: self.customer_id?,
            department_id: self.department_id,
            active: self.active,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectsView {
    state: ViewState<ProjectsData>,
    pub form: ProjectForm,
}

impl ProjectsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer_options(&self) -> &[Customer] {
        self.data().customers.items()
    }

    /// Departments offered for the currently selected customer
    pub fn department_options(&self) -> Vec<&Department> {
        self.data().departments_of(self.form.customer_id)
    }

    pub fn select_customer(&mut self, customer_id: Option<Id>) {
        self.form.select_customer(customer_id);
    }

    /// Select a department. Rejected unless it is among the current options.
    pub fn select_department(&mut self, department_id: Option<Id>) -> bool {
        match department_id {
            None => {
                self.form.department_id = None;
                true
            }
            Some(id) if self.department_options().iter().any(|d| d.id == id) => {
                self.form.department_id = Some(id);
                true
            }
            Some(_) => false,
        }
    }
}

#[async_trait(?Send)]
impl EntityView for ProjectsView {
    type Data = ProjectsData;
    type Payload = NewProject;

    async fn fetch<T: Transport>(client: &ApiClient<T>) -> ClientResult<ProjectsData> {
        let (projects, customers, departments) = try_join3(
            client.list_projects(&ListQuery::limit(LIST_LIMIT)),
            client.list_customers(&ListQuery::limit(LIST_LIMIT).active_only()),
            client.list_departments(&ListQuery::limit(LIST_LIMIT)),
        )
        .await?;

        Ok(ProjectsData {
            projects,
            customers: Lookup::new(customers),
            departments: Lookup::new(departments),
        })
    }

    async fn submit<T: Transport>(client: &ApiClient<T>, payload: &NewProject) -> ClientResult<()> {
        client.create_project(payload).await.map(|_| ())
    }

    fn state(&self) -> &ViewState<ProjectsData> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ViewState<ProjectsData> {
        &mut self.state
    }

    fn payload(&self) -> Option<NewProject> {
        self.form.payload()
    }

    fn reset_form(&mut self) {
        self.form = ProjectForm::default();
    }

    fn table(&self) -> Table {
        let data = self.data();
        let rows = data
            .projects
            .iter()
            .map(|p| Row {
                key: p.id,
                cells: vec![
                    p.name.clone(),
                    data.customers.name_or_id(p.customer_id),
                    match p.department_id {
                        Some(id) => data.departments.name_or_id(id),
                        None => PLACEHOLDER.to_string(),
                    },
                    yes_no(p.active),
                ],
            })
            .collect();

        Table::new(COLUMNS, rows, "No projects yet.")
    }
}
