//! Departments page

use async_trait::async_trait;
use futures_util::future::try_join;
use serde::Serialize;

use super::form::required_text;
use super::lookup::Lookup;
use super::table::{Row, Table};
use super::{EntityView, ViewState, LIST_LIMIT};
use crate::client::{ApiClient, ClientResult, Transport};
use crate::models::{Customer, Department, Id, ListQuery, NewDepartment};

const COLUMNS: &[&str] = &["Name", "Customer"];

#[derive(Debug, Clone, Default, Serialize)]
pub struct DepartmentsData {
    pub departments: Vec<Department>,
    /// Active customers, for the selector and the customer column
    pub customers: Lookup<Customer>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentForm {
    pub name: String,
    pub customer_id: Option<Id>,
}

impl DepartmentForm {
    pub fn payload(&self) -> Option<NewDepartment> {
        Some(NewDepartment {
            name: required_text(&self.name)?,
            customer_id: self.customer_id?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct DepartmentsView {
    state: ViewState<DepartmentsData>,
    pub form: DepartmentForm,
}

impl DepartmentsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer_options(&self) -> &[Customer] {
        self.data().customers.items()
    }
}

#[async_trait(?Send)]
impl EntityView for DepartmentsView {
    type Data = DepartmentsData;
    type Payload = NewDepartment;

    async fn fetch<T: Transport>(client: &ApiClient<T>) -> ClientResult<DepartmentsData> {
        let (departments, customers) = try_join(
            client.list_departments(&ListQuery::limit(LIST_LIMIT)),
            client.list_customers(&ListQuery::limit(LIST_LIMIT).active_only()),
        )
        .await?;

        Ok(DepartmentsData {
            departments,
            customers: Lookup::new(customers),
        })
    }

    async fn submit<T: Transport>(
        client: &ApiClient<T>,
        payload: &NewDepartment,
    ) -> ClientResult<()> {
        client.create_department(payload).await.map(|_| ())
    }

    fn state(&self) -> &ViewState<DepartmentsData> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ViewState<DepartmentsData> {
        &mut self.state
    }

    fn payload(&self) -> Option<NewDepartment> {
        self.form.payload()
    }

    fn reset_form(&mut self) {
        self.form = DepartmentForm::default();
    }

    fn table(&self) -> Table {
        let data = self.data();
        let rows = data
            .departments
            .iter()
            .map(|d| Row {
                key: d.id,
                cells: vec![d.name.clone(), data.customers.name_or_id(d.customer_id)],
            })
            .collect();

        Table::new(COLUMNS, rows, "No departments yet.")
    }
}
