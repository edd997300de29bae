//! Customers page

use async_trait::async_trait;
use serde::Serialize;

use super::form::{optional_text, required_text};
use super::table::{or_placeholder, yes_no, Row, Table};
use super::{EntityView, ViewState, LIST_LIMIT};
use crate::client::{ApiClient, ClientResult, Transport};
use crate::models::{Customer, ListQuery, NewCustomer};

const COLUMNS: &[&str] = &["Name", "Email", "Active", "Created"];

#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomersData {
    pub customers: Vec<Customer>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub notes: String,
    pub active: bool,
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            notes: String::new(),
            active: true,
        }
    }
}

impl CustomerForm {
    pub fn payload(&self) -> Option<NewCustomer> {
        Some(NewCustomer {
            name: required_text(&self.name)?,
            contact_email: optional_text(&self.email),
            notes: optional_text(&self.notes),
            active: self.active,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CustomersView {
    state: ViewState<CustomersData>,
    pub form: CustomerForm,
}

impl CustomersView {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl EntityView for CustomersView {
    type Data = CustomersData;
    type Payload = NewCustomer;

    async fn fetch<T: Transport>(client: &ApiClient<T>) -> ClientResult<CustomersData> {
        let customers = client.list_customers(&ListQuery::limit(LIST_LIMIT)).await?;
        Ok(CustomersData { customers })
    }

    async fn submit<T: Transport>(client: &ApiClient<T>, payload: &NewCustomer) -> ClientResult<()> {
        client.create_customer(payload).await.map(|_| ())
    }

    fn state(&self) -> &ViewState<CustomersData> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ViewState<CustomersData> {
        &mut self.state
    }

    fn payload(&self) -> Option<NewCustomer> {
        self.form.payload()
    }

    fn reset_form(&mut self) {
        self.form = CustomerForm::default();
    }

    fn table(&self) -> Table {
        let rows = self
            .data()
            .customers
            .iter()
            .map(|c| Row {
                key: c.id,
                cells: vec![
                    c.name.clone(),
                    or_placeholder(c.contact_email.as_deref()),
                    yes_no(c.active),
                    c.created_at.format("%Y-%m-%d").to_string(),
                ],
            })
            .collect();

        Table::new(COLUMNS, rows, "No customers yet.")
    }
}
