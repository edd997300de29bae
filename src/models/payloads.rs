//! Create and update payloads sent to the backend
//!
//! Optional fields are `None` when absent and are left out of the JSON body
//! entirely; the backend applies its own defaults.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entities::Id;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewDepartment {
    pub name: String,
    pub customer_id: Id,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub customer_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<Id>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTimeEntry {
    pub project_id: Id,
    pub work_date: NaiveDate,
    pub hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub billable: bool,
}

/// Partial customer update; only the fields that are set are sent
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DepartmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<Id>,
    /// `Some(None)` sends `null`, which detaches the project from its department
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<Option<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TimeEntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
}

impl CustomerUpdate {
    /// Whether the update would change nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl DepartmentUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ProjectUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl TimeEntryUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
