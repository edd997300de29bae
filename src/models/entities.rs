//! Entity types as returned by the time-tracking backend
//!
//! The client never owns these records; every list is a read-only copy of
//! what the backend returned on the last load.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Backend-assigned identifier shared by all entities
pub type Id = i64;

fn default_true() -> bool {
    true
}

/// Something that can be looked up by id and shown by name
pub trait Named {
    fn id(&self) -> Id;
    fn name(&self) -> &str;
}

/// Top-level billing entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
}

/// Named subdivision of a customer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Department {
    pub id: Id,
    pub name: String,
    pub customer_id: Id,
}

/// Unit of work under a customer, optionally inside one of its departments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: Id,
    pub name: String,
    pub customer_id: Id,
    #[serde(default)]
    pub department_id: Option<Id>,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// A single logged unit of work against a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeEntry {
    pub id: Id,
    pub project_id: Id,
    pub work_date: NaiveDate,
    pub hours: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub billable: bool,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Backend aggregate: total hours per project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectSummary {
    pub project_id: Id,
    pub project_name: String,
    pub customer_id: Id,
    pub customer_name: String,
    pub hours: f64,
}

/// Backend aggregate: total hours per customer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerSummary {
    pub customer_id: Id,
    pub customer_name: String,
    pub hours: f64,
}

impl Named for Customer {
    fn id(&self) -> Id {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Department {
    fn id(&self) -> Id {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Project {
    fn id(&self) -> Id {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_from_backend_json() {
        let json = r#"{
            "id": 4,
            "name": "Acme",
            "contact_email": null,
            "notes": null,
            "active": true,
            "created_at": "2026-10-17T09:15:02.481516"
        }"#;

        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.id, 4);
        assert_eq!(customer.contact_email, None);
        assert!(customer.active);
        assert_eq!(
            customer.created_at.date(),
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
        );
    }

    #[test]
    fn test_project_missing_optional_fields() {
        let project: Project =
            serde_json::from_str(r#"{"id": 1, "name": "Website", "customer_id": 2}"#).unwrap();

        assert_eq!(project.department_id, None);
        assert!(project.active);
    }

    #[test]
    fn test_time_entry_accepts_offset_timestamps() {
        let json = r#"{
            "id": 9,
            "project_id": 3,
            "work_date": "2026-10-16",
            "hours": 2.5,
            "billable": false,
            "created_at": "2026-10-16T18:00:00+02:00",
            "updated_at": "2026-10-16T16:00:00"
        }"#;

        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.hours, 2.5);
        assert!(!entry.billable);
        assert_eq!(entry.description, None);
        assert_eq!(entry.created_at, entry.updated_at);
    }
}
