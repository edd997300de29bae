//! Data model consumed from the backend
//!
//! - [`entities`]: records returned by list endpoints and reports
//! - [`payloads`]: bodies for the create and update endpoints
//! - [`query`]: list filters and report ranges

pub mod entities;
pub mod payloads;
pub mod query;
pub mod timestamp;

pub use entities::{
    Customer, CustomerSummary, Department, Id, Named, Project, ProjectSummary, TimeEntry,
};
pub use payloads::{
    CustomerUpdate, DepartmentUpdate, NewCustomer, NewDepartment, NewProject, NewTimeEntry,
    ProjectUpdate, TimeEntryUpdate,
};
pub use query::{ListQuery, ReportRange, TimeEntryQuery};
