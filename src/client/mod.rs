//! Backend API client
//!
//! The only point of contact with the time-tracking backend.
//!
//! ## Layers
//!
//! - [`Transport`]: sends one JSON request and returns the parsed body. The
//!   native build ships [`HttpTransport`] (reqwest); the web dashboard plugs
//!   in its own fetch-based transport.
//! - [`ApiClient`]: typed operations over a transport. Owns the resource
//!   paths, query strings and response decoding. Besides list and create,
//!   records can be updated and deleted by id.
//!
//! Futures are `?Send`: everything runs on one cooperative event loop.

mod error;
#[cfg(feature = "native")]
mod http;
#[cfg(test)]
pub(crate) mod testing;

pub use error::{ClientError, ClientResult};
#[cfg(feature = "native")]
pub use http::HttpTransport;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::models::{
    Customer, CustomerSummary, CustomerUpdate, Department, DepartmentUpdate, Id, ListQuery,
    NewCustomer, NewDepartment, NewProject, NewTimeEntry, Project, ProjectSummary, ProjectUpdate,
    ReportRange, TimeEntry, TimeEntryQuery, TimeEntryUpdate,
};

/// Default backend origin for local development
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// HTTP methods used by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Put => write!(f, "PUT"),
            Method::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single request against the backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Resource path including any query string, relative to the base URL
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }

    /// Whether the request changes backend state
    pub fn is_write(&self) -> bool {
        self.method != Method::Get
    }
}

/// Sends requests to the backend.
///
/// Implementations attach `Content-Type: application/json`, resolve the path
/// against their base URL and map a non-success status to
/// [`ClientError::RequestFailed`]. An empty success body is `Value::Null`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> ClientResult<Value>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: ApiRequest) -> ClientResult<Value> {
        (**self).send(request).await
    }
}

/// Strip trailing slashes so paths can be appended directly
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Typed backend operations
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn get<R: DeserializeOwned>(&self, path: String) -> ClientResult<R> {
        let body = self.transport.send(ApiRequest::get(path)).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
    ) -> ClientResult<R> {
        let body = serde_json::to_value(payload)?;
        let response = self.transport.send(ApiRequest::post(path, body)).await?;
        Ok(serde_json::from_value(response)?)
    }

    async fn put<B: Serialize, R: DeserializeOwned>(&self, path: String, payload: &B) -> ClientResult<R> {
        let body = serde_json::to_value(payload)?;
        let response = self.transport.send(ApiRequest::put(path, body)).await?;
        Ok(serde_json::from_value(response)?)
    }

    /// The backend answers 204; any body is ignored
    async fn delete(&self, path: String) -> ClientResult<()> {
        self.transport.send(ApiRequest::delete(path)).await?;
        Ok(())
    }

    pub async fn list_customers(&self, query: &ListQuery) -> ClientResult<Vec<Customer>> {
        self.get(format!("/customers{}", query.to_query_string()))
            .await
    }

    pub async fn create_customer(&self, payload: &NewCustomer) -> ClientResult<Customer> {
        self.post("/customers", payload).await
    }

    pub async fn get_customer(&self, id: Id) -> ClientResult<Customer> {
        self.get(format!("/customers/{}", id)).await
    }

    pub async fn update_customer(&self, id: Id, update: &CustomerUpdate) -> ClientResult<Customer> {
        self.put(format!("/customers/{}", id), update).await
    }

    pub async fn delete_customer(&self, id: Id) -> ClientResult<()> {
        self.delete(format!("/customers/{}", id)).await
    }

    pub async fn list_departments(&self, query: &ListQuery) -> ClientResult<Vec<Department>> {
        self.get(format!("/departments{}", query.to_query_string()))
            .await
    }

    pub async fn create_department(&self, payload: &NewDepartment) -> ClientResult<Department> {
        self.post("/departments", payload).await
    }

    pub async fn update_department(
        &self,
        id: Id,
        update: &DepartmentUpdate,
    ) -> ClientResult<Department> {
        self.put(format!("/departments/{}", id), update).await
    }

    pub async fn delete_department(&self, id: Id) -> ClientResult<()> {
        self.delete(format!("/departments/{}", id)).await
    }

    pub async fn list_projects(&self, query: &ListQuery) -> ClientResult<Vec<Project>> {
        self.get(format!("/projects{}", query.to_query_string()))
            .await
    }

    pub async fn create_project(&self, payload: &NewProject) -> ClientResult<Project> {
        self.post("/projects", payload).await
    }

    pub async fn update_project(&self, id: Id, update: &ProjectUpdate) -> ClientResult<Project> {
        self.put(format!("/projects/{}", id), update).await
    }

    pub async fn delete_project(&self, id: Id) -> ClientResult<()> {
        self.delete(format!("/projects/{}", id)).await
    }

    pub async fn list_time_entries(&self, query: &TimeEntryQuery) -> ClientResult<Vec<TimeEntry>> {
        self.get(format!("/time-entries{}", query.to_query_string()))
            .await
    }

    pub async fn create_time_entry(&self, payload: &NewTimeEntry) -> ClientResult<TimeEntry> {
        self.post("/time-entries", payload).await
    }

    pub async fn update_time_entry(&self, id: Id, update: &TimeEntryUpdate) -> ClientResult<TimeEntry> {
        self.put(format!("/time-entries/{}", id), update).await
    }

    pub async fn delete_time_entry(&self, id: Id) -> ClientResult<()> {
        self.delete(format!("/time-entries/{}", id)).await
    }

    pub async fn report_by_project(&self, range: &ReportRange) -> ClientResult<Vec<ProjectSummary>> {
        self.get(format!("/reports/by-project{}", range.to_query_string()))
            .await
    }

    pub async fn report_by_customer(
        &self,
        range: &ReportRange,
    ) -> ClientResult<Vec<CustomerSummary>> {
        self.get(format!("/reports/by-customer{}", range.to_query_string()))
            .await
    }
}
