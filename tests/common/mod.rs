//! In-memory stand-in for the time-tracking backend
//!
//! Serves the same paths and JSON shapes over real HTTP on an ephemeral
//! port, so the reqwest transport is exercised end to end.

#![allow(dead_code)]

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use timekeeper::models::{
    Customer, CustomerSummary, Department, Id, NewCustomer, NewDepartment, NewProject,
    NewTimeEntry, Project, ProjectSummary, TimeEntry,
};

type Shared = Arc<Mutex<Db>>;
type HandlerResult<T> = Result<T, (StatusCode, Json<Value>)>;

#[derive(Default)]
struct Db {
    customers: Vec<Customer>,
    departments: Vec<Department>,
    projects: Vec<Project>,
    entries: Vec<TimeEntry>,
    next_id: Id,
    failing: bool,
    writes: usize,
}

impl Db {
    fn next_id(&mut self) -> Id {
        self.next_id += 1;
        self.next_id
    }
}

/// Running fake backend
pub struct FakeBackend {
    pub base_url: String,
    db: Shared,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let db = Shared::default();
        let router = Router::new()
            .route("/customers", get(list_customers).post(create_customer))
            .route("/departments", get(list_departments).post(create_department))
            .route("/projects", get(list_projects).post(create_project))
            .route("/time-entries", get(list_entries).post(create_entry))
            .route(
                "/customers/:id",
                get(get_customer).put(update_customer).delete(delete_customer),
            )
            .route("/departments/:id", put(update_department).delete(delete_department))
            .route("/projects/:id", put(update_project).delete(delete_project))
            .route("/time-entries/:id", put(update_entry).delete(delete_entry))
            .route("/reports/by-project", get(report_by_project))
            .route("/reports/by-customer", get(report_by_customer))
            .layer(middleware::from_fn_with_state(db.clone(), fail_switch))
            .with_state(db.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake backend");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("fake backend");
        });

        Self {
            base_url: format!("http://{}", addr),
            db,
        }
    }

    /// While set, every request answers 503 with an empty body
    pub fn set_failing(&self, failing: bool) {
        self.db.lock().unwrap().failing = failing;
    }

    /// Number of successful writes (POST, PUT, DELETE) so far
    pub fn writes(&self) -> usize {
        self.db.lock().unwrap().writes
    }
}

async fn fail_switch(State(db): State<Shared>, request: Request, next: Next) -> Response {
    if db.lock().unwrap().failing {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    next.run(request).await
}

fn bad_request(detail: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "detail": detail })))
}

fn not_found(what: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "detail": format!("{} not found", what) })),
    )
}

trait Record: Clone + Serialize + DeserializeOwned {
    const KIND: &'static str;
    fn key(&self) -> Id;
}

impl Record for Customer {
    const KIND: &'static str = "Customer";
    fn key(&self) -> Id {
        self.id
    }
}

impl Record for Department {
    const KIND: &'static str = "Department";
    fn key(&self) -> Id {
        self.id
    }
}

impl Record for Project {
    const KIND: &'static str = "Project";
    fn key(&self) -> Id {
        self.id
    }
}

impl Record for TimeEntry {
    const KIND: &'static str = "Time entry";
    fn key(&self) -> Id {
        self.id
    }
}

/// Overlay the fields present in `changes` onto the stored record
fn patched<T: Record>(items: &[T], id: Id, changes: Value) -> HandlerResult<(usize, T)> {
    let index = items
        .iter()
        .position(|r| r.key() == id)
        .ok_or_else(|| not_found(T::KIND))?;
    let mut merged = serde_json::to_value(&items[index]).map_err(|e| bad_request(&e.to_string()))?;
    if let (Some(target), Value::Object(fields)) = (merged.as_object_mut(), changes) {
        target.extend(fields);
    }
    let record = serde_json::from_value(merged).map_err(|e| bad_request(&e.to_string()))?;
    Ok((index, record))
}

fn remove<T: Record>(items: &mut Vec<T>, id: Id) -> HandlerResult<StatusCode> {
    let before = items.len();
    items.retain(|r| r.key() != id);
    if items.len() == before {
        return Err(not_found(T::KIND));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
struct ListParams {
    skip: Option<usize>,
    limit: Option<usize>,
    active: Option<bool>,
    search: Option<String>,
}

fn page<T: Clone>(items: impl Iterator<Item = T>, skip: Option<usize>, limit: Option<usize>) -> Vec<T> {
    items.skip(skip.unwrap_or(0)).take(limit.unwrap_or(1000)).collect()
}

async fn list_customers(State(db): State<Shared>, Query(p): Query<ListParams>) -> Json<Vec<Customer>> {
    let db = db.lock().unwrap();
    let matching = db.customers.iter().filter(|c| {
        p.active.map_or(true, |a| c.active == a)
            && p.search.as_deref().map_or(true, |s| c.name.to_lowercase().contains(&s.to_lowercase()))
    });
    Json(page(matching.cloned(), p.skip, p.limit))
}

async fn create_customer(
    State(db): State<Shared>,
    Json(new): Json<NewCustomer>,
) -> HandlerResult<(StatusCode, Json<Customer>)> {
    let mut db = db.lock().unwrap();
    if db.customers.iter().any(|c| c.name == new.name) {
        return Err(bad_request("Customer name already exists"));
    }
    let customer = Customer {
        id: db.next_id(),
        name: new.name,
        contact_email: new.contact_email,
        notes: new.notes,
        active: new.active,
        created_at: Utc::now().naive_utc(),
    };
    db.customers.push(customer.clone());
    db.writes += 1;
    Ok((StatusCode::CREATED, Json(customer)))
}

async fn get_customer(State(db): State<Shared>, Path(id): Path<Id>) -> HandlerResult<Json<Customer>> {
    let db = db.lock().unwrap();
    db.customers
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(Customer::KIND))
}

async fn update_customer(
    State(db): State<Shared>,
    Path(id): Path<Id>,
    Json(changes): Json<Value>,
) -> HandlerResult<Json<Customer>> {
    let mut db = db.lock().unwrap();
    let (index, customer) = patched(&db.customers, id, changes)?;
    if db.customers.iter().any(|c| c.id != id && c.name == customer.name) {
        return Err(bad_request("Customer name already exists"));
    }
    db.customers[index] = customer.clone();
    db.writes += 1;
    Ok(Json(customer))
}

async fn delete_customer(State(db): State<Shared>, Path(id): Path<Id>) -> HandlerResult<StatusCode> {
    let mut db = db.lock().unwrap();
    let status = remove(&mut db.customers, id)?;
    db.writes += 1;
    Ok(status)
}

async fn list_departments(State(db): State<Shared>, Query(p): Query<ListParams>) -> Json<Vec<Department>> {
    let db = db.lock().unwrap();
    Json(page(db.departments.iter().cloned(), p.skip, p.limit))
}

async fn create_department(
    State(db): State<Shared>,
    Json(new): Json<NewDepartment>,
) -> HandlerResult<(StatusCode, Json<Department>)> {
    let mut db = db.lock().unwrap();
    if !db.customers.iter().any(|c| c.id == new.customer_id) {
        return Err(bad_request("Customer not found"));
    }
    let department = Department {
        id: db.next_id(),
        name: new.name,
        customer_id: new.customer_id,
    };
    db.departments.push(department.clone());
    db.writes += 1;
    Ok((StatusCode::CREATED, Json(department)))
}

async fn update_department(
    State(db): State<Shared>,
    Path(id): Path<Id>,
    Json(changes): Json<Value>,
) -> HandlerResult<Json<Department>> {
    let mut db = db.lock().unwrap();
    let (index, department) = patched(&db.departments, id, changes)?;
    db.departments[index] = department.clone();
    db.writes += 1;
    Ok(Json(department))
}

async fn delete_department(State(db): State<Shared>, Path(id): Path<Id>) -> HandlerResult<StatusCode> {
    let mut db = db.lock().unwrap();
    let status = remove(&mut db.departments, id)?;
    db.writes += 1;
    Ok(status)
}

async fn list_projects(State(db): State<Shared>, Query(p): Query<ListParams>) -> Json<Vec<Project>> {
    let db = db.lock().unwrap();
    let matching = db
        .projects
        .iter()
        .filter(|pr| p.active.map_or(true, |a| pr.active == a));
    Json(page(matching.cloned(), p.skip, p.limit))
}

async fn create_project(
    State(db): State<Shared>,
    Json(new): Json<NewProject>,
) -> HandlerResult<(StatusCode, Json<Project>)> {
    let mut db = db.lock().unwrap();
    if let Some(department_id) = new.department_id {
        let belongs = db
            .departments
            .iter()
            .any(|d| d.id == department_id && d.customer_id == new.customer_id);
        if !belongs {
            return Err(bad_request("Department does not belong to customer"));
        }
    }
    let project = Project {
        id: db.next_id(),
        name: new.name,
        customer_id: new.customer_id,
        department_id: new.department_id,
        active: new.active,
    };
    db.projects.push(project.clone());
    db.writes += 1;
    Ok((StatusCode::CREATED, Json(project)))
}

async fn update_project(
    State(db): State<Shared>,
    Path(id): Path<Id>,
    Json(changes): Json<Value>,
) -> HandlerResult<Json<Project>> {
    let mut db = db.lock().unwrap();
    let (index, project) = patched(&db.projects, id, changes)?;
    if let Some(department_id) = project.department_id {
        let belongs = db
            .departments
            .iter()
            .any(|d| d.id == department_id && d.customer_id == project.customer_id);
        if !belongs {
            return Err(bad_request("Department does not belong to customer"));
        }
    }
    db.projects[index] = project.clone();
    db.writes += 1;
    Ok(Json(project))
}

async fn delete_project(State(db): State<Shared>, Path(id): Path<Id>) -> HandlerResult<StatusCode> {
    let mut db = db.lock().unwrap();
    let status = remove(&mut db.projects, id)?;
    db.writes += 1;
    Ok(status)
}

#[derive(Deserialize)]
struct EntryParams {
    project_id: Option<Id>,
    customer_id: Option<Id>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    skip: Option<usize>,
    limit: Option<usize>,
}

fn in_range(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
}

async fn list_entries(State(db): State<Shared>, Query(p): Query<EntryParams>) -> Json<Vec<TimeEntry>> {
    let db = db.lock().unwrap();
    let customer_of: HashMap<Id, Id> = db.projects.iter().map(|pr| (pr.id, pr.customer_id)).collect();

    let mut entries: Vec<TimeEntry> = db
        .entries
        .iter()
        .filter(|e| {
            p.project_id.map_or(true, |id| e.project_id == id)
                && p.customer_id.map_or(true, |id| customer_of.get(&e.project_id) == Some(&id))
                && in_range(e.work_date, p.from, p.to)
        })
        .cloned()
        .collect();
    entries.sort_by(|a, b| b.work_date.cmp(&a.work_date).then(b.id.cmp(&a.id)));

    Json(page(entries.into_iter(), p.skip, p.limit))
}

async fn create_entry(
    State(db): State<Shared>,
    Json(new): Json<NewTimeEntry>,
) -> HandlerResult<(StatusCode, Json<TimeEntry>)> {
    let mut db = db.lock().unwrap();
    if !db.projects.iter().any(|p| p.id == new.project_id) {
        return Err(bad_request("Project not found"));
    }
    if new.hours <= 0.0 {
        return Err(bad_request("Hours must be positive"));
    }
    let now = Utc::now().naive_utc();
    let entry = TimeEntry {
        id: db.next_id(),
        project_id: new.project_id,
        work_date: new.work_date,
        hours: new.hours,
        description: new.description,
        billable: new.billable,
        created_at: Some(now),
        updated_at: Some(now),
    };
    db.entries.push(entry.clone());
    db.writes += 1;
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn update_entry(
    State(db): State<Shared>,
    Path(id): Path<Id>,
    Json(changes): Json<Value>,
) -> HandlerResult<Json<TimeEntry>> {
    let mut db = db.lock().unwrap();
    let (index, mut entry) = patched(&db.entries, id, changes)?;
    if !db.projects.iter().any(|p| p.id == entry.project_id) {
        return Err(bad_request("Project does not exist"));
    }
    entry.updated_at = Some(Utc::now().naive_utc());
    db.entries[index] = entry.clone();
    db.writes += 1;
    Ok(Json(entry))
}

async fn delete_entry(State(db): State<Shared>, Path(id): Path<Id>) -> HandlerResult<StatusCode> {
    let mut db = db.lock().unwrap();
    let status = remove(&mut db.entries, id)?;
    db.writes += 1;
    Ok(status)
}

#[derive(Deserialize)]
struct RangeParams {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

fn hours_by_project(db: &Db, range: &RangeParams) -> HashMap<Id, f64> {
    let mut hours = HashMap::new();
    for entry in db.entries.iter().filter(|e| in_range(e.work_date, range.from, range.to)) {
        *hours.entry(entry.project_id).or_insert(0.0) += entry.hours;
    }
    hours
}

fn customer_name(db: &Db, id: Id) -> String {
    db.customers
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.clone())
        .unwrap_or_default()
}

async fn report_by_project(
    State(db): State<Shared>,
    Query(range): Query<RangeParams>,
) -> Json<Vec<ProjectSummary>> {
    let db = db.lock().unwrap();
    let hours = hours_by_project(&db, &range);

    let mut rows: Vec<ProjectSummary> = db
        .projects
        .iter()
        .filter_map(|p| {
            hours.get(&p.id).map(|&h| ProjectSummary {
                project_id: p.id,
                project_name: p.name.clone(),
                customer_id: p.customer_id,
                customer_name: customer_name(&db, p.customer_id),
                hours: h,
            })
        })
        .collect();
    rows.sort_by(|a, b| b.hours.total_cmp(&a.hours));
    Json(rows)
}

async fn report_by_customer(
    State(db): State<Shared>,
    Query(range): Query<RangeParams>,
) -> Json<Vec<CustomerSummary>> {
    let db = db.lock().unwrap();
    let by_project = hours_by_project(&db, &range);

    let mut by_customer: HashMap<Id, f64> = HashMap::new();
    for project in &db.projects {
        if let Some(h) = by_project.get(&project.id) {
            *by_customer.entry(project.customer_id).or_insert(0.0) += h;
        }
    }

    let mut rows: Vec<CustomerSummary> = by_customer
        .into_iter()
        .map(|(id, hours)| CustomerSummary {
            customer_id: id,
            customer_name: customer_name(&db, id),
            hours,
        })
        .collect();
    rows.sort_by(|a, b| b.hours.total_cmp(&a.hours));
    Json(rows)
}
