//! Timekeeper CLI
//!
//! Command-line front end for the time-tracking backend:
//! - List and create customers, departments, projects and time entries
//! - Update and delete them by id
//! - Show the dashboard overview and recent entries
//! - Generate a config file

use anyhow::{bail, Context};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timekeeper::client::{ApiClient, HttpTransport};
use timekeeper::config::{generate_default_config, Config, LoggingConfig, OutputFormat};
use timekeeper::models::{
    CustomerUpdate, DepartmentUpdate, Id, ProjectUpdate, ReportRange, TimeEntryUpdate,
};
use timekeeper::views::dashboard::refresh;
use timekeeper::views::form::{optional_text, parse_hours, required_text};
use timekeeper::views::{
    create, load, CustomersView, DashboardView, DepartmentsView, EntityView, ProjectsView, Row,
    SubmitOutcome, SummaryTab, Table, TimeEntriesView, PLACEHOLDER,
};

type Client = ApiClient<HttpTransport>;

#[derive(Parser)]
#[command(name = "timekeeper")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Track hours against customers and projects")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL, overrides the config file and TIMEKEEPER_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Customers
    Customers {
        #[command(subcommand)]
        action: CustomerAction,
    },

    /// Departments
    Departments {
        #[command(subcommand)]
        action: DepartmentAction,
    },

    /// Projects
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Time entries
    Time {
        #[command(subcommand)]
        action: TimeAction,
    },

    /// Hours overview and recent entries
    Dashboard {
        /// Overview grouping
        #[arg(short, long, value_enum, default_value = "project")]
        tab: Tab,
        /// First day included in the overview (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day included in the overview (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum CustomerAction {
    List,
    Show {
        id: Id,
    },
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        inactive: bool,
    },
    /// Change only the given fields
    Update {
        id: Id,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        id: Id,
    },
}

#[derive(Subcommand)]
pub enum DepartmentAction {
    List,
    Add {
        #[arg(long)]
        name: String,
        /// Customer id
        #[arg(long)]
        customer: Id,
    },
    Update {
        id: Id,
        #[arg(long)]
        name: String,
    },
    Delete {
        id: Id,
    },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    List,
    Add {
        #[arg(long)]
        name: String,
        /// Customer id
        #[arg(long)]
        customer: Id,
        /// Department id; must belong to the customer
        #[arg(long)]
        department: Option<Id>,
        #[arg(long)]
        inactive: bool,
    },
    /// Change only the given fields
    Update {
        id: Id,
        #[arg(long)]
        name: Option<String>,
        /// Customer id
        #[arg(long)]
        customer: Option<Id>,
        /// Department id; must belong to the project's customer
        #[arg(long)]
        department: Option<Id>,
        /// Detach the project from its department
        #[arg(long, conflicts_with = "department")]
        no_department: bool,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        id: Id,
    },
}

#[derive(Subcommand)]
pub enum TimeAction {
    List,
    /// Log hours against a project
    Log {
        /// Project id
        #[arg(long)]
        project: Id,
        #[arg(long)]
        hours: String,
        /// Work date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        non_billable: bool,
    },
    /// Change only the given fields
    Update {
        id: Id,
        /// Project id
        #[arg(long)]
        project: Option<Id>,
        /// Work date, YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        hours: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        billable: Option<bool>,
    },
    Delete {
        id: Id,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Tab {
    Project,
    Customer,
}

impl From<Tab> for SummaryTab {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Project => SummaryTab::Project,
            Tab::Customer => SummaryTab::Customer,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("Config written to {}", path.display());
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    init_tracing(&config.logging);
    tracing::debug!(base_url = %config.api.base_url, "using backend");

    let client = ApiClient::new(HttpTransport::new(&config.api.base_url));
    let format = config.output.format;

    match cli.command {
        Commands::Customers { action } => match action {
            CustomerAction::List => list(CustomersView::new(), &client, format).await,
            CustomerAction::Show { id } => print_record(&client.get_customer(id).await?, format),
            CustomerAction::Add {
                name,
                email,
                notes,
                inactive,
            } => {
                let mut view = CustomersView::new();
                view.form.name = name;
                view.form.email = email.unwrap_or_default();
                view.form.notes = notes.unwrap_or_default();
                view.form.active = !inactive;
                submit(view, &client, "Customer").await
            }
            CustomerAction::Update {
                id,
                name,
                email,
                notes,
                active,
            } => {
                let update = CustomerUpdate {
                    name: name.as_deref().map(required_name).transpose()?,
                    contact_email: email.as_deref().and_then(optional_text),
                    notes: notes.as_deref().and_then(optional_text),
                    active,
                };
                ensure_changes(update.is_empty())?;
                print_record(&client.update_customer(id, &update).await?, format)
            }
            CustomerAction::Delete { id } => {
                client.delete_customer(id).await?;
                deleted("Customer", id)
            }
        },

        Commands::Departments { action } => match action {
            DepartmentAction::List => list(DepartmentsView::new(), &client, format).await,
            DepartmentAction::Add { name, customer } => {
                let mut view = DepartmentsView::new();
                view.form.name = name;
                view.form.customer_id = Some(customer);
                submit(view, &client, "Department").await
            }
            DepartmentAction::Update { id, name } => {
                let update = DepartmentUpdate {
                    name: Some(required_name(&name)?),
                };
                print_record(&client.update_department(id, &update).await?, format)
            }
            DepartmentAction::Delete { id } => {
                client.delete_department(id).await?;
                deleted("Department", id)
            }
        },

        Commands::Projects { action } => match action {
            ProjectAction::List => list(ProjectsView::new(), &client, format).await,
            ProjectAction::Add {
                name,
                customer,
                department,
                inactive,
            } => {
                let mut view = ProjectsView::new();
                if department.is_some() {
                    // department options come from the loaded lists
                    load(&mut view, &client).await;
                    if let Some(e) = view.error() {
                        bail!("{e}");
                    }
                }
                view.form.name = name;
                view.form.active = !inactive;
                view.select_customer(Some(customer));
                if !view.select_department(department) {
                    bail!(
                        "Department {} does not belong to customer {}",
                        department.unwrap_or_default(),
                        customer
                    );
                }
                submit(view, &client, "Project").await
            }
            ProjectAction::Update {
                id,
                name,
                customer,
                department,
                no_department,
                active,
            } => {
                let update = ProjectUpdate {
                    name: name.as_deref().map(required_name).transpose()?,
                    customer_id: customer,
                    department_id: if no_department { Some(None) } else { department.map(Some) },
                    active,
                };
                ensure_changes(update.is_empty())?;
                print_record(&client.update_project(id, &update).await?, format)
            }
            ProjectAction::Delete { id } => {
                client.delete_project(id).await?;
                deleted("Project", id)
            }
        },

        Commands::Time { action } => match action {
            TimeAction::List => list(TimeEntriesView::new(), &client, format).await,
            TimeAction::Log {
                project,
                hours,
                date,
                description,
                non_billable,
            } => {
                let mut view = TimeEntriesView::new();
                view.form.project_id = Some(project);
                view.form.work_date = date.unwrap_or_else(|| today().format("%Y-%m-%d").to_string());
                view.form.hours = hours;
                view.form.description = description.unwrap_or_default();
                view.form.billable = !non_billable;
                submit(view, &client, "Time entry").await
            }
            TimeAction::Update {
                id,
                project,
                date,
                hours,
                description,
                billable,
            } => {
                let hours = match hours {
                    Some(raw) => match parse_hours(&raw) {
                        Some(h) => Some(h),
                        None => bail!("Hours must be a number greater than zero"),
                    },
                    None => None,
                };
                let update = TimeEntryUpdate {
                    project_id: project,
                    work_date: date,
                    hours,
                    description: description.as_deref().and_then(optional_text),
                    billable,
                };
                ensure_changes(update.is_empty())?;
                print_record(&client.update_time_entry(id, &update).await?, format)
            }
            TimeAction::Delete { id } => {
                client.delete_time_entry(id).await?;
                deleted("Time entry", id)
            }
        },

        Commands::Dashboard { tab, from, to } => {
            let mut view = DashboardView::new(today());
            view.tab = tab.into();
            view.range = ReportRange { from, to };
            refresh(&mut view, &client).await;
            print_dashboard(&view, format)
        }

        Commands::Config { .. } => Ok(()),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("timekeeper={}", logging.level).into());
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn list<V>(mut view: V, client: &Client, format: OutputFormat) -> anyhow::Result<()>
where
    V: EntityView,
    V::Data: Serialize,
{
    load(&mut view, client).await;
    if let Some(e) = view.error() {
        bail!("{e}");
    }

    match format {
        OutputFormat::Table => print!("{}", view.table().render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view.data())?),
    }
    Ok(())
}

async fn submit<V: EntityView>(mut view: V, client: &Client, what: &str) -> anyhow::Result<()> {
    match create(&mut view, client).await {
        SubmitOutcome::Created => {
            println!("{} created", what);
            Ok(())
        }
        SubmitOutcome::Failed => bail!("{}", view.error().unwrap_or("request failed")),
        SubmitOutcome::Invalid => bail!("{} is missing a required field or has an invalid value", what),
    }
}

fn required_name(raw: &str) -> anyhow::Result<String> {
    match required_text(raw) {
        Some(name) => Ok(name),
        None => bail!("Name must not be blank"),
    }
}

fn ensure_changes(empty: bool) -> anyhow::Result<()> {
    if empty {
        bail!("Nothing to update; pass at least one field");
    }
    Ok(())
}

fn deleted(what: &str, id: Id) -> anyhow::Result<()> {
    println!("{} {} deleted", what, id);
    Ok(())
}

/// Print one record as a field/value table or as JSON
fn print_record<R: Serialize>(record: &R, format: OutputFormat) -> anyhow::Result<()> {
    let value = serde_json::to_value(record)?;
    match format {
        OutputFormat::Table => {
            let rows = value
                .as_object()
                .into_iter()
                .flatten()
                .zip(0..)
                .map(|((field, v), key)| Row {
                    key,
                    cells: vec![field.clone(), field_text(v)],
                })
                .collect();
            print!("{}", Table::new(&["Field", "Value"], rows, "No fields.").render_text());
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&value)?),
    }
    Ok(())
}

fn field_text(value: &Value) -> String {
    match value {
        Value::Null => PLACEHOLDER.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Serialize)]
struct DashboardOutput<'a> {
    tab: SummaryTab,
    summaries: &'a timekeeper::views::Summaries,
    details: &'a timekeeper::views::DashboardDetails,
}

fn print_dashboard(view: &DashboardView, format: OutputFormat) -> anyhow::Result<()> {
    if let Some(e) = view.error().or(view.form_error()) {
        bail!("{e}");
    }

    match format {
        OutputFormat::Table => {
            println!("Overview ({})", view.tab.label());
            match view.overview_empty_message() {
                Some(message) => println!("{}", message),
                None => print!("{}", view.overview_table().render_text()),
            }
            println!();
            println!("Recent time logs");
            print!("{}", view.recent_table().render_text());
        }
        OutputFormat::Json => {
            let output = DashboardOutput {
                tab: view.tab,
                summaries: view.summaries(),
                details: view.details(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
