//! Page Components

pub mod customers;
pub mod dashboard;
pub mod departments;
pub mod projects;
pub mod time_entries;

pub use customers::Customers;
pub use dashboard::Dashboard;
pub use departments::Departments;
pub use projects::Projects;
pub use time_entries::TimeEntries;

/// Input styling shared by the page forms
pub(crate) const INPUT_CLASS: &str = "bg-gray-700 rounded-lg px-3 py-2 text-white \
     border border-gray-600 focus:border-primary-500 focus:outline-none";

pub(crate) const BUTTON_CLASS: &str = "bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600 \
     disabled:cursor-not-allowed rounded-lg px-4 py-2 font-semibold transition-colors";
