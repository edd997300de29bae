//! List and report query parameters
//!
//! Every parameter is optional and only appears in the query string when set.

use chrono::NaiveDate;

use super::entities::Id;

/// Parameters shared by the customer, department and project list endpoints
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub active: Option<bool>,
    pub search: Option<String>,
}

impl ListQuery {
    pub fn limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Builder method: only active records
    pub fn active_only(mut self) -> Self {
        self.active = Some(true);
        self
    }

    /// Builder method: name search
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn to_query_string(&self) -> String {
        let mut qs = QueryString::new();
        qs.push("skip", self.skip);
        qs.push("limit", self.limit);
        qs.push("active", self.active);
        qs.push("search", self.search.as_deref());
        qs.finish()
    }
}

/// Filters for the time entry list endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeEntryQuery {
    pub project_id: Option<Id>,
    pub customer_id: Option<Id>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl TimeEntryQuery {
    pub fn limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn to_query_string(&self) -> String {
        let mut qs = QueryString::new();
        qs.push("project_id", self.project_id);
        qs.push("customer_id", self.customer_id);
        qs.push("from", self.from);
        qs.push("to", self.to);
        qs.push("skip", self.skip);
        qs.push("limit", self.limit);
        qs.finish()
    }
}

/// Optional inclusive date range for the report endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReportRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ReportRange {
    pub fn to_query_string(&self) -> String {
        let mut qs = QueryString::new();
        qs.push("from", self.from);
        qs.push("to", self.to);
        qs.finish()
    }
}

/// Accumulates `key=value` pairs, percent-encoding the values
struct QueryString {
    pairs: Vec<String>,
}

impl QueryString {
    fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    fn push<V: ToString>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            let value = value.to_string();
            self.pairs
                .push(format!("{}={}", key, urlencoding::encode(&value)));
        }
    }

    /// Either an empty string or `?` followed by the pairs
    fn finish(self) -> String {
        if self.pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", self.pairs.join("&"))
        }
    }
}
