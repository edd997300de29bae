//! Load bookkeeping for view data
//!
//! A view's data is an immutable snapshot that a successful load replaces
//! wholesale. Every load takes a [`LoadTicket`]; only the most recently
//! issued ticket may apply its result, so a slow response can never
//! overwrite a newer one.

use std::sync::Arc;

use crate::client::{ClientError, ClientResult};

/// Sequence number handed out when a load starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// What happened to a finished load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The snapshot was replaced
    Applied,
    /// The load failed; previous data kept, error recorded
    Failed,
    /// A newer load was started meanwhile; result dropped
    Stale,
}

/// Immutable data shared between renders, replaced atomically
#[derive(Debug)]
pub struct Snapshot<T> {
    data: Arc<T>,
    issued: u64,
    loaded: bool,
}

impl<T: Default> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            data: Arc::new(T::default()),
            issued: 0,
            loaded: false,
        }
    }
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            issued: self.issued,
            loaded: self.loaded,
        }
    }
}

impl<T> Snapshot<T> {
    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn shared(&self) -> Arc<T> {
        Arc::clone(&self.data)
    }

    /// Whether any load has been applied yet
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn begin(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    pub fn is_latest(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Replace the data if `ticket` is still the latest; returns whether it was
    pub fn replace(&mut self, ticket: LoadTicket, data: T) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.data = Arc::new(data);
        self.loaded = true;
        true
    }
}

/// Snapshot plus the view-local status that goes with it
#[derive(Debug)]
pub struct ViewState<T> {
    snapshot: Snapshot<T>,
    error: Option<String>,
    loading: bool,
    submitting: bool,
}

impl<T: Default> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            snapshot: Snapshot::default(),
            error: None,
            loading: false,
            submitting: false,
        }
    }
}

impl<T> Clone for ViewState<T> {
    fn clone(&self) -> Self {
        Self {
            snapshot: self.snapshot.clone(),
            error: self.error.clone(),
            loading: self.loading,
            submitting: self.submitting,
        }
    }
}

impl<T> ViewState<T> {
    pub fn data(&self) -> &T {
        self.snapshot.data()
    }

    pub fn snapshot(&self) -> &Snapshot<T> {
        &self.snapshot
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.loading = true;
        self.snapshot.begin()
    }

    pub fn finish_load(&mut self, ticket: LoadTicket, result: ClientResult<T>) -> LoadOutcome {
        if !self.snapshot.is_latest(ticket) {
            tracing::debug!(?ticket, "discarding stale load result");
            return LoadOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(data) => {
                self.snapshot.replace(ticket, data);
                self.error = None;
                LoadOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "load failed");
                self.error = Some(e.to_string());
                LoadOutcome::Failed
            }
        }
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub fn set_error(&mut self, error: &ClientError) {
        self.error = Some(error.to_string());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
