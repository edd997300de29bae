//! In-memory transport for unit tests

use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use super::{ApiRequest, ClientError, ClientResult, Method, Transport};

/// Records every request and answers from canned responses keyed by path.
///
/// Each path holds a queue; the last queued outcome keeps answering once
/// the earlier ones are used up. Unknown paths answer 404.
#[derive(Default)]
pub struct MockTransport {
    outcomes: RefCell<HashMap<String, VecDeque<ClientResult<Value>>>>,
    log: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: queue a successful response
    pub fn respond(self, path: &str, body: Value) -> Self {
        self.push(path, Ok(body));
        self
    }

    /// Builder method: queue a failure
    pub fn fail(self, path: &str, error: ClientError) -> Self {
        self.push(path, Err(error));
        self
    }

    pub fn push(&self, path: &str, outcome: ClientResult<Value>) {
        self.outcomes
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push_back(outcome);
    }

    /// Drop queued outcomes for a path and answer with `outcome` from now on
    pub fn replace(&self, path: &str, outcome: ClientResult<Value>) {
        let mut outcomes = self.outcomes.borrow_mut();
        let queue = outcomes.entry(path.to_string()).or_default();
        queue.clear();
        queue.push_back(outcome);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.log.borrow().clone()
    }

    pub fn writes(&self) -> Vec<ApiRequest> {
        self.log
            .borrow()
            .iter()
            .filter(|r| r.is_write())
            .cloned()
            .collect()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<Value> {
        let path = request.path.clone();
        self.log.borrow_mut().push(request);

        let mut outcomes = self.outcomes.borrow_mut();
        match outcomes.get_mut(&path) {
            Some(queue) if queue.len() > 1 => queue
                .pop_front()
                .unwrap_or_else(|| Err(ClientError::Network("drained".to_string()))),
            Some(queue) => queue
                .front()
                .cloned()
                .unwrap_or_else(|| Err(ClientError::Network("drained".to_string()))),
            None => Err(ClientError::request_failed(
                404,
                String::new(),
                "Not Found",
            )),
        }
    }
}
