use std::cell::RefCell;
use std::collections::VecDeque;

use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::errors::APIError;
use crate::traits::{Data, Transport};

pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds request data from a `json!` object literal.
pub fn data(value: Value) -> Data {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}

pub fn empty_listing() -> Value {
    json!({"kind": "Listing", "data": {"children": [], "after": null, "before": null}})
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub data: Data,
}

/// A transport that records every request instead of sending it. GET requests are answered
/// from a queue (an empty listing once the queue runs out), POST requests with a fixed body.
#[derive(Default)]
pub struct RecordingTransport {
    requests: RefCell<Vec<Request>>,
    get_responses: RefCell<VecDeque<Value>>,
    post_response: Option<Value>,
    failure: Option<StatusCode>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers the next GET request with `body`.
    pub fn with_get(self, body: Value) -> Self {
        self.get_responses.borrow_mut().push_back(body);
        self
    }

    /// Answers every POST request with `body`.
    pub fn with_post(mut self, body: Value) -> Self {
        self.post_response = Some(body);
        self
    }

    /// Fails every request with `status`.
    pub fn failing(mut self, status: StatusCode) -> Self {
        self.failure = Some(status);
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn last(&self) -> Request {
        self.requests.borrow().last().cloned().expect("no requests were sent")
    }

    fn record(&self, method: Method, path: &str, data: &Data) -> Result<(), APIError> {
        self.requests.borrow_mut().push(Request {
            method,
            path: path.to_owned(),
            data: data.clone(),
        });
        match self.failure {
            Some(status) => Err(APIError::HTTPError(status)),
            None => Ok(()),
        }
    }
}

impl Transport for RecordingTransport {
    fn get(&self, path: &str, params: &Data) -> Result<Value, APIError> {
        self.record(Method::Get, path, params)?;
        let next = self.get_responses.borrow_mut().pop_front();
        Ok(next.unwrap_or_else(empty_listing))
    }

    fn post(&self, path: &str, data: &Data) -> Result<Value, APIError> {
        self.record(Method::Post, path, data)?;
        Ok(self.post_response.clone().unwrap_or(Value::Null))
    }
}
