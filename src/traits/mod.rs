use serde_json::{Map, Value};

use crate::errors::APIError;

/// Request parameters (query string for GET, form body for POST) and decoded attribute bundles.
/// Scalar values are sent in their string form.
pub type Data = Map<String, Value>;

/// A pre-authenticated connection to the Reddit API.
///
/// Everything in `structures` talks to Reddit through this trait only. `RedditClient` is the
/// implementation that speaks HTTP; tests substitute a stub that records each request. The
/// transport is responsible for authentication, the API host and decoding the response body.
/// Errors are returned to the caller unchanged.
pub trait Transport {
    /// Sends a GET request to `path` (relative to the API host) with `params` as the query
    /// string, and returns the decoded JSON body.
    fn get(&self, path: &str, params: &Data) -> Result<Value, APIError>;
    /// Sends a POST request to `path` with `data` as the form body, and returns the decoded JSON
    /// body (`Value::Null` if the body was empty).
    fn post(&self, path: &str, data: &Data) -> Result<Value, APIError>;
}

/// An object that was created at some point (e.g. a subreddit)
pub trait Created {
    /// The timestamp of creation, as would be shown to the logged-in user.
    fn created(&self) -> i64;
    /// The timestamp of creation, in UTC.
    fn created_utc(&self) -> i64;
}
