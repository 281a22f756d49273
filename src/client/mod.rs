//! A client that represents one connection to the Reddit API. It sends every request made by the
//! subreddit structures, with the credentials of one (already authenticated) account, or none.
//! # Examples
//! ## Creating a RedditClient
//! When creating a `RedditClient`, you are only required to pass in a user agent string, which will
//! identify your client, and an *Authenticator*. You **must** use a descriptive user agent when
//! creating the client to comply with Reddit API rules.
//!
//! The recommended format for user agent strings is `platform:program:version (by /u/yourname)`,
//! e.g. `linux:subrawr:v0.1.0 (by /u/Aurora0001)`.
//!
//! ```
//! use subrawr::client::RedditClient;
//! use subrawr::auth::AnonymousAuthenticator;
//! let agent = "linux:subrawr:v0.1.0 (by /u/Aurora0001)";
//! let client = RedditClient::new(agent, AnonymousAuthenticator::new()).expect("No TLS backend");
//! ```
//!
//! ## Pointing the client somewhere else
//! `ClientOptions` lets you change the API host (for example to a local mock server) and the
//! request timeout.
//!
//! ```
//! use std::time::Duration;
//! use subrawr::client::RedditClient;
//! use subrawr::auth::AnonymousAuthenticator;
//! use subrawr::options::ClientOptions;
//! let opts = ClientOptions::new("subrawr-tests")
//!     .api_url("http://127.0.0.1:8080")
//!     .timeout(Duration::from_secs(10));
//! let client = RedditClient::with_options(opts, AnonymousAuthenticator::new())
//!     .expect("No TLS backend");
//! assert_eq!(client.build_url("api/submit/"), "http://127.0.0.1:8080/api/submit/");
//! ```

use log::{debug, trace, warn};
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;

use crate::auth::Authenticator;
use crate::errors::APIError;
use crate::options::ClientOptions;
use crate::structures::subreddit::Subreddit;
use crate::traits::{Data, Transport};

const OAUTH_URL: &str = "https://oauth.reddit.com";
const API_URL: &str = "https://api.reddit.com";

/// A client to connect to Reddit. See the module-level documentation for examples.
pub struct RedditClient {
    client: Client,
    options: ClientOptions,
    authenticator: Box<dyn Authenticator + Send>,
}

impl RedditClient {
    /// Creates an instance of the `RedditClient` using the provided user agent.
    pub fn new(user_agent: &str,
               authenticator: Box<dyn Authenticator + Send>)
               -> Result<RedditClient, APIError> {
        RedditClient::with_options(ClientOptions::new(user_agent), authenticator)
    }

    /// Creates an instance of the `RedditClient` from a full set of options.
    pub fn with_options(options: ClientOptions,
                        authenticator: Box<dyn Authenticator + Send>)
                        -> Result<RedditClient, APIError> {
        debug!("creating client for {:?} with scopes {:?}",
               options.user_agent,
               authenticator.scopes());
        let mut builder = Client::builder().user_agent(options.user_agent.to_owned());
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(RedditClient {
            client: builder.build()?,
            options,
            authenticator,
        })
    }

    /// Provides an interface to the specified subreddit, which can be used to access its flair,
    /// relationships and moderation endpoints, and to submit posts.
    /// # Examples
    /// ```rust,no_run
    /// use subrawr::prelude::*;
    /// let client = RedditClient::new("subrawr", TokenAuthenticator::new("token"))
    ///     .expect("Could not create client");
    /// let rust = client.subreddit("rust").expect("Invalid name");
    /// assert_eq!(rust.path(), "r/rust/");
    /// ```
    pub fn subreddit(&self, name: &str) -> Result<Subreddit<'_>, APIError> {
        Subreddit::new(self, Some(name), None)
    }

    /// The OAuth scopes this client can access, as reported by its authenticator. `["*"]` means
    /// every scope.
    pub fn scopes(&self) -> Vec<String> {
        self.authenticator.scopes()
    }

    /// Creates a full URL using the correct access point (API or OAuth) from the stem.
    pub fn build_url(&self, dest: &str) -> String {
        let stem = match self.options.api_url {
            Some(ref url) => url.as_str(),
            None if self.authenticator.oauth() => OAUTH_URL,
            None => API_URL,
        };
        format!("{}/{}", stem, dest.trim_start_matches('/'))
    }

    fn send(&self, req: RequestBuilder) -> Result<Value, APIError> {
        let response = req.headers(self.authenticator.headers()?).send()?;
        let status = response.status();
        if !status.is_success() {
            warn!("{} returned {}", response.url(), status);
            return Err(APIError::HTTPError(status));
        }
        let body = response.text()?;
        trace!("response body: {}", body);
        if body.trim().is_empty() {
            Ok(Value::Null)
        } else {
            Ok(serde_json::from_str(&body)?)
        }
    }
}

impl Transport for RedditClient {
    fn get(&self, path: &str, params: &Data) -> Result<Value, APIError> {
        let url = self.build_url(path);
        let mut query = form_pairs(params);
        query.push(("raw_json".to_owned(), "1".to_owned()));
        debug!("GET {} {:?}", url, query);
        self.send(self.client.get(&url).query(&query))
    }

    fn post(&self, path: &str, data: &Data) -> Result<Value, APIError> {
        let url = self.build_url(path);
        let mut form = form_pairs(data);
        form.push(("api_type".to_owned(), "json".to_owned()));
        debug!("POST {}", url);
        trace!("POST body: {:?}", form);
        self.send(self.client.post(&url).form(&form))
    }
}

/// Flattens request data into string pairs. Strings are sent as-is, `null` is skipped and
/// everything else is sent as its JSON text (so booleans become `true`/`false`).
fn form_pairs(data: &Data) -> Vec<(String, String)> {
    data.iter()
        .filter(|&(_, value)| !value.is_null())
        .map(|(key, value)| {
            let value = match *value {
                Value::String(ref s) => s.to_owned(),
                ref other => other.to_string(),
            };
            (key.to_owned(), value)
        })
        .collect()
}
