//! Whenever you create a `RedditClient`, you need to provide an `Authenticator` that sends
//! credentials with every request. `subrawr` does not perform any login flow itself: the client
//! is *pre-authenticated*, so you either browse anonymously or hand it an access token that you
//! obtained elsewhere.
//! # OAuth Or Not?
//! In effect, Reddit's API is split into two parts: a deprecated API that uses cookies for
//! authentication, and an OAuth API that is recommended for new applications. Everything in the
//! subreddit moderation API (flair, relationships, approve/remove) requires a logged-in
//! moderator, so in practice you will want `TokenAuthenticator`.
//! # Authenticator Summary
//! - `AnonymousAuthenticator` - uses the legacy API host and sends no credentials. Choose this
//! if you just want to **browse the API without registering**.
//! - `TokenAuthenticator` - uses the OAuth API host and sends a bearer token. Get the token by
//! registering a **script** app on your [app preferences](https://www.reddit.com/prefs/apps)
//! page and running the password grant against `https://www.reddit.com/api/v1/access_token`.
//!
//! ```
//! use subrawr::auth::TokenAuthenticator;
//! let auth = TokenAuthenticator::new("my-access-token");
//! ```

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::errors::APIError;

/// Trait for any method of authenticating with the Reddit API.
pub trait Authenticator {
    /// A list of OAuth scopes that this `Authenticator` can access. If all scopes can be
    /// accessed, this is signified by a vec!["*"]. If it is read-only, the result is
    /// vec!["read"].
    fn scopes(&self) -> Vec<String>;
    /// Returns the headers needed to authenticate.
    fn headers(&self) -> Result<HeaderMap, APIError>;
    /// `true` if this authentication method requires the OAuth API.
    fn oauth(&self) -> bool;
}

/// An anonymous authenticator.
pub struct AnonymousAuthenticator;

impl Authenticator for AnonymousAuthenticator {
    fn scopes(&self) -> Vec<String> {
        vec![String::from("read")]
    }

    fn headers(&self) -> Result<HeaderMap, APIError> {
        Ok(HeaderMap::new())
    }

    fn oauth(&self) -> bool {
        false
    }
}

impl AnonymousAuthenticator {
    /// Creates a new `AnonymousAuthenticator`. See the module-level documentation for the purpose
    /// of `AnonymousAuthenticator`.
    /// # Examples
    /// ```
    /// use subrawr::auth::AnonymousAuthenticator;
    /// AnonymousAuthenticator::new();
    /// ```
    pub fn new() -> Box<dyn Authenticator + Send> {
        Box::new(AnonymousAuthenticator {})
    }
}

/// Authenticates with an OAuth bearer token that has already been issued. See the module-level
/// documentation for usage.
pub struct TokenAuthenticator {
    access_token: String,
}

impl Authenticator for TokenAuthenticator {
    fn scopes(&self) -> Vec<String> {
        vec![String::from("*")]
    }

    fn headers(&self) -> Result<HeaderMap, APIError> {
        let mut headers = HeaderMap::new();
        let mut value = HeaderValue::from_str(&format!("bearer {}", self.access_token))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    fn oauth(&self) -> bool {
        true
    }
}

impl TokenAuthenticator {
    /// Creates a new `TokenAuthenticator` that sends `access_token` with every request.
    pub fn new(access_token: &str) -> Box<dyn Authenticator + Send> {
        Box::new(TokenAuthenticator { access_token: access_token.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::{AnonymousAuthenticator, TokenAuthenticator};
    use crate::errors::APIError;
    use reqwest::header::AUTHORIZATION;

    #[test]
    fn anonymous_sends_no_credentials() {
        let auth = AnonymousAuthenticator::new();
        assert!(auth.headers().unwrap().is_empty());
        assert!(!auth.oauth());
        assert_eq!(auth.scopes(), vec!["read"]);
    }

    #[test]
    fn token_sends_a_bearer_header() {
        let auth = TokenAuthenticator::new("abc123");
        let headers = auth.headers().unwrap();
        assert_eq!(headers[AUTHORIZATION], "bearer abc123");
        assert!(auth.oauth());
    }

    #[test]
    fn token_rejects_unsendable_values() {
        let auth = TokenAuthenticator::new("abc\n123");
        assert!(matches!(auth.headers(), Err(APIError::InvalidHeader(_))));
    }
}
