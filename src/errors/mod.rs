use reqwest::header::InvalidHeaderValue;
use reqwest::StatusCode;
use thiserror::Error;

/// Error type that occurs when an API request fails, or when a request could not be built from
/// the arguments given.
#[derive(Debug, Error)]
pub enum APIError {
    /// Occurs when the API has returned a non-success error code. Important status codes include:
    /// - 401 Unauthorized - this usually occurs if your token is incorrect or has expired
    /// - 403 Forbidden - you are not allowed to access this (e.g. you are not a moderator of the
    ///   subreddit), but your request was valid.
    #[error("The API returned a non-success error code: {0}")]
    HTTPError(StatusCode),
    /// Occurs if the request could not be sent, or the response could not be read.
    #[error("An error occurred while processing the HTTP request: {0}")]
    RequestError(#[from] reqwest::Error),
    /// Occurs if JSON deserialization fails.
    #[error("The JSON sent by Reddit did not match what was expecting: {0}")]
    JSONError(#[from] serde_json::Error),
    /// Occurs if a field that was expected to exist is missing.
    #[error("Missing expected field `{0}`")]
    MissingField(&'static str),
    /// Occurs when mutually exclusive arguments are both given or both omitted, or when a target
    /// cannot be used for the requested action. Raised before any request is sent.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(&'static str),
    /// Occurs if an authenticator produced a header value that cannot be sent.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

#[cfg(test)]
mod tests {
    use super::APIError;
    use reqwest::StatusCode;

    #[test]
    fn it_describes_http_errors_with_their_status() {
        let err = APIError::HTTPError(StatusCode::FORBIDDEN);
        assert_eq!(
            err.to_string(),
            "The API returned a non-success error code: 403 Forbidden"
        );
    }

    #[test]
    fn it_describes_invalid_arguments() {
        let err = APIError::InvalidArguments("Either `selftext` or `url` must be provided.");
        assert_eq!(
            err.to_string(),
            "Invalid arguments: Either `selftext` or `url` must be provided."
        );
    }

    #[test]
    fn it_wraps_json_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: APIError = json_err.into();
        assert!(matches!(err, APIError::JSONError(_)));
    }
}
