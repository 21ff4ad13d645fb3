use crate::status::CheckMkStatus;
use crate::{TimeoutSecs, UrlType};
use thiserror::Error;

/// Failure while fetching the JSON document.
///
/// Each variant maps onto exactly one status, see [`HttpRequestError::get_status`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HttpRequestError {
    #[error("cannot build request for {url}: {message}")]
    BuildError { url: UrlType, message: String },
    #[error("{url} returned {message}")]
    RemoteError { url: UrlType, message: String },
    #[error("cannot connect to {url}: {message}")]
    ConnectionError { url: UrlType, message: String },
    #[error("timeout after {timeout} seconds while fetching {url}")]
    Timeout { url: UrlType, timeout: TimeoutSecs },
    #[error("cannot decode response from {url}: {message}")]
    GetBodyError { url: UrlType, message: String },
}

impl HttpRequestError {
    pub fn get_message(&self) -> String {
        self.to_string()
    }
    pub fn get_url(&self) -> &str {
        match self {
            HttpRequestError::BuildError { url, .. }
            | HttpRequestError::RemoteError { url, .. }
            | HttpRequestError::ConnectionError { url, .. }
            | HttpRequestError::Timeout { url, .. }
            | HttpRequestError::GetBodyError { url, .. } => url.as_str(),
        }
    }
    /// Remote and decoding failures are ambiguous, a broken connection means the
    /// endpoint is down and a timeout means it is degraded.
    pub fn get_status(&self) -> CheckMkStatus {
        match self {
            HttpRequestError::BuildError { .. }
            | HttpRequestError::RemoteError { .. }
            | HttpRequestError::GetBodyError { .. } => CheckMkStatus::Unknown,
            HttpRequestError::ConnectionError { .. } => CheckMkStatus::Critical,
            HttpRequestError::Timeout { .. } => CheckMkStatus::Warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "http://localhost:80/status";

    #[test]
    fn test_error_status_mapping() {
        let remote = HttpRequestError::RemoteError {
            url: URL.to_string(),
            message: "HTTP 500 Internal Server Error".to_string(),
        };
        let connection = HttpRequestError::ConnectionError {
            url: URL.to_string(),
            message: "connection refused".to_string(),
        };
        let timeout = HttpRequestError::Timeout {
            url: URL.to_string(),
            timeout: 10,
        };
        let body = HttpRequestError::GetBodyError {
            url: URL.to_string(),
            message: "expected value".to_string(),
        };
        assert_eq!(remote.get_status(), CheckMkStatus::Unknown);
        assert_eq!(connection.get_status(), CheckMkStatus::Critical);
        assert_eq!(timeout.get_status(), CheckMkStatus::Warning);
        assert_eq!(body.get_status(), CheckMkStatus::Unknown);
    }

    #[test]
    fn test_error_message_contains_url() {
        let timeout = HttpRequestError::Timeout {
            url: URL.to_string(),
            timeout: 7,
        };
        assert_eq!(
            timeout.get_message(),
            "timeout after 7 seconds while fetching http://localhost:80/status"
        );
        assert_eq!(timeout.get_url(), URL);
        let remote = HttpRequestError::RemoteError {
            url: URL.to_string(),
            message: "HTTP 404 Not Found".to_string(),
        };
        assert!(remote.get_message().contains(URL));
    }
}
