use super::{DocumentFetcher, TimeoutGuard};
use crate::models::Document;
use async_trait::async_trait;
use common::tasks::http_request::HttpRequestError;
use common::TimeoutSecs;
use log::debug;
use reqwest::Client;

#[derive(Clone, Debug, Default)]
pub struct HttpRequestExecutor {
    client: Client,
}

impl HttpRequestExecutor {
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(HttpRequestExecutor {
            client: Client::builder().build()?,
        })
    }

    /// One GET request; any non 2xx status is a remote error.
    pub async fn call_http_request(&self, url: &str) -> Result<Document, HttpRequestError> {
        debug!("Send GET request to {}", url);
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| classify_error(url, err))?;
        let status = resp.status();
        debug!("Response status {} from {}", status, url);
        if !status.is_success() {
            return Err(HttpRequestError::RemoteError {
                url: url.to_string(),
                message: format!("HTTP {}", status),
            });
        }
        let content = resp
            .bytes()
            .await
            .map_err(|err| classify_error(url, err))?;
        Document::from_slice(&content).map_err(|message| HttpRequestError::GetBodyError {
            url: url.to_string(),
            message,
        })
    }
}

/// Transport failures are connection errors unless reqwest itself reports a
/// timeout, a malformed request or a bad response.
fn classify_error(url: &str, err: reqwest::Error) -> HttpRequestError {
    let url = url.to_string();
    let message = format!("{}", err);
    if err.is_timeout() {
        HttpRequestError::Timeout { url, timeout: 0 }
    } else if err.is_builder() {
        HttpRequestError::BuildError { url, message }
    } else if err.is_status() || err.is_redirect() {
        HttpRequestError::RemoteError { url, message }
    } else {
        HttpRequestError::ConnectionError { url, message }
    }
}

#[async_trait]
impl DocumentFetcher for HttpRequestExecutor {
    async fn fetch(&self, url: &str, timeout: TimeoutSecs) -> Result<Document, HttpRequestError> {
        let guard = TimeoutGuard::from_secs(timeout);
        match guard.run(self.call_http_request(url)).await {
            Ok(Err(HttpRequestError::Timeout { .. })) | Err(_) => {
                debug!("Request to {} exceeded {} seconds", url, timeout);
                Err(HttpRequestError::Timeout {
                    url: url.to_string(),
                    timeout,
                })
            }
            Ok(res) => res,
        }
    }
}
