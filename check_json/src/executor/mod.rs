pub mod guard;
pub mod http_request;

pub use guard::{DeadlineExceeded, TimeoutGuard};
pub use http_request::HttpRequestExecutor;

use crate::models::Document;
use async_trait::async_trait;
use common::tasks::http_request::HttpRequestError;
use common::TimeoutSecs;

#[async_trait]
pub trait DocumentFetcher: Sync + Send {
    /// Fetch and decode the document at `url`, bounded by `timeout` seconds
    /// (0 means no deadline).
    async fn fetch(&self, url: &str, timeout: TimeoutSecs) -> Result<Document, HttpRequestError>;
}
