use crate::CHECK_PREFIX;
use common::tasks::http_request::HttpRequestError;
use common::CheckMkStatus;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The single result of an invocation, printed as one line on stdout.
#[derive(Clone, Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CheckMkReport {
    pub status: CheckMkStatus,
    pub status_detail: String,
}

impl CheckMkReport {
    pub fn new(status: CheckMkStatus, status_detail: impl Into<String>) -> Self {
        CheckMkReport {
            status,
            status_detail: status_detail.into(),
        }
    }
    pub fn new_ok_report(msg: impl Into<String>) -> Self {
        Self::new(CheckMkStatus::Ok, msg)
    }
    pub fn new_warning_report(msg: impl Into<String>) -> Self {
        Self::new(CheckMkStatus::Warning, msg)
    }
    pub fn new_critical_report(msg: impl Into<String>) -> Self {
        Self::new(CheckMkStatus::Critical, msg)
    }
    pub fn new_unknown_report(msg: impl Into<String>) -> Self {
        Self::new(CheckMkStatus::Unknown, msg)
    }
    pub fn exit_code(&self) -> i32 {
        self.status.code()
    }
}

impl Display for CheckMkReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} - {}",
            CHECK_PREFIX, self.status, self.status_detail
        )
    }
}

impl From<HttpRequestError> for CheckMkReport {
    fn from(error: HttpRequestError) -> Self {
        CheckMkReport::new(error.get_status(), error.get_message())
    }
}
