mod bool_check;
mod rules;
mod string_check;
mod threshold_check;
mod timestamp_check;

pub use bool_check::BoolCheck;
pub use rules::{Rule, Thresholds};
pub use string_check::StringCheck;
pub use threshold_check::ThresholdCheck;
pub use timestamp_check::TimestampCheck;

use crate::config::{CheckConfig, ConfigError};
use crate::models::{CheckMkReport, FieldValue};
use log::debug;
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Reasons a check cannot decide. All of them end as UNKNOWN.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckError {
    #[error("field '{0}' not found in response")]
    FieldNotFound(String),
    #[error("field '{field}' value '{value}' matches none of the configured values")]
    NoMatch { field: String, value: String },
    #[error("bool check requires an ok value (-v)")]
    MissingOkValue,
    #[error("ok value '{0}' is not a boolean")]
    InvalidBoolOperand(String),
    #[error("field '{field}' value '{value}' is not a boolean")]
    InvalidBoolField { field: String, value: String },
    #[error("field '{field}' value '{value}' is not a non-negative integer")]
    NotDigits { field: String, value: String },
    #[error("at least one of warning (-w) or critical (-c) must be a non-negative integer")]
    MissingThresholds,
    #[error("critical threshold {critical} is lower than warning threshold {warning}")]
    InvertedThresholds { warning: String, critical: String },
    #[error("field '{field}' timestamp {value} is in the future (current time {now})")]
    FutureTimestamp {
        field: String,
        value: String,
        now: String,
    },
}

impl From<CheckError> for CheckMkReport {
    fn from(error: CheckError) -> Self {
        CheckMkReport::new_unknown_report(error.to_string())
    }
}

impl From<ConfigError> for CheckMkReport {
    fn from(error: ConfigError) -> Self {
        CheckMkReport::new_unknown_report(error.to_string())
    }
}

pub trait FieldCheck: Sync + Send + Debug {
    fn get_name(&self) -> String;
    fn can_apply(&self, check_type: &str) -> bool {
        self.get_name().eq_ignore_ascii_case(check_type)
    }
    /// `now` is the current unix time in seconds.
    fn apply(
        &self,
        config: &CheckConfig,
        value: &FieldValue,
        now: f64,
    ) -> Result<CheckMkReport, CheckError>;
}

pub fn get_checks() -> Vec<Arc<dyn FieldCheck>> {
    let result: Vec<Arc<dyn FieldCheck>> = vec![
        Arc::new(StringCheck::default()),
        Arc::new(ThresholdCheck::default()),
        Arc::new(BoolCheck::default()),
        Arc::new(TimestampCheck::default()),
    ];
    result
}

/// Tries every known check in order; a selector none of them accepts is a
/// configuration error naming the selector.
pub fn find_check(
    checks: &[Arc<dyn FieldCheck>],
    check_type: &str,
) -> Result<Arc<dyn FieldCheck>, ConfigError> {
    checks
        .iter()
        .find(|check| check.can_apply(check_type))
        .cloned()
        .ok_or_else(|| ConfigError::UnknownCheckType(check_type.to_string()))
}

pub fn run_check(
    check: &dyn FieldCheck,
    config: &CheckConfig,
    value: &FieldValue,
    now: f64,
) -> CheckMkReport {
    debug!(
        "Apply {} check on field {} with value {:?}",
        check.get_name(),
        &config.field,
        value
    );
    check
        .apply(config, value, now)
        .unwrap_or_else(CheckMkReport::from)
}
