use super::rules::Thresholds;
use super::{CheckError, FieldCheck};
use crate::config::CheckConfig;
use crate::models::{CheckMkReport, FieldValue};
use log::debug;

/// Values whose magnitude in billions reaches this are rescaled once by 1000.
const RESCALE_LIMIT: f64 = 1000.0;

/// Checks how many seconds ago the timestamp in the field was taken.
#[derive(Debug, Default, Clone)]
pub struct TimestampCheck {}

/// Brings a millisecond (or larger) timestamp one step closer to seconds.
/// Only a single division is applied.
pub fn normalize_timestamp(raw: f64) -> f64 {
    if raw / 1_000_000_000.0 >= RESCALE_LIMIT {
        raw / 1000.0
    } else {
        raw
    }
}

impl FieldCheck for TimestampCheck {
    fn get_name(&self) -> String {
        "timestamp".to_string()
    }

    fn apply(
        &self,
        config: &CheckConfig,
        value: &FieldValue,
        now: f64,
    ) -> Result<CheckMkReport, CheckError> {
        let raw = value.as_digits().ok_or_else(|| CheckError::NotDigits {
            field: config.field.clone(),
            value: value.as_text(),
        })?;
        let thresholds = Thresholds::from_config(config)?;
        let timestamp = normalize_timestamp(raw);
        let age = now - timestamp;
        debug!(
            "Timestamp {} normalized to {}, age {}s",
            raw, timestamp, age
        );
        if age < 0.0 {
            return Err(CheckError::FutureTimestamp {
                field: config.field.clone(),
                value: value.as_text(),
                now: format!("{:.0}", now),
            });
        }
        let report = match thresholds.classify(age) {
            Some(rule) => CheckMkReport::new(
                rule.status,
                format!(
                    "{} is {:.0}s old (>= {} {})",
                    config.field, age, rule.name, rule.operand
                ),
            ),
            None => CheckMkReport::new_ok_report(format!(
                "{} is {:.0}s old (below thresholds)",
                config.field, age
            )),
        };
        Ok(report)
    }
}
