use super::{CheckError, FieldCheck};
use crate::config::CheckConfig;
use crate::models::{CheckMkReport, FieldValue};
use common::util::parse_bool_text;

/// Compares a boolean field with the ok value. Only OK or CRITICAL are
/// reported when both sides are booleans.
#[derive(Debug, Default, Clone)]
pub struct BoolCheck {}

impl FieldCheck for BoolCheck {
    fn get_name(&self) -> String {
        "bool".to_string()
    }

    fn apply(
        &self,
        config: &CheckConfig,
        value: &FieldValue,
        _now: f64,
    ) -> Result<CheckMkReport, CheckError> {
        let ok_value = config
            .ok_value
            .as_deref()
            .ok_or(CheckError::MissingOkValue)?;
        let expected = parse_bool_text(ok_value)
            .ok_or_else(|| CheckError::InvalidBoolOperand(ok_value.to_string()))?;
        let actual = value.as_bool().ok_or_else(|| CheckError::InvalidBoolField {
            field: config.field.clone(),
            value: value.as_text(),
        })?;
        if actual == expected {
            Ok(CheckMkReport::new_ok_report(format!(
                "{} is {}",
                config.field, actual
            )))
        } else {
            Ok(CheckMkReport::new_critical_report(format!(
                "{} is {}, expected {}",
                config.field, actual, expected
            )))
        }
    }
}
