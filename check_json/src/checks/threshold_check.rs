use super::rules::Thresholds;
use super::{CheckError, FieldCheck};
use crate::config::CheckConfig;
use crate::models::{CheckMkReport, FieldValue};

#[derive(Debug, Default, Clone)]
pub struct ThresholdCheck {}

impl FieldCheck for ThresholdCheck {
    fn get_name(&self) -> String {
        "threshold".to_string()
    }

    fn apply(
        &self,
        config: &CheckConfig,
        value: &FieldValue,
        _now: f64,
    ) -> Result<CheckMkReport, CheckError> {
        let number = value.as_digits().ok_or_else(|| CheckError::NotDigits {
            field: config.field.clone(),
            value: value.as_text(),
        })?;
        let thresholds = Thresholds::from_config(config)?;
        let text = value.as_text();
        let report = match thresholds.classify(number) {
            Some(rule) => CheckMkReport::new(
                rule.status,
                format!("{} is {} (>= {} {})", config.field, text, rule.name, rule.operand),
            ),
            None => CheckMkReport::new_ok_report(format!(
                "{} is {} (below thresholds)",
                config.field, text
            )),
        };
        Ok(report)
    }
}
