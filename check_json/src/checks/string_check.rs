use super::rules::{first_match, Rule};
use super::{CheckError, FieldCheck};
use crate::config::CheckConfig;
use crate::models::{CheckMkReport, FieldValue};
use common::CheckMkStatus;

/// Exact text match against the critical, warning and ok values, in that order.
#[derive(Debug, Default, Clone)]
pub struct StringCheck {}

impl StringCheck {
    pub fn rules(config: &CheckConfig) -> Vec<Rule<Option<&str>>> {
        vec![
            Rule::new(
                CheckMkStatus::Critical,
                "critical",
                config.critical_value.as_deref(),
            ),
            Rule::new(
                CheckMkStatus::Warning,
                "warning",
                config.warning_value.as_deref(),
            ),
            Rule::new(CheckMkStatus::Ok, "ok", config.ok_value.as_deref()),
        ]
    }
}

impl FieldCheck for StringCheck {
    fn get_name(&self) -> String {
        "string".to_string()
    }

    fn apply(
        &self,
        config: &CheckConfig,
        value: &FieldValue,
        _now: f64,
    ) -> Result<CheckMkReport, CheckError> {
        let text = value.as_text();
        let rules = Self::rules(config);
        match first_match(&rules, |operand| *operand == Some(text.as_str())) {
            Some(rule) => Ok(CheckMkReport::new(
                rule.status,
                format!("{} is '{}' (matches {} value)", config.field, text, rule.name),
            )),
            None => Err(CheckError::NoMatch {
                field: config.field.clone(),
                value: text,
            }),
        }
    }
}
