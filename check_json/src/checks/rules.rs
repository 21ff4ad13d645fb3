use super::CheckError;
use crate::config::CheckConfig;
use common::util::digits_only;
use common::CheckMkStatus;
use log::warn;

/// One entry of a priority table: the status to report when `operand`
/// matches. Tables are evaluated top down and the first match wins.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule<T> {
    pub status: CheckMkStatus,
    pub name: &'static str,
    pub operand: T,
}

impl<T> Rule<T> {
    pub fn new(status: CheckMkStatus, name: &'static str, operand: T) -> Self {
        Rule {
            status,
            name,
            operand,
        }
    }
}

pub fn first_match<T, F>(rules: &[Rule<T>], predicate: F) -> Option<&Rule<T>>
where
    F: Fn(&T) -> bool,
{
    rules.iter().find(|rule| predicate(&rule.operand))
}

/// Critical and warning limits shared by the threshold and timestamp checks,
/// ordered critical first.
#[derive(Clone, Debug, PartialEq)]
pub struct Thresholds {
    rules: Vec<Rule<f64>>,
}

impl Thresholds {
    pub fn from_config(config: &CheckConfig) -> Result<Self, CheckError> {
        let critical = parse_limit("critical", config.critical_value.as_deref());
        let warning = parse_limit("warning", config.warning_value.as_deref());
        if let (Some(critical), Some(warning)) = (critical, warning) {
            if critical < warning {
                return Err(CheckError::InvertedThresholds {
                    warning: config.warning_value.clone().unwrap_or_default(),
                    critical: config.critical_value.clone().unwrap_or_default(),
                });
            }
        }
        let mut rules = Vec::new();
        if let Some(critical) = critical {
            rules.push(Rule::new(CheckMkStatus::Critical, "critical", critical));
        }
        if let Some(warning) = warning {
            rules.push(Rule::new(CheckMkStatus::Warning, "warning", warning));
        }
        if rules.is_empty() {
            return Err(CheckError::MissingThresholds);
        }
        Ok(Thresholds { rules })
    }

    /// First limit reached by `value`, `None` means below every limit.
    pub fn classify(&self, value: f64) -> Option<&Rule<f64>> {
        first_match(&self.rules, |limit| value >= *limit)
    }

    pub fn rules(&self) -> &[Rule<f64>] {
        &self.rules
    }
}

fn parse_limit(name: &str, operand: Option<&str>) -> Option<f64> {
    let operand = operand?;
    match digits_only(operand).and_then(|digits| digits.parse::<f64>().ok()) {
        Some(limit) => Some(limit),
        None => {
            warn!("Ignore {} threshold '{}': not a non-negative integer", name, operand);
            None
        }
    }
}
