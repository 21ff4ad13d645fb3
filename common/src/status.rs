use crate::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Result level understood by the monitoring scheduler.
///
/// The discriminant is the process exit code. `Unknown` means the probe could
/// not decide; it is not ranked above `Critical`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Deserialize, Serialize, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum CheckMkStatus {
    Ok = 0,
    Warning = 1,
    Critical = 2,
    Unknown = 3,
}

impl Default for CheckMkStatus {
    fn default() -> Self {
        CheckMkStatus::Unknown
    }
}

impl CheckMkStatus {
    pub fn code(&self) -> i32 {
        *self as i32
    }
    pub fn label(&self) -> String {
        self.to_string()
    }
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(CheckMkStatus::Ok),
            1 => Some(CheckMkStatus::Warning),
            2 => Some(CheckMkStatus::Critical),
            3 => Some(CheckMkStatus::Unknown),
            _ => None,
        }
    }
}
