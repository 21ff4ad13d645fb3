pub mod logger;
pub mod status;
pub mod tasks;
pub mod util;

pub use status::CheckMkStatus;

pub type UrlType = String;
pub type FieldName = String;
pub type Timestamp = u128;
pub type TimeoutSecs = u64;

pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
