pub mod checks;
pub mod config;
pub mod executor;
pub mod models;
pub mod probe;

/// First word of every result line.
pub const CHECK_PREFIX: &str = "JSON";
pub const LOGGER_NAME: &str = "check_json";
