pub mod helper;

/**
 *** The file is to setup logger to either:
 *** - write to file
 *** - output to console (stderr, stdout is reserved for the check result)
 *** The default option if RUST_LOG is not specified is INFO logging
 **/
use crate::logger::helper::{log_to_console, log_to_file, message};
use lazy_static::lazy_static;
use log::LevelFilter;
use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

static GLOBAL_INIT_LOGGING: AtomicBool = AtomicBool::new(false);

lazy_static! {
    static ref RUST_LOG: String = env::var("RUST_LOG").unwrap_or(String::from("info")); // If not specified, assume logging level is INFO
    static ref RUST_LOG_TYPE: String = env::var("RUST_LOG_TYPE").unwrap_or(String::from("console")); // If not specified, assume we're logging to console
}

pub fn init_logger(file_name: &str) -> String {
    if GLOBAL_INIT_LOGGING
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return "Logging already inited".to_string();
    }
    let level = LevelFilter::from_str(RUST_LOG.as_str()).unwrap_or(LevelFilter::Info);

    /* Logging to file */
    if RUST_LOG_TYPE.to_lowercase().as_str() == "file" {
        return match log_to_file(file_name, level) {
            Ok(_) => message(&RUST_LOG_TYPE, &RUST_LOG),
            Err(err) => format!("Cannot init file logging: {}", err),
        };
    }

    /* Logging to console */
    if RUST_LOG_TYPE.to_lowercase().as_str() == "console" {
        return match log_to_console(&RUST_LOG) {
            Ok(_) => message(&RUST_LOG_TYPE, &RUST_LOG),
            Err(err) => format!("Cannot init console logging: {}", err),
        };
    }

    message(&Default::default(), &RUST_LOG) /* Not logging to anything */
}
