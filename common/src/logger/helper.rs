use anyhow::Error;
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {t} - {m}{n}";
const LOG_DIR: &str = "logs";

pub fn message(log_type: &String, log_level: &String) -> String {
    if log_type.is_empty() {
        format!("Logging is disabled (level {})", log_level)
    } else {
        format!("Logging to {} with level {}", log_type, log_level)
    }
}

pub fn log_to_console(filters: &str) -> Result<(), Error> {
    env_logger::Builder::new()
        .parse_filters(filters)
        .target(env_logger::Target::Stderr)
        .try_init()?;
    Ok(())
}

pub fn log_to_file(file_name: &str, level: LevelFilter) -> Result<(), Error> {
    let appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(format!("{}/{}.log", LOG_DIR, file_name.replace(' ', "_")))?;
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(Root::builder().appender("file").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}
