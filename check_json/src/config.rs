use clap::error::ErrorKind;
use clap::{Arg, ArgMatches, Command};
use common::util::digits_only;
use common::{FieldName, TimeoutSecs, UrlType};
use log::debug;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use thiserror::Error;

pub const DEFAULT_PORT: &str = "80";
pub const DEFAULT_TIMEOUT: &str = "10";
pub const DEFAULT_CHECK_TYPE: &str = "string";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("missing required argument --{0}")]
    MissingArgument(String),
    #[error("invalid timeout '{0}', expected a non-negative integer number of seconds")]
    InvalidTimeout(String),
    #[error("unknown check type '{0}'")]
    UnknownCheckType(String),
    #[error("{0}")]
    Usage(String),
}

/// Everything one invocation needs, assembled from the command line.
/// Operands stay raw text; each check coerces what it needs.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct CheckConfig {
    pub hostname: String,
    pub port: String,
    pub path: String,
    pub ssl: bool,
    pub timeout: TimeoutSecs,
    pub field: FieldName,
    pub check_type: String,
    pub ok_value: Option<String>,
    pub warning_value: Option<String>,
    pub critical_value: Option<String>,
}

impl CheckConfig {
    pub fn scheme(&self) -> &'static str {
        if self.ssl {
            "https"
        } else {
            "http"
        }
    }
    /// Host, port and path are inserted as given.
    pub fn url(&self) -> UrlType {
        format!(
            "{}://{}:{}/{}",
            self.scheme(),
            self.hostname,
            self.port,
            self.path
        )
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<Self, ConfigError> {
        let required = |name: &str| -> Result<String, ConfigError> {
            matches
                .value_of(name)
                .map(|value| value.to_string())
                .ok_or_else(|| ConfigError::MissingArgument(name.to_string()))
        };
        let optional = |name: &str| matches.value_of(name).map(|value| value.to_string());

        let hostname = required("hostname")?;
        let path = required("path")?;
        let field = required("field")?;
        let timeout = parse_timeout(matches.value_of("timeout").unwrap_or(DEFAULT_TIMEOUT))?;

        let config = CheckConfig {
            hostname,
            port: optional("port").unwrap_or_else(|| DEFAULT_PORT.to_string()),
            path,
            ssl: matches.is_present("ssl"),
            timeout,
            field,
            check_type: optional("type").unwrap_or_else(|| DEFAULT_CHECK_TYPE.to_string()),
            ok_value: optional("ok"),
            warning_value: optional("warning"),
            critical_value: optional("critical"),
        };
        debug!("Loaded check config: {:?}", &config);
        Ok(config)
    }
}

pub fn parse_timeout(value: &str) -> Result<TimeoutSecs, ConfigError> {
    digits_only(value)
        .and_then(|digits| digits.parse::<TimeoutSecs>().ok())
        .ok_or_else(|| ConfigError::InvalidTimeout(value.to_string()))
}

/// Parses the command line. `--help` and `--version` print and exit here,
/// every other clap failure becomes a [`ConfigError::Usage`].
pub fn parse_args<I, T>(args: I) -> Result<CheckConfig, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match create_check_app().try_get_matches_from(args) {
        Ok(matches) => CheckConfig::from_matches(&matches),
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            err.exit()
        }
        Err(err) => {
            let message = err.to_string();
            let first_line = message
                .lines()
                .find(|line| !line.trim().is_empty())
                .unwrap_or("invalid arguments")
                .trim_start_matches("error: ")
                .to_string();
            Err(ConfigError::Usage(first_line))
        }
    }
}

pub fn create_check_app() -> Command<'static> {
    Command::new("check_json")
        .version(env!("BUILD_VERSION"))
        .about("Fetch a JSON document over HTTP and check one of its fields")
        .arg(
            Arg::new("ssl")
                .long("ssl")
                .help("Use https instead of http")
                .takes_value(false),
        )
        .arg(
            Arg::new("hostname")
                .short('H')
                .long("hostname")
                .value_name("hostname")
                .help("Host to query")
                .takes_value(true),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("port")
                .help("Port to query")
                .default_value(DEFAULT_PORT)
                .takes_value(true),
        )
        .arg(
            Arg::new("path")
                .short('u')
                .long("path")
                .value_name("path")
                .help("Path and query string appended to the url")
                .takes_value(true),
        )
        .arg(
            Arg::new("field")
                .short('f')
                .long("field")
                .value_name("field")
                .help("Name of the field to check")
                .takes_value(true),
        )
        .arg(
            Arg::new("ok")
                .short('v')
                .long("ok")
                .value_name("ok")
                .help("Value that means OK")
                .allow_hyphen_values(true)
                .takes_value(true),
        )
        .arg(
            Arg::new("warning")
                .short('w')
                .long("warning")
                .value_name("warning")
                .help("Value or threshold that means WARNING")
                .allow_hyphen_values(true)
                .takes_value(true),
        )
        .arg(
            Arg::new("critical")
                .short('c')
                .long("critical")
                .value_name("critical")
                .help("Value or threshold that means CRITICAL")
                .allow_hyphen_values(true)
                .takes_value(true),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("timeout")
                .help("Request timeout in seconds, 0 disables it")
                .default_value(DEFAULT_TIMEOUT)
                .allow_hyphen_values(true)
                .takes_value(true),
        )
        .arg(
            Arg::new("type")
                .short('T')
                .long("type")
                .value_name("type")
                .help("Check type: string, threshold, bool or timestamp")
                .default_value(DEFAULT_CHECK_TYPE)
                .takes_value(true),
        )
}
