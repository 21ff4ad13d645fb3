use crate::checks::{find_check, get_checks, run_check, CheckError, FieldCheck};
use crate::config::{parse_args, CheckConfig};
use crate::executor::{DocumentFetcher, HttpRequestExecutor};
use crate::models::{CheckMkReport, Document};
use common::util::get_current_time_secs;
use log::{debug, info};
use std::ffi::OsString;
use std::sync::Arc;

/// Fetch, extract, check. Every path ends in exactly one report and nothing
/// runs after it is produced.
pub struct JsonProbe {
    fetcher: Arc<dyn DocumentFetcher>,
    checks: Vec<Arc<dyn FieldCheck>>,
}

impl JsonProbe {
    pub fn new(fetcher: Arc<dyn DocumentFetcher>) -> Self {
        JsonProbe {
            fetcher,
            checks: get_checks(),
        }
    }

    pub async fn run(&self, config: &CheckConfig, now: f64) -> CheckMkReport {
        let check = match find_check(&self.checks, &config.check_type) {
            Ok(check) => check,
            Err(err) => return err.into(),
        };
        let url = config.url();
        info!("Check field {} of {} with {} check", &config.field, &url, check.get_name());
        let document = match self.fetcher.fetch(&url, config.timeout).await {
            Ok(document) => document,
            Err(err) => {
                debug!("Fetch {} failed: {:?}", &url, &err);
                return err.into();
            }
        };
        Self::check_document(check.as_ref(), config, &document, now)
    }

    /// Runs the configured check on an already fetched document.
    pub fn evaluate(&self, config: &CheckConfig, document: &Document, now: f64) -> CheckMkReport {
        match find_check(&self.checks, &config.check_type) {
            Ok(check) => Self::check_document(check.as_ref(), config, document, now),
            Err(err) => err.into(),
        }
    }

    fn check_document(
        check: &dyn FieldCheck,
        config: &CheckConfig,
        document: &Document,
        now: f64,
    ) -> CheckMkReport {
        match document.get_field(&config.field) {
            Some(value) => run_check(check, config, &value, now),
            None => CheckError::FieldNotFound(config.field.clone()).into(),
        }
    }
}

/// Whole invocation from raw arguments to report, using the real clock and
/// HTTP client.
pub async fn run_from_args<I, T>(args: I) -> CheckMkReport
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = match parse_args(args) {
        Ok(config) => config,
        Err(err) => return err.into(),
    };
    let executor = match HttpRequestExecutor::new() {
        Ok(executor) => executor,
        Err(err) => {
            return CheckMkReport::new_unknown_report(format!("cannot create http client: {}", err))
        }
    };
    JsonProbe::new(Arc::new(executor))
        .run(&config, get_current_time_secs())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use common::tasks::http_request::HttpRequestError;
    use common::{CheckMkStatus, TimeoutSecs};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use test_util::{closed_port, init_logging, start_document_server, MOCK_NOW};

    /// Serves a fixed result and counts calls.
    struct MockFetcher {
        result: Result<Document, HttpRequestError>,
        calls: AtomicUsize,
    }

    impl MockFetcher {
        fn new(result: Result<Document, HttpRequestError>) -> Arc<Self> {
            Arc::new(MockFetcher {
                result,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl DocumentFetcher for MockFetcher {
        async fn fetch(&self, _url: &str, _timeout: TimeoutSecs) -> Result<Document, HttpRequestError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn document(value: serde_json::Value) -> Document {
        Document::from_slice(value.to_string().as_bytes()).unwrap()
    }

    fn config(check_type: &str, field: &str) -> CheckConfig {
        CheckConfig {
            hostname: "localhost".to_string(),
            port: "80".to_string(),
            path: "status".to_string(),
            timeout: 10,
            field: field.to_string(),
            check_type: check_type.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_failures_short_circuit() {
        let url = "http://localhost:80/status".to_string();
        let cases = vec![
            (
                HttpRequestError::RemoteError {
                    url: url.clone(),
                    message: "HTTP 503 Service Unavailable".to_string(),
                },
                CheckMkStatus::Unknown,
            ),
            (
                HttpRequestError::ConnectionError {
                    url: url.clone(),
                    message: "connection refused".to_string(),
                },
                CheckMkStatus::Critical,
            ),
            (
                HttpRequestError::Timeout {
                    url: url.clone(),
                    timeout: 10,
                },
                CheckMkStatus::Warning,
            ),
        ];
        for (error, status) in cases {
            let fetcher = MockFetcher::new(Err(error));
            let probe = JsonProbe::new(fetcher.clone());
            // The field does not exist, so reaching extraction would be UNKNOWN.
            let report = probe.run(&config("string", "missing"), MOCK_NOW).await;
            assert_eq!(report.status, status);
            assert!(report.status_detail.contains(&url));
            assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test]
    async fn test_timeout_message_names_timeout() {
        let fetcher = MockFetcher::new(Err(HttpRequestError::Timeout {
            url: "http://localhost:80/status".to_string(),
            timeout: 10,
        }));
        let report = JsonProbe::new(fetcher)
            .run(&config("string", "status"), MOCK_NOW)
            .await;
        assert_eq!(
            report.to_string(),
            "JSON WARNING - timeout after 10 seconds while fetching http://localhost:80/status"
        );
    }

    #[tokio::test]
    async fn test_missing_field_is_unknown() {
        let fetcher = MockFetcher::new(Ok(document(json!({"status": "green"}))));
        let report = JsonProbe::new(fetcher)
            .run(&config("string", "health"), MOCK_NOW)
            .await;
        assert_eq!(
            report,
            CheckMkReport::new_unknown_report("field 'health' not found in response")
        );
    }

    #[tokio::test]
    async fn test_unknown_type_skips_fetch() {
        let fetcher = MockFetcher::new(Ok(document(json!({"status": "green"}))));
        let probe = JsonProbe::new(fetcher.clone());
        let mut config = config("foo", "status");
        config.ok_value = Some("green".to_string());
        config.warning_value = Some("1".to_string());
        config.critical_value = Some("2".to_string());
        let report = probe.run(&config, MOCK_NOW).await;
        assert_eq!(report.status, CheckMkStatus::Unknown);
        assert!(report.status_detail.contains("foo"));
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_dispatch_each_type() {
        let doc = json!({
            "color": "yellow",
            "healthy": "true",
            "queue": 150,
            "updated_at": 1_699_999_955u64,
        });
        let fetcher = MockFetcher::new(Ok(document(doc)));
        let probe = JsonProbe::new(fetcher);

        let mut string_config = config("String", "color");
        string_config.critical_value = Some("red".to_string());
        string_config.warning_value = Some("yellow".to_string());
        string_config.ok_value = Some("green".to_string());
        assert_eq!(probe.run(&string_config, MOCK_NOW).await.status, CheckMkStatus::Warning);

        let mut bool_config = config("BOOL", "healthy");
        bool_config.ok_value = Some("TRUE".to_string());
        assert_eq!(probe.run(&bool_config, MOCK_NOW).await.status, CheckMkStatus::Ok);

        let mut threshold_config = config("threshold", "queue");
        threshold_config.warning_value = Some("100".to_string());
        threshold_config.critical_value = Some("300".to_string());
        assert_eq!(
            probe.run(&threshold_config, MOCK_NOW).await.status,
            CheckMkStatus::Warning
        );

        let mut timestamp_config = config("timestamp", "updated_at");
        timestamp_config.warning_value = Some("30".to_string());
        timestamp_config.critical_value = Some("600".to_string());
        assert_eq!(
            probe.run(&timestamp_config, MOCK_NOW).await.status,
            CheckMkStatus::Warning
        );
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let probe = JsonProbe::new(MockFetcher::new(Ok(Document::default())));
        let doc = document(json!({"queue": 150}));
        let mut config = config("threshold", "queue");
        config.warning_value = Some("100".to_string());
        config.critical_value = Some("300".to_string());
        let first = probe.evaluate(&config, &doc, MOCK_NOW);
        let second = probe.evaluate(&config, &doc, MOCK_NOW);
        assert_eq!(first, second);
        assert_eq!(first.status, CheckMkStatus::Warning);
    }

    #[tokio::test]
    async fn test_run_from_args_against_mock_server() {
        init_logging();
        let server = start_document_server("/health", &json!({"status": "green"})).await;
        let port = server.port().to_string();
        let report = run_from_args(vec![
            "check_json", "-H", "127.0.0.1", "-p", port.as_str(), "-u", "health", "-f", "status",
            "-v", "green", "-c", "red",
        ])
        .await;
        assert_eq!(
            report.to_string(),
            "JSON OK - status is 'green' (matches ok value)"
        );
        assert_eq!(report.exit_code(), 0);
    }

    #[tokio::test]
    async fn test_run_from_args_connection_refused() {
        init_logging();
        let port = closed_port().to_string();
        let report = run_from_args(vec![
            "check_json", "-H", "127.0.0.1", "-p", port.as_str(), "-u", "health", "-f", "status",
        ])
        .await;
        assert_eq!(report.status, CheckMkStatus::Critical);
        assert!(report
            .status_detail
            .contains(&format!("http://127.0.0.1:{}/health", port)));
    }

    #[tokio::test]
    async fn test_run_from_args_missing_argument() {
        let report = run_from_args(vec!["check_json", "-u", "health", "-f", "status"]).await;
        assert_eq!(
            report.to_string(),
            "JSON UNKNOWN - missing required argument --hostname"
        );
        assert_eq!(report.exit_code(), 3);
    }
}
