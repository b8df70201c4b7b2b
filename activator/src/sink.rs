//! Status sinks
//!
//! Where activation outcomes are delivered once decided. The default sink
//! only logs; the HTTP sink additionally posts the outcome to the
//! orchestrator's `/status` endpoint.

use crate::ActivationOutcome;
use async_trait::async_trait;
use reqwest::header;
use url::Url;

/// Receives the outcome of every completed activation attempt
#[async_trait]
pub trait StatusSink: Send + Sync {
    /// Report the outcome for a customer. Delivery failures are handled
    /// inside the sink and never surface to the caller.
    async fn report(&self, customer_id: &str, outcome: ActivationOutcome);
}

/// Logs the status
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[async_trait]
impl StatusSink for LogSink {
    async fn report(&self, customer_id: &str, outcome: ActivationOutcome) {
        log_status(customer_id, outcome);
    }
}

fn log_status(customer_id: &str, outcome: ActivationOutcome) {
    tracing::info!(
        customer_id,
        status = %outcome,
        "Status for customerId {}: {}",
        customer_id,
        outcome
    );
}

/// Logs the status and posts it to the orchestrator as plain text
#[derive(Debug, Clone)]
pub struct HttpSink {
    http: reqwest::Client,
    status_url: Url,
}

impl HttpSink {
    /// Create a sink posting to `status_url` with a shared HTTP client
    pub fn new(http: reqwest::Client, status_url: Url) -> Self {
        Self { http, status_url }
    }

    /// Endpoint statuses are posted to
    pub fn status_url(&self) -> &Url {
        &self.status_url
    }
}

#[async_trait]
impl StatusSink for HttpSink {
    async fn report(&self, customer_id: &str, outcome: ActivationOutcome) {
        log_status(customer_id, outcome);

        let result = self
            .http
            .post(self.status_url.clone())
            .header(header::CONTENT_TYPE, "text/plain")
            .body(outcome.as_str())
            .send()
            .await;

        match result {
            Ok(resp) if resp.status().is_success() => {
                tracing::debug!(customer_id, "Status delivered to orchestrator");
            }
            Ok(resp) => {
                tracing::error!(
                    customer_id,
                    "Failed to send status to orchestrator for customerId: {}. HTTP Status: {}",
                    customer_id,
                    resp.status().as_u16()
                );
            }
            Err(e) if e.is_connect() => {
                tracing::error!(
                    "Failed to connect to orchestrator at {}. Service might not be running.",
                    self.status_url
                );
            }
            Err(e) => {
                tracing::error!(
                    customer_id,
                    error = %e,
                    "Error while sending status to orchestrator for customerId: {}",
                    customer_id
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        (logs, tracing::subscriber::set_default(subscriber))
    }

    #[tokio::test]
    async fn test_log_sink_records_status() {
        let (logs, _guard) = capture_logs();

        LogSink.report("12345", ActivationOutcome::Active).await;
        LogSink.report("777", ActivationOutcome::Error).await;

        let text = logs.contents();
        assert!(text.contains("Status for customerId 12345: ACTIVE"));
        assert!(text.contains("Status for customerId 777: ERROR"));
    }

    #[tokio::test]
    async fn test_http_sink_logs_status_and_connection_refused() {
        let (logs, _guard) = capture_logs();
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = Url::parse(&format!("http://127.0.0.1:{port}/status")).unwrap();
        let sink = HttpSink::new(reqwest::Client::new(), url);

        sink.report("12345", ActivationOutcome::Inactive).await;

        let text = logs.contents();
        assert!(text.contains("Status for customerId 12345: INACTIVE"));
        assert!(text.contains("Failed to connect to orchestrator at"));
        assert_eq!(sink.status_url().path(), "/status");
    }
}
