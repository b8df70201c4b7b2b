//! Local mock of the southbound activation endpoint
//!
//! Serves `POST /activate` from a fixed table of fixtures. A request body is
//! matched as JSON (key order and whitespace are ignored, values must match
//! exactly). Anything unmatched gets 404.

use anyhow::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Canned southbound response for one exact request body
#[derive(Debug, Clone)]
pub struct Fixture {
    pub customer_id: String,
    pub mac_address: String,
    pub status: StatusCode,
}

impl Fixture {
    pub fn new(customer_id: &str, mac_address: &str, status: StatusCode) -> Self {
        Self {
            customer_id: customer_id.into(),
            mac_address: mac_address.into(),
            status,
        }
    }

    fn body(&self) -> Value {
        json!({ "customerId": self.customer_id, "macAddress": self.mac_address })
    }
}

/// The three scenarios the southbound system is known to produce
pub fn reference_fixtures() -> Vec<Fixture> {
    vec![
        // Terminal activated
        Fixture::new("12345", "AA:BB:CC:DD:EE:FF", StatusCode::CREATED),
        // Terminal not registered
        Fixture::new("12345", "AA:BB:CC:DD:EE:AA", StatusCode::NOT_FOUND),
        // Terminal attached to a different customer
        Fixture::new("11111", "AA:BB:CC:DD:EE:FF", StatusCode::CONFLICT),
    ]
}

#[derive(Clone)]
struct MockState {
    fixtures: Arc<Vec<(Value, StatusCode)>>,
}

/// Router answering from `fixtures`
pub fn router(fixtures: Vec<Fixture>) -> Router {
    let state = MockState {
        fixtures: Arc::new(fixtures.iter().map(|f| (f.body(), f.status)).collect()),
    };

    Router::new()
        .route("/activate", post(activate).fallback(unmatched))
        .fallback(unmatched)
        .with_state(state)
}

async fn activate(State(state): State<MockState>, body: Bytes) -> StatusCode {
    let Ok(request) = serde_json::from_slice::<Value>(&body) else {
        tracing::debug!("Mock southbound: body is not JSON");
        return StatusCode::NOT_FOUND;
    };

    let status = state
        .fixtures
        .iter()
        .find(|(expected, _)| *expected == request)
        .map(|(_, status)| *status)
        .unwrap_or(StatusCode::NOT_FOUND);

    tracing::debug!(%request, status = status.as_u16(), "Mock southbound answered");
    status
}

async fn unmatched() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Running mock southbound server
pub struct MockSouthbound {
    local_addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl MockSouthbound {
    /// Bind `addr` (port 0 picks a free port) and serve in the background
    pub async fn start(addr: SocketAddr, fixtures: Vec<Fixture>) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        let app = router(fixtures);
        let (shutdown, signal) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = signal.await;
                })
                .await
        });

        tracing::info!("Mock southbound listening on {}", local_addr);
        Ok(Self { local_addr, shutdown, handle })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Base URL to hand to the activator
    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Stop accepting requests and wait for the server task
    pub async fn shutdown(self) -> Result<()> {
        let _ = self.shutdown.send(());
        self.handle.await??;
        tracing::info!("Mock southbound stopped");
        Ok(())
    }
}
