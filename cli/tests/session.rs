//! Interactive sessions against the local mock southbound

use axum::http::StatusCode;
use pin_activator::{ActivationOutcome, ActivationRequest, ActivatorConfig, PinActivator};
use pin_activator_cli::mock::{reference_fixtures, Fixture, MockSouthbound};
use pin_activator_cli::prompt::{run_session, SessionSummary};
use std::net::{Ipv4Addr, SocketAddr};

fn any_port() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, 0))
}

fn activator_for(server: &MockSouthbound) -> PinActivator {
    PinActivator::new(ActivatorConfig {
        southbound_url: server.base_url(),
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_reference_scenarios() {
    let server = MockSouthbound::start(any_port(), reference_fixtures()).await.unwrap();
    let activator = activator_for(&server);

    let input = "12345\nAA:BB:CC:DD:EE:FF\n\
                 12345\nAA:BB:CC:DD:EE:AA\n\
                 11111\nAA:BB:CC:DD:EE:FF\n\
                 22222\n01-23-45-67-89-AB\n\
                 exit\n";
    let mut out = Vec::new();
    let summary = run_session(&activator, input.as_bytes(), &mut out).await.unwrap();

    assert_eq!(
        summary,
        SessionSummary {
            attempts: 4,
            active: 1,
            inactive: 3,
            errors: 0,
            transport_failures: 0,
            rejected_inputs: 0,
        }
    );

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Activation status for customerId 12345: "));
    assert!(text.contains("Activation status for customerId 11111: "));
    assert!(text.contains("ACTIVE"));

    drop(activator);
    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reference_mock_never_yields_error() {
    let server = MockSouthbound::start(any_port(), reference_fixtures()).await.unwrap();
    let activator = activator_for(&server);

    for customer_id in ["12345", "11111", "0", "99999999"] {
        for mac in ["AA:BB:CC:DD:EE:FF", "AA:BB:CC:DD:EE:AA", "aa:bb:cc:dd:ee:ff", "00-00-00-00-00-00"] {
            let request = ActivationRequest::new(customer_id, mac).unwrap();
            let outcome = activator.activate(&request).await.unwrap();
            assert_ne!(outcome, ActivationOutcome::Error, "{customer_id} {mac}");
        }
    }

    drop(activator);
    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_extra_fixture_reaches_error() {
    let mut fixtures = reference_fixtures();
    fixtures.push(Fixture::new("500", "AA:BB:CC:DD:EE:FF", StatusCode::INTERNAL_SERVER_ERROR));
    let server = MockSouthbound::start(any_port(), fixtures).await.unwrap();
    let activator = activator_for(&server);

    let request = ActivationRequest::new("500", "AA:BB:CC:DD:EE:FF").unwrap();
    assert_eq!(activator.activate(&request).await.unwrap(), ActivationOutcome::Error);

    drop(activator);
    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_session_survives_unreachable_southbound() {
    let server = MockSouthbound::start(any_port(), reference_fixtures()).await.unwrap();
    let activator = activator_for(&server);
    server.shutdown().await.unwrap();

    let mut out = Vec::new();
    let input = "12345\nAA:BB:CC:DD:EE:FF\nexit\n";
    let summary = run_session(&activator, input.as_bytes(), &mut out).await.unwrap();

    assert_eq!(summary.attempts, 1);
    assert_eq!(summary.transport_failures, 1);
    assert_eq!(summary.active + summary.inactive + summary.errors, 0);
    assert!(String::from_utf8(out)
        .unwrap()
        .contains("Activation failed for customerId 12345"));
}

#[tokio::test]
async fn test_mock_unmatched_routes_are_not_found() {
    let server = MockSouthbound::start(any_port(), reference_fixtures()).await.unwrap();
    let http = reqwest::Client::new();

    let resp = http.get(format!("{}/activate", server.base_url())).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    let resp = http
        .post(format!("{}/deactivate", server.base_url()))
        .body("{}")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    let resp = http
        .post(format!("{}/activate", server.base_url()))
        .header("content-type", "application/json")
        .body(r#"{"macAddress":"AA:BB:CC:DD:EE:FF","customerId":"12345"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);

    drop(http);
    server.shutdown().await.unwrap();
}
