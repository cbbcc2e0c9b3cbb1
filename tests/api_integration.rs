//! Router integration tests
//!
//! These tests drive the full application router, middleware included,
//! without binding a socket.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use peochain_gateway::config::Settings;
use peochain_gateway::server::{create_app, AppState};

const NETWORK_STATUSES: [&str; 4] = ["running", "synced", "pending", "maintenance"];

fn test_app() -> Router {
    create_app(AppState::with_seed(Settings::default(), 2024))
}

async fn send(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, Option<String>, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

fn is_pseudo_address(addr: &str) -> bool {
    match addr.strip_prefix("0xDEMO") {
        Some(hex) => {
            (1..=16).contains(&hex.len())
                && hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        }
        None => false,
    }
}

#[tokio::test]
async fn health_returns_exact_body() {
    let (status, content_type, body) = send(test_app(), Method::GET, "/health", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, r#"{"status":"ok"}"#);
}

#[tokio::test]
async fn status_reports_known_network_state() {
    let app = test_app();

    for _ in 0..20 {
        let (status, content_type, body) = send(app.clone(), Method::GET, "/status", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let json: Value = serde_json::from_str(&body).unwrap();
        let network_status = json["network_status"].as_str().unwrap();
        assert!(NETWORK_STATUSES.contains(&network_status), "got {}", network_status);
        assert!(!json["description"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn start_node_echoes_node_type() {
    let (status, _, body) = send(
        test_app(),
        Method::POST,
        "/start-node",
        r#"{"node_type":"validator","validator_id":"v1"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "message": "Node start request received",
            "node_type": "validator"
        })
    );
}

#[tokio::test]
async fn start_node_rejects_malformed_json() {
    let (status, content_type, body) =
        send(test_app(), Method::POST, "/start-node", "{bad}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert!(body.starts_with("Invalid request body: "));
}

#[tokio::test]
async fn start_node_accepts_body_without_content_type() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/start-node")
        .body(Body::from(r#"{"node_type":"observer"}"#))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn deploy_contract_returns_pseudo_address() {
    let (status, content_type, body) = send(
        test_app(),
        Method::POST,
        "/deploy-contract",
        r#"{"contract_type":"erc20","parameters":"supply=1000"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["message"], "Contract deploy request received");
    assert_eq!(json["contract_type"], "erc20");
    let address = json["contract_address"].as_str().unwrap();
    assert!(is_pseudo_address(address), "got {}", address);
}

#[tokio::test]
async fn deploy_contract_rejects_malformed_json() {
    let (status, _, body) = send(test_app(), Method::POST, "/deploy-contract", "{bad}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Invalid contract request"));
}

#[tokio::test]
async fn wrong_method_is_not_allowed() {
    let (status, _, _) = send(test_app(), Method::POST, "/health", "").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _, _) = send(test_app(), Method::GET, "/start-node", "").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _, _) = send(test_app(), Method::GET, "/nodes", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn start_node_accepts_lenient_json_forms() {
    let cases = [
        (r#"{"node_type":null}"#, ""),
        ("null", ""),
        (r#"{"node_type":"a"} {"x":1}"#, "a"),
        (r#"{"Node_Type":"validator"}"#, "validator"),
    ];

    for (input, expected) in cases {
        let (status, _, body) = send(test_app(), Method::POST, "/start-node", input).await;
        assert_eq!(status, StatusCode::OK, "input {}", input);

        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["node_type"], expected, "input {}", input);
    }
}

#[tokio::test]
async fn deploy_contract_accepts_null_contract_type() {
    let (status, _, body) = send(
        test_app(),
        Method::POST,
        "/deploy-contract",
        r#"{"contract_type":null}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["contract_type"], "");
    assert!(is_pseudo_address(json["contract_address"].as_str().unwrap()));
}
