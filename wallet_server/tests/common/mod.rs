// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 서비스/HTTP 앱 셋업과 요청 전송 헬퍼 제공
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let app = setup_app();
//     let (status, _, body) = send(&app, Method::GET, "/", None).await;
// }
// ```
// =====================================================
#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use wallet_server::domains::wallet::services::WalletService;
use wallet_server::routes::create_app;
use wallet_server::shared::config::LedgerConfig;
use wallet_server::shared::database::Database;
use wallet_server::shared::services::AppState;

// 테스트용 상수
pub const INITIAL_BALANCE: i64 = 100;
pub const MINIMUM_BALANCE: i64 = 0;

pub fn test_config() -> LedgerConfig {
    LedgerConfig {
        initial_balance_amount: INITIAL_BALANCE,
        minimum_balance_amount: MINIMUM_BALANCE,
    }
}

/// 서비스 생성 (빈 저장소)
pub fn setup_service() -> WalletService {
    WalletService::new(Database::new(), test_config())
}

/// 서비스 생성 (설정 지정)
pub fn setup_service_with(initial: i64, minimum: i64) -> WalletService {
    WalletService::new(
        Database::new(),
        LedgerConfig {
            initial_balance_amount: initial,
            minimum_balance_amount: minimum,
        },
    )
}

/// HTTP 앱 생성 (빈 저장소)
pub fn setup_app() -> Router {
    let app_state = AppState::new(Database::new(), test_config());
    create_app(app_state).expect("Failed to build app")
}

/// 요청 전송 후 (상태 코드, 헤더, JSON 본문) 반환
///
/// 본문이 비어 있으면 `Value::Null`
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let request = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => request
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("Failed to build request");

    send_request(app, request).await
}

/// 원시 본문으로 요청 전송 (잘못된 JSON 테스트용)
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, HeaderMap, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    send_request(app, request).await
}

async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Request failed");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, headers, body)
}
