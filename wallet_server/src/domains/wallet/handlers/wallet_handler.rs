use crate::domains::wallet::models::{ErrorResponse, UpdateBalanceRequest, Wallet};
use crate::domains::wallet::routes::WalletAction;
use crate::shared::errors::WalletError;
use crate::shared::router::PathParams;
use crate::shared::services::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// 라우팅 테이블이 선택한 액션 실행
/// Run the action selected by the route table
///
/// 모든 에러는 여기서 HTTP 응답으로 변환됨
pub async fn handle(
    app_state: AppState,
    action: WalletAction,
    params: PathParams,
    body: Bytes,
) -> Response {
    let state = State(app_state);

    let result = match action {
        WalletAction::ListWallets => Ok(list_wallets(state).await.into_response()),
        WalletAction::GetWallet => match username_param(&params) {
            Ok(username) => get_wallet(state, username).await.map(IntoResponse::into_response),
            Err(e) => Err(e),
        },
        WalletAction::CreateWallet => match username_param(&params) {
            Ok(username) => create_wallet(state, username).await.map(IntoResponse::into_response),
            Err(e) => Err(e),
        },
        WalletAction::UpdateBalance => match username_param(&params) {
            Ok(username) => update_balance(state, username, body)
                .await
                .map(IntoResponse::into_response),
            Err(e) => Err(e),
        },
    };

    result.unwrap_or_else(IntoResponse::into_response)
}

/// 모든 지갑 조회 핸들러
/// List wallets handler
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Wallets retrieved successfully", body = [Wallet])
    ),
    tag = "Wallets"
)]
pub async fn list_wallets(State(app_state): State<AppState>) -> Json<Vec<Wallet>> {
    let wallets = app_state.wallet_state.wallet_service.list_wallets();

    Json(wallets)
}

/// 지갑 조회 핸들러
/// Get wallet by username handler
#[utoipa::path(
    get,
    path = "/{username}",
    params(
        ("username" = String, Path, description = "Wallet username")
    ),
    responses(
        (status = 200, description = "Wallet retrieved successfully", body = Wallet),
        (status = 404, description = "Wallet not found", body = ErrorResponse)
    ),
    tag = "Wallets"
)]
pub async fn get_wallet(
    State(app_state): State<AppState>,
    username: String,
) -> Result<Json<Wallet>, (StatusCode, Json<serde_json::Value>)> {
    let wallet = app_state
        .wallet_state
        .wallet_service
        .get_wallet(&username)
        .map_err(|e: WalletError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(wallet))
}

/// 지갑 생성 핸들러 (이미 있으면 기존 지갑 반환)
/// Create wallet handler (idempotent)
#[utoipa::path(
    put,
    path = "/{username}",
    params(
        ("username" = String, Path, description = "Wallet username")
    ),
    responses(
        (status = 200, description = "Wallet created or already existing", body = Wallet),
        (status = 400, description = "Invalid username", body = ErrorResponse)
    ),
    tag = "Wallets"
)]
pub async fn create_wallet(
    State(app_state): State<AppState>,
    username: String,
) -> Result<Json<Wallet>, (StatusCode, Json<serde_json::Value>)> {
    let wallet = app_state
        .wallet_state
        .wallet_service
        .create_wallet(&username)
        .map_err(|e: WalletError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(wallet))
}

/// 잔액 변경 핸들러
/// Update balance handler
///
/// 요청 본문의 `balance`는 증감량으로 적용됨
#[utoipa::path(
    post,
    path = "/{username}",
    params(
        ("username" = String, Path, description = "Wallet username")
    ),
    request_body = UpdateBalanceRequest,
    responses(
        (status = 201, description = "Balance updated successfully", body = Wallet),
        (status = 400, description = "Bad request (invalid body or balance below minimum)", body = ErrorResponse),
        (status = 404, description = "Wallet not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Wallets"
)]
pub async fn update_balance(
    State(app_state): State<AppState>,
    username: String,
    body: Bytes,
) -> Result<(StatusCode, Json<Wallet>), (StatusCode, Json<serde_json::Value>)> {
    // 1. 요청 본문 파싱
    let Json(request) = Json::<UpdateBalanceRequest>::from_bytes(&body).map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": format!("Invalid request body: {}", rejection.body_text())
            })),
        )
    })?;

    // 2. 잔액 변경
    let wallet = app_state
        .wallet_state
        .wallet_service
        .update_balance(&username, request.balance)
        .map_err(|e: WalletError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok((StatusCode::CREATED, Json(wallet)))
}

fn username_param(params: &PathParams) -> Result<String, (StatusCode, Json<serde_json::Value>)> {
    params
        .named("username")
        .map(str::to_string)
        .ok_or_else(|| {
            tracing::error!(?params, "Route matched without a username parameter");
            WalletError::Internal("missing username parameter".to_string()).into()
        })
}
