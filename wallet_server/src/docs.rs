use utoipa::OpenApi;

use crate::domains::wallet::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::domains::wallet::handlers::wallet_handler::list_wallets,
        crate::domains::wallet::handlers::wallet_handler::get_wallet,
        crate::domains::wallet::handlers::wallet_handler::create_wallet,
        crate::domains::wallet::handlers::wallet_handler::update_balance
    ),
    components(schemas(
        Wallet,
        UpdateBalanceRequest,
        ErrorResponse
    )),
    tags(
        (name = "Wallets", description = "Wallet ledger API endpoints")
    ),
    info(
        title = "Wallet Ledger API",
        description = "In-memory wallet balance ledger with a minimum-balance floor",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// OpenAPI JSON 경로
pub const OPENAPI_PATH: &str = "/docs/openapi.json";
/// Swagger UI 경로 (두 세그먼트라서 `/:username` 과 겹치지 않음)
pub const SWAGGER_UI_PATH: &str = "/docs/ui";
