// Wallet domain routes
// 지갑 도메인 라우터
use axum::http::Method;
use crate::shared::router::{PatternError, RouteTable};

/// 라우트에 바인딩되는 액션
/// Action bound to each wallet route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletAction {
    ListWallets,
    GetWallet,
    CreateWallet,
    UpdateBalance,
}

/// Create wallet route table
/// 지갑 라우팅 테이블 생성
///
/// # Routes
/// - `GET  /`          - 모든 지갑 조회
/// - `GET  /:username` - 지갑 조회
/// - `PUT  /:username` - 지갑 생성 (멱등)
/// - `POST /:username` - 잔액 변경
pub fn create_wallet_routes() -> Result<RouteTable<WalletAction>, PatternError> {
    RouteTable::new()
        .route(Method::GET, "/", WalletAction::ListWallets)?
        .route(Method::GET, "/:username", WalletAction::GetWallet)?
        .route(Method::PUT, "/:username", WalletAction::CreateWallet)?
        .route(Method::POST, "/:username", WalletAction::UpdateBalance)
}
