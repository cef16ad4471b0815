use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

/// 지갑 관련 에러
/// Wallet-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// 지갑을 찾을 수 없음
    /// Wallet not found
    #[error("Wallet not found: username={username}")]
    NotFound { username: String },

    /// 최소 잔액 미만으로 내려갈 수 없음
    /// Update would drive the balance below the configured floor
    #[error("Balance cannot go below the minimum: username={username}, balance={balance}, delta={delta}, minimum={minimum}")]
    BalanceLimit {
        username: String,
        balance: i64,
        delta: i64,
        minimum: i64,
    },

    /// 잔액 오버플로우
    /// Balance arithmetic overflow
    #[error("Balance overflow: username={username}, balance={balance}, delta={delta}")]
    BalanceOverflow {
        username: String,
        balance: i64,
        delta: i64,
    },

    /// 빈 사용자 이름
    /// Username must not be empty
    #[error("Invalid username: must not be empty")]
    InvalidUsername,

    /// 내부 서버 에러 (서비스/저장소 불변식 위반)
    /// Internal server error (broken service/store invariant)
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// WalletError를 HTTP 응답으로 변환
impl From<WalletError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: WalletError) -> Self {
        let (status, message) = match &err {
            WalletError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            WalletError::BalanceLimit { .. } => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            WalletError::BalanceOverflow { .. } => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            WalletError::InvalidUsername => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            // 내부 상세 내용은 로그에만 남기고 응답에는 노출하지 않음
            WalletError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        (status, Json(json!({ "error": message })))
    }
}
