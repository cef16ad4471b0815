use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 지갑
/// Wallet: the only entity tracked by the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = Wallet)]
pub struct Wallet {
    /// 사용자 이름 (고유 키)
    /// Username (unique key)
    #[schema(example = "amy")]
    pub username: String,

    /// 잔액
    /// Balance
    #[schema(example = 100)]
    pub balance: i64,
}

impl Wallet {
    pub fn new(username: impl Into<String>, balance: i64) -> Self {
        Self {
            username: username.into(),
            balance,
        }
    }
}

/// 잔액 변경 요청
/// Update balance request
///
/// `balance`는 절대값이 아니라 증감량(delta)으로 해석됨
/// (입금은 양수, 출금은 음수)
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = UpdateBalanceRequest)]
pub struct UpdateBalanceRequest {
    /// 증감량
    /// Signed amount added to the current balance
    #[schema(example = -50)]
    pub balance: i64,
}

/// 에러 응답
/// Error response body
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = ErrorResponse)]
pub struct ErrorResponse {
    #[schema(example = "Wallet not found: username=amy")]
    pub error: String,
}
