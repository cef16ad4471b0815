use crate::shared::config::LedgerConfig;
use crate::shared::database::Database;
use crate::domains::wallet::services::state::WalletState;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 역할: 시작 시 Store → Service 를 조립하고 핸들러에 주입
#[derive(Clone)]
pub struct AppState {
    pub wallet_state: WalletState,
}

impl AppState {
    /// Create AppState with database and ledger config
    /// 모든 도메인 State를 초기화하고 조합
    pub fn new(db: Database, config: LedgerConfig) -> Self {
        Self {
            wallet_state: WalletState::new(db, config),
        }
    }
}
