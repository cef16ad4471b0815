use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::{Mutex, MutexGuard};
use crate::domains::wallet::models::Wallet;

/// 지갑 테이블 (username → Wallet)
/// In-memory wallet table keyed by username
pub type WalletTable = HashMap<String, Wallet>;

// 인메모리 데이터베이스
// 역할: 모든 지갑 상태의 유일한 소유자
// In-memory database; the single owner of all wallet state.
// 프로세스 재시작 시 데이터는 유지되지 않음
#[derive(Clone, Default)]
pub struct Database {
    wallets: Arc<Mutex<WalletTable>>,
}

impl Database {
    // 빈 데이터베이스 생성
    // Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    // 초기 데이터로 생성 (테스트/시드용)
    // Create a database seeded with wallets
    pub fn with_wallets(wallets: impl IntoIterator<Item = Wallet>) -> Self {
        let table = wallets
            .into_iter()
            .map(|wallet| (wallet.username.clone(), wallet))
            .collect();

        Self {
            wallets: Arc::new(Mutex::new(table)),
        }
    }

    // 트랜잭션 시작 (전체 테이블 배타 잠금)
    // Begin an exclusive critical section over the whole table.
    // 가드가 drop될 때 잠금 해제됨
    pub fn begin(&self) -> MutexGuard<'_, WalletTable> {
        self.wallets.lock()
    }
}
