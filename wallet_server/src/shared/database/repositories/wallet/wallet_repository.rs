use anyhow::{bail, Result};
use crate::domains::wallet::models::Wallet;
use crate::shared::database::WalletTable;

/// 지갑 리포지토리
/// 역할: 잠긴 지갑 테이블 위에서 동작하는 저장소 연산
///
/// 사용법:
/// ```ignore
/// let mut tx = db.begin();
/// let mut repo = WalletRepository::new(&mut tx);
/// let wallet = repo.create("amy", 100);
/// ```
///
/// 반환값은 항상 복사본이므로 호출자가 저장된 레코드를 직접 수정할 수 없음
pub struct WalletRepository<'a> {
    tx: &'a mut WalletTable,
}

impl<'a> WalletRepository<'a> {
    pub fn new(tx: &'a mut WalletTable) -> Self {
        Self { tx }
    }

    /// 모든 지갑 조회 (순서 보장 없음)
    /// Get all wallets, in unspecified order
    pub fn find_all(&self) -> Vec<Wallet> {
        self.tx.values().cloned().collect()
    }

    /// 지갑 존재 여부
    /// Check whether a wallet exists
    pub fn exists(&self, username: &str) -> bool {
        self.tx.contains_key(username)
    }

    /// 사용자 이름으로 지갑 조회
    /// Get wallet by username
    ///
    /// 없으면 None (잔액 0인 빈 지갑을 반환하지 않음)
    pub fn find_by_username(&self, username: &str) -> Option<Wallet> {
        self.tx.get(username).cloned()
    }

    /// 지갑 생성
    /// Create wallet
    ///
    /// 존재 여부 확인은 호출자(서비스)의 책임
    pub fn create(&mut self, username: &str, initial_balance: i64) -> Wallet {
        let wallet = Wallet::new(username, initial_balance);
        self.tx.insert(username.to_string(), wallet.clone());
        wallet
    }

    /// 잔액 덮어쓰기 (검증 없음)
    /// Overwrite balance unconditionally
    ///
    /// 지갑이 없으면 서비스와 저장소 사이의 불변식이 깨진 것
    pub fn set_balance(&mut self, username: &str, new_balance: i64) -> Result<Wallet> {
        let Some(wallet) = self.tx.get_mut(username) else {
            bail!("Wallet vanished before balance update: username={}", username);
        };

        wallet.balance = new_balance;
        Ok(wallet.clone())
    }
}
