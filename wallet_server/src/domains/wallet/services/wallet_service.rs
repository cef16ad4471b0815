use crate::shared::config::LedgerConfig;
use crate::shared::database::{Database, WalletRepository};
use crate::shared::errors::WalletError;
use crate::domains::wallet::models::Wallet;

/// 지갑 서비스
/// 역할: 저장소 위에서 원장 규칙을 적용
/// WalletService: existence checks, idempotent creation, balance floor
///
/// 여러 저장소 호출을 조합하는 연산(생성, 잔액 변경)은
/// 하나의 잠금 구간 안에서 수행되어 동시 요청 간 갱신 손실이 없음
#[derive(Clone)]
pub struct WalletService {
    db: Database,
    config: LedgerConfig,
}

impl WalletService {
    /// 생성자
    /// Constructor
    pub fn new(db: Database, config: LedgerConfig) -> Self {
        Self { db, config }
    }

    /// 모든 지갑 조회
    /// List all wallets
    pub fn list_wallets(&self) -> Vec<Wallet> {
        let mut tx = self.db.begin();
        WalletRepository::new(&mut tx).find_all()
    }

    /// 지갑 조회 (사용자 이름으로)
    /// Get wallet by username
    pub fn get_wallet(&self, username: &str) -> Result<Wallet, WalletError> {
        let mut tx = self.db.begin();
        let repo = WalletRepository::new(&mut tx);
        Self::find_existing(&repo, username)
    }

    /// 지갑 생성 (멱등)
    /// Create wallet, or return the existing one unchanged
    pub fn create_wallet(&self, username: &str) -> Result<Wallet, WalletError> {
        if username.is_empty() {
            return Err(WalletError::InvalidUsername);
        }

        let mut tx = self.db.begin();
        let mut repo = WalletRepository::new(&mut tx);

        if repo.exists(username) {
            return Self::find_existing(&repo, username);
        }

        let wallet = repo.create(username, self.config.initial_balance_amount);
        tracing::info!(username, balance = wallet.balance, "Wallet created");

        Ok(wallet)
    }

    /// 잔액 변경 (증감량 적용)
    /// Apply a signed delta to the balance, enforcing the minimum floor
    ///
    /// # Errors
    /// * `NotFound` - 지갑 없음
    /// * `BalanceLimit` - 결과 잔액이 하한선 미만 (변경 없음)
    /// * `BalanceOverflow` - i64 범위 초과 (변경 없음)
    pub fn update_balance(&self, username: &str, delta: i64) -> Result<Wallet, WalletError> {
        // 조회 → 검사 → 쓰기를 하나의 잠금 구간에서 수행
        let mut tx = self.db.begin();
        let mut repo = WalletRepository::new(&mut tx);

        let current = Self::find_existing(&repo, username)?;

        let proposed = current
            .balance
            .checked_add(delta)
            .ok_or_else(|| WalletError::BalanceOverflow {
                username: username.to_string(),
                balance: current.balance,
                delta,
            })?;

        let minimum = self.config.minimum_balance_amount;
        if proposed < minimum {
            tracing::warn!(
                username,
                balance = current.balance,
                delta,
                minimum,
                "Balance update rejected: below minimum"
            );
            return Err(WalletError::BalanceLimit {
                username: username.to_string(),
                balance: current.balance,
                delta,
                minimum,
            });
        }

        let updated = repo.set_balance(username, proposed).map_err(|e| {
            tracing::error!(username, error = %e, "Wallet store invariant violated");
            WalletError::Internal(e.to_string())
        })?;

        tracing::info!(
            username,
            delta,
            balance = updated.balance,
            "Wallet balance updated"
        );

        Ok(updated)
    }

    fn find_existing(repo: &WalletRepository<'_>, username: &str) -> Result<Wallet, WalletError> {
        if !repo.exists(username) {
            return Err(WalletError::NotFound {
                username: username.to_string(),
            });
        }

        repo.find_by_username(username)
            .ok_or_else(|| WalletError::NotFound {
                username: username.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service(initial: i64, minimum: i64) -> WalletService {
        WalletService::new(
            Database::new(),
            LedgerConfig {
                initial_balance_amount: initial,
                minimum_balance_amount: minimum,
            },
        )
    }

    #[test]
    fn test_list_wallets() {
        let db = Database::with_wallets([Wallet::new("david", 0), Wallet::new("melih", 1500)]);
        let service = WalletService::new(
            db,
            LedgerConfig {
                initial_balance_amount: 0,
                minimum_balance_amount: 0,
            },
        );

        let mut wallets = service.list_wallets();
        wallets.sort_by(|a, b| a.username.cmp(&b.username));

        assert_eq!(wallets, vec![Wallet::new("david", 0), Wallet::new("melih", 1500)]);
    }

    #[test]
    fn test_get_wallet_not_found() {
        let service = create_test_service(100, 0);

        assert_eq!(
            service.get_wallet("hamza"),
            Err(WalletError::NotFound { username: "hamza".to_string() })
        );
    }

    /// 잔액 0인 지갑도 정상적으로 조회됨 (빈 값과 구분)
    #[test]
    fn test_get_wallet_with_zero_balance() {
        let service = create_test_service(0, 0);
        service.create_wallet("zero").unwrap();

        assert_eq!(service.get_wallet("zero"), Ok(Wallet::new("zero", 0)));
    }

    #[test]
    fn test_create_wallet_uses_initial_balance() {
        let service = create_test_service(250, 0);

        let wallet = service.create_wallet("mahmut").unwrap();
        assert_eq!(wallet, Wallet::new("mahmut", 250));
        assert_eq!(service.get_wallet("mahmut"), Ok(wallet));
    }

    /// 생성은 하한선 검사 대상이 아님
    #[test]
    fn test_create_wallet_ignores_floor() {
        let service = create_test_service(-500, 0);

        let wallet = service.create_wallet("debtor").unwrap();
        assert_eq!(wallet.balance, -500);
    }

    #[test]
    fn test_create_wallet_is_idempotent() {
        let service = create_test_service(100, 0);

        let first = service.create_wallet("hamza").unwrap();
        service.update_balance("hamza", 50).unwrap();

        // 이미 존재하면 기존 지갑을 그대로 반환 (초기화하지 않음)
        let second = service.create_wallet("hamza").unwrap();
        assert_eq!(first, Wallet::new("hamza", 100));
        assert_eq!(second, Wallet::new("hamza", 150));
        assert_eq!(service.list_wallets().len(), 1);
    }

    #[test]
    fn test_create_wallet_rejects_empty_username() {
        let service = create_test_service(100, 0);

        assert_eq!(service.create_wallet(""), Err(WalletError::InvalidUsername));
        assert!(service.list_wallets().is_empty());
    }

    #[test]
    fn test_update_balance() {
        struct Case {
            name: &'static str,
            delta: i64,
            expected: Result<i64, ()>,
        }

        let cases = [
            Case { name: "deposit", delta: 750, expected: Ok(750) },
            Case { name: "withdraw to exactly the floor", delta: 0, expected: Ok(0) },
            Case { name: "withdraw below the floor", delta: -500, expected: Err(()) },
        ];

        for case in cases {
            let service = create_test_service(0, 0);
            service.create_wallet("murtaza").unwrap();

            let result = service.update_balance("murtaza", case.delta);
            match case.expected {
                Ok(balance) => {
                    assert_eq!(result, Ok(Wallet::new("murtaza", balance)), "{}", case.name);
                }
                Err(()) => {
                    assert!(
                        matches!(result, Err(WalletError::BalanceLimit { .. })),
                        "{}: {:?}",
                        case.name,
                        result
                    );
                    assert_eq!(service.get_wallet("murtaza").unwrap().balance, 0, "{}", case.name);
                }
            }
        }
    }

    #[test]
    fn test_update_balance_not_found() {
        let service = create_test_service(0, 0);

        assert_eq!(
            service.update_balance("murtaza", 5000),
            Err(WalletError::NotFound { username: "murtaza".to_string() })
        );
        // 없는 지갑을 자동 생성하지 않음
        assert!(service.list_wallets().is_empty());
    }

    #[test]
    fn test_update_balance_negative_floor() {
        let service = create_test_service(0, -100);
        service.create_wallet("naz").unwrap();

        assert_eq!(service.update_balance("naz", -100), Ok(Wallet::new("naz", -100)));
        assert_eq!(
            service.update_balance("naz", -1),
            Err(WalletError::BalanceLimit {
                username: "naz".to_string(),
                balance: -100,
                delta: -1,
                minimum: -100,
            })
        );
    }

    #[test]
    fn test_update_balance_overflow() {
        let service = create_test_service(i64::MAX - 1, 0);
        service.create_wallet("whale").unwrap();

        assert!(matches!(
            service.update_balance("whale", 2),
            Err(WalletError::BalanceOverflow { .. })
        ));
        assert_eq!(service.get_wallet("whale").unwrap().balance, i64::MAX - 1);
    }

    /// 시나리오: 초기 100, 하한 0
    #[test]
    fn test_amy_scenario() {
        let service = create_test_service(100, 0);

        assert_eq!(service.create_wallet("amy"), Ok(Wallet::new("amy", 100)));

        assert!(matches!(
            service.update_balance("amy", -150),
            Err(WalletError::BalanceLimit { .. })
        ));
        assert_eq!(service.get_wallet("amy"), Ok(Wallet::new("amy", 100)));

        assert_eq!(service.update_balance("amy", -50), Ok(Wallet::new("amy", 50)));
    }

    #[test]
    fn test_concurrent_updates_do_not_lose_writes() {
        let service = create_test_service(1_000, i64::MIN);
        service.create_wallet("amy").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = service.clone();
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        service.update_balance("amy", 1).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(service.get_wallet("amy").unwrap().balance, 1_000 + 8 * 250);
    }
}
