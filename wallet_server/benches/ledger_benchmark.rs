use std::thread;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use wallet_server::domains::wallet::services::WalletService;
use wallet_server::shared::config::LedgerConfig;
use wallet_server::shared::database::Database;

const UPDATE_BATCHES: [usize; 3] = [1_000, 10_000, 50_000];
const NUM_THREADS: usize = 4;

fn setup_service(wallets: usize) -> WalletService {
    let service = WalletService::new(
        Database::new(),
        LedgerConfig {
            initial_balance_amount: 0,
            minimum_balance_amount: i64::MIN,
        },
    );

    for idx in 0..wallets {
        service
            .create_wallet(&format!("user_{}", idx))
            .expect("failed to create wallet");
    }

    service
}

fn bench_update_balance(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_balance");

    for &count in UPDATE_BATCHES.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let service = setup_service(100);
            b.iter(|| {
                for idx in 0..count {
                    let username = format!("user_{}", idx % 100);
                    black_box(service.update_balance(&username, 1).expect("update failed"));
                }
            });
        });
    }

    group.finish();
}

/// 여러 스레드가 같은 지갑을 갱신 (잠금 경합)
fn bench_contended_update_balance(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_update_balance");

    for &count in UPDATE_BATCHES.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let service = setup_service(1);
            b.iter(|| {
                let handles: Vec<_> = (0..NUM_THREADS)
                    .map(|_| {
                        let service = service.clone();
                        thread::spawn(move || {
                            for _ in 0..count / NUM_THREADS {
                                service.update_balance("user_0", 1).expect("update failed");
                            }
                        })
                    })
                    .collect();

                for handle in handles {
                    handle.join().expect("thread panicked");
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_update_balance, bench_contended_update_balance);
criterion_main!(benches);
