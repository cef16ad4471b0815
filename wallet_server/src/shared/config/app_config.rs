// =====================================================
// AppConfig - 애플리케이션 설정 (환경별)
// =====================================================
// 역할: 시작 시 한 번 읽어서 서비스에 명시적으로 전달
//
// 로딩 순서:
// 1. `RUST_ENV` (기본값: "dev") → `.config/<env>.json`
//    디렉터리는 `WALLET_CONFIG_DIR` 로 변경 가능
// 2. 환경 변수로 개별 값 덮어쓰기
//    INITIAL_BALANCE_AMOUNT, MINIMUM_BALANCE_AMOUNT, PORT
// =====================================================

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_DIR: &str = ".config";
pub const DEFAULT_ENV: &str = "dev";
pub const DEFAULT_PORT: u16 = 3000;

/// 원장 설정 (서비스에 전달되는 부분)
///
/// # 예시
/// ```json
/// { "initialBalanceAmount": 100, "minimumBalanceAmount": 0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerConfig {
    /// 새 지갑의 초기 잔액
    pub initial_balance_amount: i64,
    /// 잔액 변경 시 하한선
    pub minimum_balance_amount: i64,
}

/// 전체 애플리케이션 설정
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(flatten)]
    pub ledger: LedgerConfig,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl AppConfig {
    /// 환경 변수 기준으로 설정 로드
    /// Load configuration for the current `RUST_ENV`
    pub fn load() -> Result<Self> {
        let env = std::env::var("RUST_ENV").unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let dir = std::env::var("WALLET_CONFIG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        Self::from_file(&config_path(&dir, &env))?.with_overrides(|key| std::env::var(key).ok())
    }

    /// 파일에서 로드
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_json(&raw)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// JSON 문자열에서 로드
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Failed to parse configuration")
    }

    /// 환경 변수 덮어쓰기
    ///
    /// # Arguments
    /// * `lookup` - 키로 값을 찾는 함수 (실행 시에는 `std::env::var`)
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = parse_override(&lookup, "INITIAL_BALANCE_AMOUNT")? {
            self.ledger.initial_balance_amount = value;
        }
        if let Some(value) = parse_override(&lookup, "MINIMUM_BALANCE_AMOUNT")? {
            self.ledger.minimum_balance_amount = value;
        }
        if let Some(value) = parse_override(&lookup, "PORT")? {
            self.port = value;
        }

        Ok(self)
    }
}

/// 환경별 설정 파일 경로
pub fn config_path(dir: &Path, env: &str) -> PathBuf {
    dir.join(format!("{}.json", env))
}

fn parse_override<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("Invalid value for {}: {:?} ({})", key, raw, e)),
        None => Ok(None),
    }
}
