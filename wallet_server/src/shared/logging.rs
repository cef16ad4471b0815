use tracing_subscriber::{fmt, EnvFilter};

/// 기본 필터: 서비스 로그 + HTTP 요청 추적
/// Default directives when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn,wallet_server=info,tower_http=info";

/// JSON 출력 스위치
pub const LOG_JSON_ENV: &str = "WALLET_LOG_JSON";

/// `RUST_LOG` 값(있으면)으로 필터 생성, 없거나 잘못된 값이면 기본 필터
fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// 로깅 초기화
/// Initialize the global tracing subscriber
///
/// - `RUST_LOG` 로 필터 지정 (기본값: `DEFAULT_LOG_FILTER`)
/// - `WALLET_LOG_JSON=1` 이면 JSON 포맷 (로그 수집기용)
/// - 이미 초기화된 경우(테스트 등) 조용히 무시
pub fn init_logging() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_filter(rust_log.as_deref());
    let use_json = std::env::var(LOG_JSON_ENV).is_ok_and(|value| value == "1");

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if use_json {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.compact().try_init()
    };

    if result.is_ok() {
        tracing::debug!(json = use_json, "Logging initialized");
    }
}
