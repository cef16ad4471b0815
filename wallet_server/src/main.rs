use anyhow::{Context, Result};
use tokio::net::TcpListener;

use wallet_server::docs::SWAGGER_UI_PATH;
use wallet_server::routes::create_app;
use wallet_server::shared::config::AppConfig;
use wallet_server::shared::database::Database;
use wallet_server::shared::logging::init_logging;
use wallet_server::shared::services::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    // 설정 로드 (시작 시 한 번)
    let config = AppConfig::load().context("Failed to load configuration")?;
    tracing::info!(
        initial_balance = config.ledger.initial_balance_amount,
        minimum_balance = config.ledger.minimum_balance_amount,
        "Configuration loaded"
    );

    // AppState 생성 (Store → Service)
    let app_state = AppState::new(Database::new(), config.ledger);

    // Router 생성
    let app = create_app(app_state).context("Failed to build router")?;

    // 서버 시작
    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;

    tracing::info!("Server running on http://localhost:{}", config.port);
    tracing::info!("Swagger UI available at http://localhost:{}{}", config.port, SWAGGER_UI_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
