// Routes module: 라우팅 설정
// 역할: 라우팅 테이블 + axum 앱 조립
// Routes module: builds the axum app around the wallet route table

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::{ApiDoc, OPENAPI_PATH, SWAGGER_UI_PATH};
use crate::domains::wallet::handlers::wallet_handler;
use crate::domains::wallet::routes::{create_wallet_routes, WalletAction};
use crate::shared::router::RouteTable;
use crate::shared::services::AppState;

/// 디스패처 상태 (애플리케이션 상태 + 불변 라우팅 테이블)
#[derive(Clone)]
pub struct DispatchState {
    pub app_state: AppState,
    pub routes: Arc<RouteTable<WalletAction>>,
}

/// Create main router
/// 메인 라우터 생성 (문서 + 지갑 디스패처)
///
/// 지갑 라우트는 axum 라우터가 아니라 `RouteTable` 에서 해석됨:
/// 선언 순서, 첫 매칭 우선, 405 시 Allow 헤더
pub fn create_router(app_state: AppState) -> Result<Router> {
    let routes = Arc::new(create_wallet_routes()?);

    let router = Router::new()
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        .fallback(dispatch)
        .with_state(DispatchState { app_state, routes });

    Ok(router)
}

/// Create the full application (router + middleware)
/// 전체 앱 생성 (CORS, 요청 추적 포함)
pub fn create_app(app_state: AppState) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PUT, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]);

    let app = create_router(app_state)?
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    Ok(app)
}

/// 모든 요청을 라우팅 테이블로 전달
async fn dispatch(
    State(state): State<DispatchState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let matched = match state.routes.resolve(&method, uri.path()) {
        Ok(matched) => matched,
        Err(e) => {
            tracing::debug!(%method, path = uri.path(), error = %e, "Route not resolved");
            return e.into_response();
        }
    };

    tracing::debug!(%method, path = uri.path(), action = ?matched.action, "Route resolved");

    wallet_handler::handle(state.app_state.clone(), *matched.action, matched.params, body).await
}
