use thiserror::Error;
use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// 라우팅 에러
/// Routing errors produced by the route table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// 일치하는 경로 없음
    /// No route path matches
    #[error("No route matches path: {path}")]
    NotFound { path: String },

    /// 경로는 일치하지만 메서드가 허용되지 않음
    /// Path matches but the method does not
    #[error("Method {method} not allowed")]
    MethodNotAllowed { method: Method, allowed: Vec<Method> },
}

impl RouteError {
    /// `Allow` 헤더 값 (405일 때만)
    /// e.g. "GET, PUT, POST"
    pub fn allow_header(&self) -> Option<String> {
        match self {
            RouteError::MethodNotAllowed { allowed, .. } => Some(
                allowed
                    .iter()
                    .map(Method::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            RouteError::NotFound { .. } => None,
        }
    }
}

/// RouteError를 HTTP 응답으로 변환 (405는 Allow 헤더 포함)
impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let status = match &self {
            RouteError::NotFound { .. } => StatusCode::NOT_FOUND,
            RouteError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        };

        let allow = self.allow_header();
        let mut response = (status, Json(json!({ "error": self.to_string() }))).into_response();

        if let Some(value) = allow.and_then(|allow| HeaderValue::from_str(&allow).ok()) {
            response.headers_mut().insert(header::ALLOW, value);
        }

        response
    }
}
