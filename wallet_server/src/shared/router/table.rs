// =====================================================
// RouteTable - 선언 순서 기반 라우팅 테이블
// =====================================================
// 역할: (method, path) 요청을 하나의 액션으로 해석
//
// 규칙:
// 1. 선언 순서대로 검사, 경로는 전체 일치만 허용
// 2. 경로와 메서드가 모두 일치하는 첫 번째 라우트가 선택됨 (병합 없음)
// 3. 경로는 일치하지만 메서드가 없으면 → MethodNotAllowed (허용 메서드 목록 포함)
// 4. 경로가 하나도 일치하지 않으면 → NotFound
// =====================================================

use axum::http::Method;

use super::pattern::{PathParams, PathPattern, PatternError};
use crate::shared::errors::RouteError;

/// 라우트 하나: 메서드 + 경로 패턴 + 바인딩된 액션
#[derive(Debug, Clone)]
struct Route<A> {
    method: Method,
    pattern: PathPattern,
    action: A,
}

/// 매칭 결과
/// Selected action together with its extracted parameters
#[derive(Debug, PartialEq, Eq)]
pub struct RouteMatch<'a, A> {
    pub action: &'a A,
    pub params: PathParams,
}

/// 라우팅 테이블 (시작 시 한 번 생성, 이후 불변)
/// Ordered, immutable route table
#[derive(Debug, Clone)]
pub struct RouteTable<A> {
    routes: Vec<Route<A>>,
}

impl<A> Default for RouteTable<A> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<A> RouteTable<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 라우트 추가 (선언 순서 유지)
    /// Append a route; declaration order is evaluation order.
    pub fn route(mut self, method: Method, template: &str, action: A) -> Result<Self, PatternError> {
        let pattern = PathPattern::parse(template)?;
        self.routes.push(Route {
            method,
            pattern,
            action,
        });
        Ok(self)
    }

    /// 요청 해석
    /// Resolve a request to the first route whose path and method both match.
    pub fn resolve(&self, method: &Method, path: &str) -> Result<RouteMatch<'_, A>, RouteError> {
        let mut allowed: Vec<Method> = Vec::new();

        for route in &self.routes {
            let Some(params) = route.pattern.match_path(path) else {
                continue;
            };

            if route.method == *method {
                return Ok(RouteMatch {
                    action: &route.action,
                    params,
                });
            }

            if !allowed.contains(&route.method) {
                allowed.push(route.method.clone());
            }
        }

        if allowed.is_empty() {
            Err(RouteError::NotFound {
                path: path.to_string(),
            })
        } else {
            Err(RouteError::MethodNotAllowed {
                method: method.clone(),
                allowed,
            })
        }
    }
}
