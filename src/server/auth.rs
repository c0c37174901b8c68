use super::{error_response, AppState};
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

/// Owner id resolved from the request's bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner(pub String);

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub async fn auth_middleware(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let owner = bearer_token(request.headers()).and_then(|token| state.tokens.get(token)).cloned();

    match owner {
        Some(owner) => {
            request.extensions_mut().insert(Owner(owner));
            next.run(request).await
        }
        None => error_response(StatusCode::UNAUTHORIZED, "No valid token, authorization denied"),
    }
}
