use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::context::PrincipalContext;

/// Header the upstream gateway stamps on every forwarded request.
pub const GATEWAY_HEADER: &str = "api-gateway";
/// Comma-separated roles the gateway forwards for the authenticated caller.
pub const ROLES_HEADER: &str = "x-forwarded-roles";

#[derive(Clone)]
pub struct GatewayState {
    pub api_key: Arc<String>,
}

/// Reject any request that did not come through the API gateway, and derive
/// the principal context from the gateway's forwarded-roles header.
pub async fn gateway_middleware(
    State(state): State<GatewayState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let presented = req
        .headers()
        .get(GATEWAY_HEADER)
        .and_then(|v| v.to_str().ok());

    if presented != Some(state.api_key.as_str()) {
        return Err(
            (StatusCode::SERVICE_UNAVAILABLE, "Service is unavailable").into_response(),
        );
    }

    let principal = PrincipalContext::new(parse_roles(req.headers()));
    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

fn parse_roles(headers: &HeaderMap) -> Vec<String> {
    headers
        .get(ROLES_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|raw| {
            raw.split(',')
                .map(|role| role.trim().to_string())
                .filter(|role| !role.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
