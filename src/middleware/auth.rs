use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{validate_jwt, JwtError};
use crate::error::ApiError;
use crate::lifecycle::Principal;
use crate::state::AppState;

/// JWT authentication middleware that validates tokens and injects the `Principal`
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // Extract JWT from Authorization header
    let token = extract_jwt_from_headers(&headers).map_err(ApiError::unauthorized)?;

    // Validate and decode JWT
    let claims = validate_jwt(&token, &state.jwt_secret).map_err(|e| match e {
        JwtError::InvalidSecret => {
            tracing::error!("Rejecting request: JWT secret not configured");
            ApiError::internal_server_error("Authentication is not configured")
        }
        other => ApiError::unauthorized(other.to_string()),
    })?;

    let principal = Principal::from(claims);
    tracing::debug!("Authenticated principal {} ({})", principal.id, principal.role);
    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty JWT token".to_string());
        }
        Ok(token.trim().to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}
