use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::handlers::{elevated, protected, public};
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

/// Build the full router for the back-office API
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let authenticated = Router::new()
        .merge(protected_routes())
        .merge(elevated_routes())
        .merge(legacy_vendor_routes())
        .route_layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    let mut app = Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        // JWT protected
        .merge(authenticated)
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    // Global middleware
    if config.security.enable_cors {
        app = app.layer(cors_layer(&config.security.cors_origins));
    }
    if config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    app.with_state(state)
}

fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/vendors/:id/deactivation/request",
            post(protected::request_deactivation),
        )
        .route(
            "/api/vendors/:id/reactivation/request",
            post(protected::request_reactivation),
        )
}

fn elevated_routes() -> Router<AppState> {
    Router::new()
        .route("/api/vendors/requests", get(elevated::list_requests))
        .route("/api/vendors/:id", get(elevated::vendor_show))
        .route(
            "/api/vendors/:id/deactivation/approve",
            put(elevated::approve_deactivation),
        )
        .route(
            "/api/vendors/:id/deactivation/reject",
            put(elevated::reject_deactivation),
        )
        .route(
            "/api/vendors/:id/reactivation/approve",
            post(elevated::approve_reactivation),
        )
        .route(
            "/api/vendors/:id/reactivation/reject",
            post(elevated::reject_reactivation),
        )
        .route("/api/vendors/:id/reset", put(elevated::reset_status))
}

/// Paths the existing admin dashboard already calls
fn legacy_vendor_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/vendors/getVendors", get(elevated::list_requests))
        .route(
            "/api/auth/vendors/approveDeactivation/:id",
            put(elevated::approve_deactivation),
        )
        .route(
            "/api/auth/vendors/reject-deactivation/:id",
            put(elevated::reject_deactivation),
        )
        .route(
            "/api/auth/vendors/approve-reactivation/:id",
            post(elevated::approve_reactivation),
        )
        .route(
            "/api/auth/vendors/reject-reactivation/:id",
            post(elevated::reject_reactivation),
        )
        .route(
            "/api/auth/vendors/reset-status/:id",
            put(elevated::reset_status),
        )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}
