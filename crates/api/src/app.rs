use axum::{middleware, routing::get, Router};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::error::ApiError;
use crate::middleware::{
    init_metrics, metrics_handler, metrics_middleware, rate_limit_middleware, RateLimiterState,
};
use crate::routes::{
    admin, auth, commissions, dashboard, health, lead_requests, leads, navigation, resources,
    support,
};
use crate::services::session::SessionProvider;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub sessions: Arc<dyn SessionProvider>,
    pub rate_limiter: Option<Arc<RateLimiterState>>,
}

impl AppState {
    /// The "not signed in" outcome: a 401 carrying the login redirect.
    pub fn authentication_required(&self) -> ApiError {
        ApiError::AuthenticationRequired {
            login_url: self.sessions.login_url(None),
        }
    }
}

pub fn create_app(config: Config, pool: PgPool, sessions: Arc<dyn SessionProvider>) -> Router {
    init_metrics();

    let config = Arc::new(config);

    // Rate limiting is enabled when the per-minute limit is nonzero
    let rate_limiter = if config.security.rate_limit_per_minute > 0 {
        Some(Arc::new(RateLimiterState::new(
            config.security.rate_limit_per_minute,
        )))
    } else {
        None
    };

    let state = AppState {
        pool,
        config: config.clone(),
        sessions,
        rate_limiter,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Versioned API routes; authentication is enforced per-handler by the
    // CurrentUser/AdminUser extractors
    let api_routes = Router::new()
        .nest("/api/v1/auth", auth::router())
        .nest("/api/v1/config", navigation::router())
        .nest("/api/v1/dashboard", dashboard::router())
        .nest("/api/v1/leads", leads::router())
        .nest("/api/v1/lead-requests", lead_requests::router())
        .nest("/api/v1/resources", resources::router())
        .nest("/api/v1/commissions", commissions::router())
        .nest("/api/v1/support-tickets", support::router())
        .nest("/api/v1/admin", admin::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ));

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
