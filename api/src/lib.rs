//! User Registry API
//!
//! Registers users over HTTP and persists them through a repository port.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use axum::{routing::post, Router};
use tower::ServiceBuilder;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod dto;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod mapper;

#[cfg(test)]
mod test_utils;


use app::RegisterUserUseCase;
use config::RateLimitConfig;
use error::ConfigError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub register_user: Arc<dyn RegisterUserUseCase>,
}

/// Build the HTTP router
///
/// With a rate limit the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`, since limits are
/// keyed by peer IP.
pub fn router(state: AppState, rate_limit: Option<&RateLimitConfig>) -> Result<Router, ConfigError> {
    let mut registration = Router::new().route("/users", post(handlers::register_user));

    if let Some(limit) = rate_limit {
        let governor_config = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_second(limit.replenish_secs)
                .burst_size(limit.burst_size)
                .finish()
                .ok_or_else(|| ConfigError::Invalid {
                    name: "rate limit",
                    value: format!("{:?}", limit),
                })?,
        );
        registration = registration.layer(GovernorLayer {
            config: governor_config,
        });
    }

    Ok(Router::new()
        .merge(registration)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state))
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::http::StatusCode;
    use axum_test::TestServer;

    use super::*;
    use crate::adapters::InMemoryUserStore;
    use crate::test_utils::test_app_state;

    #[test]
    fn router_builds_with_rate_limit() {
        let state = test_app_state(Arc::new(InMemoryUserStore::new()));
        let limit = RateLimitConfig {
            replenish_secs: 2,
            burst_size: 5,
        };

        assert!(router(state, Some(&limit)).is_ok());
    }

    #[test]
    fn router_refuses_zero_burst() {
        let state = test_app_state(Arc::new(InMemoryUserStore::new()));
        let limit = RateLimitConfig {
            replenish_secs: 2,
            burst_size: 0,
        };

        assert!(router(state, Some(&limit)).is_err());
    }

    #[tokio::test]
    async fn registration_is_rate_limited_per_peer() {
        let store = Arc::new(InMemoryUserStore::new());
        let limit = RateLimitConfig {
            replenish_secs: 60,
            burst_size: 2,
        };
        let app = router(test_app_state(store.clone()), Some(&limit)).unwrap();
        let server = TestServer::builder()
            .http_transport()
            .build(app.into_make_service_with_connect_info::<SocketAddr>())
            .unwrap();

        let mut statuses = Vec::new();
        for _ in 0..4 {
            let response = server
                .post("/users")
                .add_query_param("name", "Laura")
                .await;
            statuses.push(response.status_code());
        }

        assert_eq!(
            statuses,
            [
                StatusCode::CREATED,
                StatusCode::CREATED,
                StatusCode::TOO_MANY_REQUESTS,
                StatusCode::TOO_MANY_REQUESTS,
            ]
        );
        assert_eq!(store.len().await, 2);
    }
}
