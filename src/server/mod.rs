pub mod middleware;

use crate::{
    analytics::AnalyticsService,
    config::Config,
    error::AppError,
    metrics,
    routes::{create_analytics_routes, create_root_routes},
    server::middleware::request_response_logger,
    shutdown::ShutdownCoordinator,
    telemetry::{TELEMETRY_DATA, validate_records},
    utils::request_id_middleware,
};
use axum::{Router, extract::DefaultBodyLimit, middleware::from_fn};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Maximum request body size (1MB)
const MAX_BODY_SIZE: usize = 1024 * 1024;

#[derive(Clone)]
pub struct Server {
    pub config: Arc<Config>,
    pub analytics: Arc<AnalyticsService>,
    pub shutdown_coordinator: Arc<ShutdownCoordinator>,
}

impl Server {
    pub fn new(config: Config) -> Result<Self, AppError> {
        validate_records(TELEMETRY_DATA)?;
        let analytics = AnalyticsService::new();
        info!(
            records = TELEMETRY_DATA.len(),
            regions = analytics.groups().len(),
            "Telemetry dataset loaded"
        );

        Ok(Self {
            config: Arc::new(config),
            analytics: Arc::new(analytics),
            shutdown_coordinator: Arc::new(ShutdownCoordinator::new()),
        })
    }

    pub async fn run(&self) -> Result<(), AppError> {
        if self.config.metrics.enabled {
            metrics::init_metrics_with_port(self.config.metrics.port).map_err(|e| {
                AppError::Internal(format!("Failed to start metrics server: {}", e))
            })?;
        }

        let app = self.create_app();

        let addr = self.config.bind_address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to bind to address: {}", e)))?;

        info!("Server listening on http://{}", addr);

        let shutdown_coordinator = self.shutdown_coordinator.clone();
        tokio::spawn(async move {
            shutdown_coordinator.wait_for_shutdown_signal().await;
        });

        let shutdown_coordinator = self.shutdown_coordinator.clone();
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            shutdown_coordinator.wait_for_shutdown().await;
            info!("Graceful shutdown initiated");
        })
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

        info!("Server shutdown complete");
        Ok(())
    }

    // Creates an application router
    pub fn create_app(&self) -> Router {
        let app = Router::new()
            .merge(create_root_routes())
            .merge(create_analytics_routes())
            .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
            .with_state(self.clone());

        self.add_conditional_middleware(app)
            .layer(from_fn(request_id_middleware))
            .layer(CorsLayer::very_permissive())
    }

    fn add_conditional_middleware(&self, mut app: Router) -> Router {
        if self.config.metrics.enabled {
            app = app.layer(from_fn(metrics::metrics_middleware));
        }
        if self.config.logging.log_request {
            app = app.layer(from_fn(request_response_logger));
        }
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn create_test_server() -> Server {
        let mut config = Config::default();
        config.logging.log_request = false;
        Server::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_root_route() {
        let app = create_test_server().create_app();

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = create_test_server().create_app();

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_analytics_requires_post() {
        let app = create_test_server().create_app();

        let request = Request::builder()
            .uri("/analytics")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_server_creation() {
        let server = create_test_server();
        assert_eq!(server.config.server.port, 8000);
        assert_eq!(server.analytics.groups().len(), 3);
        assert!(!server.shutdown_coordinator.is_shutdown_requested());
    }
}
