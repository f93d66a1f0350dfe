use crate::{
    analytics::{AnalyticsRequest, AnalyticsResponse},
    error::AppError,
    metrics::{track_analytics_failure, track_analytics_success},
    server::Server,
};
use axum::{
    Router,
    extract::State,
    response::Json,
    routing::post,
};
use tracing::{debug, error};

/// Create the telemetry analytics route
pub fn create_analytics_routes() -> Router<Server> {
    Router::new().route("/analytics", post(analyze_telemetry))
}

/// Per-region latency and uptime summary for the requested regions.
///
/// Body shape is checked by the `Json` extractor before this runs. A failure
/// in any region fails the whole request.
pub async fn analyze_telemetry(
    State(server): State<Server>,
    Json(request): Json<AnalyticsRequest>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    match server.analytics.analyze(&request) {
        Ok(analysis) => {
            debug!(
                regions = analysis.results.len(),
                unknown = analysis.unknown_regions,
                threshold_ms = request.threshold_ms,
                "Analyzed telemetry"
            );
            track_analytics_success(analysis.results.len(), analysis.unknown_regions);
            Ok(Json(analysis.results))
        }
        Err(e) => {
            error!("Failed to analyze telemetry: {}", e);
            track_analytics_failure();
            Err(AppError::Telemetry(e))
        }
    }
}
