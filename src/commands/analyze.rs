use crate::{
    analytics::{AnalyticsRequest, AnalyticsService},
    error::AppError,
};
use serde_json::json;
use tracing::info;

pub fn handle_analyze_command(
    regions: Vec<String>,
    threshold_ms: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    let service = AnalyticsService::new();
    let request = AnalyticsRequest {
        regions,
        threshold_ms,
    };
    info!(
        regions = request.regions.len(),
        threshold_ms = threshold_ms,
        "Running offline analysis"
    );
    println!("{}", render_analysis(&service, &request)?);
    Ok(())
}

pub fn handle_regions_command() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render_regions(&AnalyticsService::new())?);
    Ok(())
}

/// Same JSON body `POST /analytics` would return for `request`.
pub fn render_analysis(
    service: &AnalyticsService,
    request: &AnalyticsRequest,
) -> Result<String, AppError> {
    let analysis = service.analyze(request)?;
    serde_json::to_string_pretty(&analysis.results)
        .map_err(|e| AppError::Internal(format!("Failed to serialize analysis: {}", e)))
}

pub fn render_regions(service: &AnalyticsService) -> Result<String, AppError> {
    let regions: Vec<_> = service
        .groups()
        .iter()
        .map(|(region, records)| json!({ "region": region, "records": records.len() }))
        .collect();
    serde_json::to_string_pretty(&regions)
        .map_err(|e| AppError::Internal(format!("Failed to serialize regions: {}", e)))
}
