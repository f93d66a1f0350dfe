use crate::server::Server;
use axum::{Router, response::Json, routing::get};
use serde_json::{Value, json};

pub const SERVICE_NAME: &str = "eShopCo Analytics Endpoint";

/// Create the informational root route
pub fn create_root_routes() -> Router<Server> {
    Router::new().route("/", get(read_root))
}

/// Static status payload describing the service and its endpoints
pub async fn read_root() -> Json<Value> {
    Json(json!({
        "message": SERVICE_NAME,
        "status": "operational",
        "endpoints": {
            "POST /analytics": "Analyze telemetry data by region"
        }
    }))
}
