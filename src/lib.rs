pub mod analytics;
pub mod commands;
pub mod config;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod server;
pub mod shutdown;
pub mod telemetry;
pub mod utils;

pub use analytics::{Analysis, AnalyticsRequest, AnalyticsResponse, AnalyticsService, RegionMetrics};
pub use config::Config;
pub use server::Server;
