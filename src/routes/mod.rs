pub mod analytics;
pub mod root;

pub use analytics::create_analytics_routes;
pub use root::create_root_routes;
