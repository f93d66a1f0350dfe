use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use serde_json::Value;
use telemetry_analytics::{Config, Server};
use tower::ServiceExt;

/// Router plus the config it was built from
pub struct TestHarness {
    #[allow(dead_code)]
    pub config: Config,
    pub app: Router,
}

impl TestHarness {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.metrics.enabled = false;
        config.logging.log_request = false;
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Self {
        let server = Server::new(config.clone()).unwrap();
        let app = server.create_app();
        Self { config, app }
    }

    pub async fn make_request(&self, request: Request<Body>) -> axum::response::Response {
        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Send a request and decode the JSON body
    #[allow(dead_code)]
    pub async fn request_json(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.make_request(request).await;
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or(Value::Null)
        };
        (status, json)
    }
}

pub struct RequestBuilder;

impl RequestBuilder {
    pub fn root() -> Request<Body> {
        Request::builder().uri("/").body(Body::empty()).unwrap()
    }

    pub fn analytics(body: &str) -> Request<Body> {
        Request::builder()
            .uri("/analytics")
            .method(Method::POST)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[allow(dead_code)]
    pub fn custom_request(
        uri: &str,
        method: Method,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Request<Body> {
        let mut builder = Request::builder().uri(uri).method(method);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }
}
