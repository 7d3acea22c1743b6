//! Request/response logging middleware

use std::time::Instant;

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};
use tracing::info;

/// Log each request and its outcome. Span creation is left to `TraceLayer`.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = extract_path(&request);
    let request_id = extract_request_id(&request);

    info!(
        method = %method,
        path = %path,
        request_id = %request_id,
        "Incoming request"
    );

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %path,
        status = %response.status().as_u16(),
        duration_ms = %start.elapsed().as_millis(),
        request_id = %request_id,
        "Request completed"
    );

    response
}

fn extract_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn extract_request_id(request: &Request<Body>) -> String {
    request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_from_header() {
        let request = Request::builder()
            .uri("/v1/hydration/units")
            .header("x-request-id", "req-42")
            .body(Body::empty())
            .unwrap();

        assert_eq!(extract_request_id(&request), "req-42");
    }

    #[test]
    fn test_request_id_generated() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let id = extract_request_id(&request);
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_path_falls_back_to_uri() {
        let request = Request::builder()
            .uri("/v1/hydration/goal?unit=L")
            .body(Body::empty())
            .unwrap();

        assert_eq!(extract_path(&request), "/v1/hydration/goal");
    }
}
