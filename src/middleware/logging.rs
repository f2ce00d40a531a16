//! Request logging middleware

use std::time::Instant;

use axum::{
    body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response,
};
use tracing::{info, warn};

/// Log every request with its method, path, status, and latency.
///
/// Server errors and rate-limit rejections log at warn so upstream
/// faults and abusive callers stand out; everything else logs at info.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    if status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %format!("{:.2}", duration_ms),
            "Request failed"
        );
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        warn!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %format!("{:.2}", duration_ms),
            "Request rate limited"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %format!("{:.2}", duration_ms),
            "Request completed"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::Request as HttpRequest, middleware, routing::get};
    use tower::ServiceExt;

    #[test]
    fn test_requests_pass_through_unchanged() {
        tokio_test::block_on(async {
            let app = Router::new()
                .route("/ping", get(|| async { "pong" }))
                .layer(middleware::from_fn(logging_middleware));

            let response = app
                .oneshot(
                    HttpRequest::builder()
                        .uri("/ping")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
        });
    }

    #[test]
    fn test_error_responses_are_not_swallowed() {
        tokio_test::block_on(async {
            let app = Router::new()
                .route("/boom", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
                .layer(middleware::from_fn(logging_middleware));

            let response = app
                .oneshot(
                    HttpRequest::builder()
                        .uri("/boom")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        });
    }
}
