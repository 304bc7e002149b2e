//! Top-level API router and middleware stack.

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

use super::account::{account_router, AccountAppState};
use super::error::FailureResponse;
use super::health::health_router;
use super::tools::{tools_router, ToolsAppState};

/// Shared state for every API module.
#[derive(Clone)]
pub struct AppState {
    pub account: AccountAppState,
    pub tools: ToolsAppState,
}

/// Build the complete `/api` router with tracing, timeout and CORS layers.
pub fn api_router(state: AppState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .merge(account_router().with_state(state.account))
        .merge(tools_router().with_state(state.tools))
        .merge(health_router());

    with_middleware(Router::new().nest("/api", api), server)
}

/// Wraps `router` in the CORS, timeout and trace layers.
pub fn with_middleware(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(middleware::map_response(timeout_failure_body))
        .layer(TraceLayer::new_for_http())
}

/// `TimeoutLayer` answers 408 with an empty body; give it the failure shape.
async fn timeout_failure_body(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }
    tracing::warn!("Request timed out");
    (
        StatusCode::REQUEST_TIMEOUT,
        Json(FailureResponse::new("Request timed out")),
    )
        .into_response()
}

/// CORS for browser clients. No configured origins means any origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(allowed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get};
    use http_body_util::BodyExt;
    use std::time::Duration;
    use tower::ServiceExt;

    fn server_config(timeout_secs: u64) -> ServerConfig {
        ServerConfig {
            request_timeout_secs: timeout_secs,
            ..ServerConfig::default()
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn slow_request_times_out_with_failure_body() {
        let router = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                "late"
            }),
        );
        let app = with_middleware(router, &server_config(1));

        let response = app
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"success": false, "message": "Request timed out"})
        );
    }

    #[tokio::test]
    async fn fast_request_passes_through_unchanged() {
        let router = Router::new().route("/fast", get(|| async { "done" }));
        let app = with_middleware(router, &server_config(30));

        let response = app
            .oneshot(Request::builder().uri("/fast").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"done");
    }

    #[test]
    fn invalid_cors_origin_is_skipped() {
        // Does not panic; the bad entry is dropped.
        let _ = cors_layer(&["http://ok.example".to_string(), "bad\norigin".to_string()]);
    }
}
