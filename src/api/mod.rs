//! Pulseboard HTTP API
//!
//! Serves the dashboard page and a JSON view of the same data, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /` - Dashboard page (`?brand=` selects the brand)
//!
//! ## Data
//! - `GET /api/v1/brands` - Selector options
//! - `GET /api/v1/view` - Chart spec and summary for a brand
//! - `GET /api/v1/records` - Filtered table rows
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use pulseboard::api::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     serve(AppState::sample(), "127.0.0.1:8050").await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/brands", get(routes::view::list_brands))
        .route("/view", get(routes::view::get_view))
        .route("/records", get(routes::view::list_records));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::dashboard::dashboard_page))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the server and run until a shutdown signal arrives
pub async fn serve(state: AppState, addr: &str) -> Result<(), ApiError> {
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Pulseboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Pulseboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        build_router(AppState::sample())
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = fetch(app, uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        for uri in ["/health/live", "/health/ready", "/health"] {
            let (status, _) = fetch(create_test_app(), uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_dashboard_default_brand() {
        let (status, html) = fetch(create_test_app(), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"<option value="PhonePe" selected>"#));
        assert!(html.contains("Total Transactions: 290,000"));
        assert!(html.contains("₹39,000,000"));
    }

    #[tokio::test]
    async fn test_dashboard_selected_brand() {
        let (status, html) = fetch(create_test_app(), "/?brand=Google%20Pay").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"<option value="Google Pay" selected>"#));
        assert!(html.contains("Karnataka"));
        assert!(html.contains("Gujarat"));
        assert!(html.contains("Total Transactions: 230,000"));
    }

    #[tokio::test]
    async fn test_brands() {
        let (status, json) = get_json(create_test_app(), "/api/v1/brands").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["brands"], serde_json::json!(["PhonePe", "Google Pay", "Paytm"]));
        assert_eq!(json["default"], "PhonePe");
    }

    #[tokio::test]
    async fn test_view_phonepe() {
        let (status, json) = get_json(create_test_app(), "/api/v1/view?brand=PhonePe").await;

        assert_eq!(status, StatusCode::OK);
        let bars = json["chart"]["bars"].as_array().unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0]["category"], "Maharashtra");
        assert_eq!(bars[0]["value"], 20_000_000.0);
        assert_eq!(bars[1]["category"], "Tamil Nadu");
        assert_eq!(bars[1]["value"], 19_000_000.0);
        assert_eq!(json["summary"]["total_count"], 290_000);
        assert_eq!(json["summary"]["total_amount"], 39_000_000.0);
    }

    #[tokio::test]
    async fn test_view_unknown_brand_is_empty() {
        let (status, json) = get_json(create_test_app(), "/api/v1/view?brand=BHIM").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["chart"]["bars"].as_array().unwrap().len(), 0);
        assert_eq!(json["summary"]["total_count"], 0);
        assert_eq!(json["summary"]["total_amount"], 0.0);
    }

    #[tokio::test]
    async fn test_malformed_query_returns_error_body() {
        let (status, json) = get_json(create_test_app(), "/api/v1/view?brand=a&brand=b").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Bad request: "));

        let request_id = json["request_id"].as_str().unwrap();
        let parsed = uuid::Uuid::parse_str(request_id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[tokio::test]
    async fn test_malformed_query_on_dashboard_page() {
        let (status, body) = fetch(create_test_app(), "/?brand=a&brand=b").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_records_filtered_and_all() {
        let (_, json) = get_json(create_test_app(), "/api/v1/records?brand=Paytm").await;
        assert_eq!(json["total"], 1);
        assert_eq!(json["records"][0]["state"], "Delhi");
        assert_eq!(json["records"][0]["transaction_count"], 95_000);

        let (_, json) = get_json(create_test_app(), "/api/v1/records").await;
        assert_eq!(json["total"], 5);
        assert!(json.get("brand").is_none());
    }
}
