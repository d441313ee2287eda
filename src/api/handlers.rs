//! API request handlers

use askama::Template;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::routes::AppState;

/// Tag for service management endpoints
pub const MANAGEMENT_TAG: &str = "Management";

// Response types

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    /// Service status
    #[schema(example = "healthy")]
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Handlers

/// Root path, sends browsers to the interactive docs
pub async fn root(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&state.config.docs.docs_path)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    description = "Management APIs",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus),
        (status = 503, description = "At least one health check failed")
    ),
    tag = "Management"
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let report = state.health.run().await;
    let status = if report.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(Value::Object(report.details)))
}

/// Cached schema document
pub async fn openapi_json(State(state): State<AppState>) -> Response {
    match state.schema.document() {
        Ok(document) => (
            [(header::CONTENT_TYPE, "application/json")],
            document.to_owned(),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to generate schema document: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// ReDoc page reading the schema document from the configured path
#[derive(Template)]
#[template(path = "redoc.html")]
pub struct RedocTemplate<'a> {
    pub title: &'a str,
    pub spec_url: &'a str,
}

pub async fn redoc(State(state): State<AppState>) -> Response {
    let page = RedocTemplate {
        title: &state.config.api.title,
        spec_url: &state.config.docs.openapi_path,
    };

    match page.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render ReDoc page: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redoc_page_points_at_schema() {
        let html = RedocTemplate {
            title: "Demo APIs",
            spec_url: "/openapi.json",
        }
        .render()
        .unwrap();
        assert!(html.contains("<title>Demo APIs - ReDoc</title>"));
        assert!(html.contains("<redoc spec-url="));
        assert!(html.contains("openapi.json\"></redoc>"));
    }

    #[test]
    fn redoc_title_is_escaped() {
        let html = RedocTemplate {
            title: "<b>\"x\" & y",
            spec_url: "/openapi.json",
        }
        .render()
        .unwrap();
        assert!(html.contains("&lt;b&gt;&quot;x&quot; &amp; y - ReDoc"));
        assert!(!html.contains("<b>"));
    }
}
