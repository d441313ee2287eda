//! Default model operations router mounted under the versioned API prefix

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

/// Tag applied to every operation mounted under the API prefix
pub const MODEL_OPERATIONS_TAG: &str = "Model Operations";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ModelInfo {
    /// Service package name
    #[schema(example = "model-service")]
    pub name: String,
    /// Service build version
    #[schema(example = "0.0.2")]
    pub version: String,
}

/// Describe the running service build
#[utoipa::path(
    get,
    path = "/model",
    responses(
        (status = 200, description = "Service build information", body = ModelInfo)
    )
)]
pub async fn model_info() -> Json<ModelInfo> {
    Json(ModelInfo {
        name: env!("CARGO_PKG_NAME").into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// Router supplying the model operations endpoints
pub fn router() -> OpenApiRouter {
    OpenApiRouter::new().routes(routes!(model_info))
}
