//! API route definitions

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::{Config as SwaggerConfig, SwaggerUi};

use super::handlers;
use super::operations::{self, MODEL_OPERATIONS_TAG};
use super::schema::{tag_operations, SchemaCustomizer};
use crate::config::{Config, API_PREFIX};
use crate::health::HealthRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub schema: Arc<SchemaCustomizer>,
    pub health: HealthRegistry,
}

/// Assembled HTTP application: the router plus its schema document
pub struct Application {
    router: Router,
    schema: Arc<SchemaCustomizer>,
}

impl Application {
    /// Build the application once from config, the model operations router
    /// and the health checks to run on `/health`
    pub fn new(config: &Config, operations: OpenApiRouter, health: HealthRegistry) -> Self {
        let (root_router, root_api) = OpenApiRouter::<AppState>::new()
            .routes(routes!(handlers::health))
            .split_for_parts();

        let (operations_router, mut operations_api) = operations.split_for_parts();
        tag_operations(&mut operations_api, MODEL_OPERATIONS_TAG);

        let route_table = root_api.nest(API_PREFIX, operations_api);
        let schema = Arc::new(SchemaCustomizer::new(route_table, config.api.clone()));

        let state = AppState {
            config: Arc::new(config.clone()),
            schema: schema.clone(),
            health,
        };

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let swagger = SwaggerUi::new(config.docs.docs_path.clone())
            .config(SwaggerConfig::new([config.docs.openapi_path.clone()]));

        let router = root_router
            // Undocumented routes
            .route("/", get(handlers::root))
            .route(&config.docs.openapi_path, get(handlers::openapi_json))
            .route(&config.docs.redoc_path, get(handlers::redoc))
            .with_state(state)

            // Model operations
            .nest(API_PREFIX, operations_router)

            // Swagger UI reading the cached schema document
            .merge(swagger)

            .layer(cors)
            .layer(TraceLayer::new_for_http());

        tracing::debug!(
            docs = %config.docs.docs_path,
            redoc = %config.docs.redoc_path,
            openapi = %config.docs.openapi_path,
            "Application assembled"
        );

        Self { router, schema }
    }

    pub fn schema(&self) -> &Arc<SchemaCustomizer> {
        &self.schema
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Create the service router with the default model operations and health checks
pub fn create_router(config: &Config) -> Router {
    Application::new(config, operations::router(), HealthRegistry::default()).into_router()
}
