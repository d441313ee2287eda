//! HTTP API layer

mod handlers;
pub mod operations;
mod routes;
pub mod schema;

pub use handlers::{HealthStatus, MANAGEMENT_TAG};
pub use operations::{ModelInfo, MODEL_OPERATIONS_TAG};
pub use routes::{create_router, AppState, Application};
pub use schema::SchemaCustomizer;
