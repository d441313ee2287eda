//! model-service - HTTP bootstrap for model operations with health checks and OpenAPI docs

pub mod config;
pub mod error;

pub mod health;
pub mod api;
pub mod server;

pub use config::Config;
pub use error::{Error, Result};
