//! Schema document customization and caching

use once_cell::sync::OnceCell;
use utoipa::openapi::path::Operation;
use utoipa::openapi::OpenApi;

use crate::config::ApiConfig;
use crate::error::Result;

/// Produces the served schema document from the assembled route table.
///
/// The document is computed on first request and kept for the lifetime of the
/// customizer. Concurrent first requests block on the cell, so no caller sees
/// a partially built document.
#[derive(Debug)]
pub struct SchemaCustomizer {
    route_table: OpenApi,
    api: ApiConfig,
    document: OnceCell<String>,
}

impl SchemaCustomizer {
    pub fn new(route_table: OpenApi, api: ApiConfig) -> Self {
        Self {
            route_table,
            api,
            document: OnceCell::new(),
        }
    }

    /// Serialized schema document, computed at most once
    pub fn document(&self) -> Result<&str> {
        let document = self.document.get_or_try_init(|| {
            let json = self.build().to_json()?;
            tracing::debug!(bytes = json.len(), "Generated schema document");
            Ok::<_, crate::Error>(json)
        })?;
        Ok(document.as_str())
    }

    pub fn is_cached(&self) -> bool {
        self.document.get().is_some()
    }

    /// Route table with the configured title, description and version applied
    pub fn build(&self) -> OpenApi {
        let mut openapi = self.route_table.clone();
        openapi.info.title = self.api.title.clone();
        openapi.info.description = Some(self.api.description.clone());
        openapi.info.version = self.api.version.clone();
        openapi
    }
}

/// Prepend `tag` to every documented operation, skipping ones already tagged with it
pub fn tag_operations(openapi: &mut OpenApi, tag: &str) {
    for item in openapi.paths.paths.values_mut() {
        let operations = [
            &mut item.get,
            &mut item.put,
            &mut item.post,
            &mut item.delete,
            &mut item.options,
            &mut item.head,
            &mut item.patch,
            &mut item.trace,
        ];

        for operation in operations.into_iter().flatten() {
            prepend_tag(operation, tag);
        }
    }
}

fn prepend_tag(operation: &mut Operation, tag: &str) {
    let tags = operation.tags.get_or_insert_with(Vec::new);
    if !tags.iter().any(|t| t == tag) {
        tags.insert(0, tag.to_string());
    }
}
