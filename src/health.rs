//! Health checks backing the `/health` endpoint

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

/// Key/value details reported by a check
pub type HealthDetails = Map<String, Value>;

/// Result of a single check
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    Pass(HealthDetails),
    Fail(HealthDetails),
}

impl CheckOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckOutcome::Pass(_))
    }

    fn into_details(self) -> HealthDetails {
        match self {
            CheckOutcome::Pass(details) | CheckOutcome::Fail(details) => details,
        }
    }
}

#[async_trait]
pub trait HealthCheck: Send + Sync {
    fn name(&self) -> &str;

    async fn check(&self) -> CheckOutcome;
}

/// Always passes with `{"status": "healthy"}`
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceStatus;

#[async_trait]
impl HealthCheck for ServiceStatus {
    fn name(&self) -> &str {
        "service"
    }

    async fn check(&self) -> CheckOutcome {
        let mut details = HealthDetails::new();
        details.insert("status".into(), Value::String("healthy".into()));
        CheckOutcome::Pass(details)
    }
}

/// Aggregated result of every registered check
#[derive(Debug, Clone, PartialEq)]
pub struct HealthReport {
    pub healthy: bool,
    pub details: HealthDetails,
}

/// Ordered set of checks run on every health request
#[derive(Clone)]
pub struct HealthRegistry {
    checks: Vec<Arc<dyn HealthCheck>>,
}

impl HealthRegistry {
    /// Registry with no checks; reports healthy with empty details
    pub fn empty() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn with_check(mut self, check: impl HealthCheck + 'static) -> Self {
        self.checks.push(Arc::new(check));
        self
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run all checks in registration order. Later details overwrite earlier keys.
    pub async fn run(&self) -> HealthReport {
        let mut healthy = true;
        let mut details = HealthDetails::new();

        for check in &self.checks {
            let outcome = check.check().await;
            if !outcome.is_pass() {
                tracing::warn!(check = check.name(), "Health check failed");
                healthy = false;
            }
            details.extend(outcome.into_details());
        }

        HealthReport { healthy, details }
    }
}

impl Default for HealthRegistry {
    fn default() -> Self {
        Self::empty().with_check(ServiceStatus)
    }
}

impl std::fmt::Debug for HealthRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.checks.iter().map(|c| c.name()).collect();
        f.debug_struct("HealthRegistry").field("checks", &names).finish()
    }
}
