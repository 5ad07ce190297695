//! HTTP API handlers.

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;

/// Application state shared with handlers.
///
/// Everything here is immutable after construction: the start instant is
/// captured exactly once, and the configuration is a startup snapshot. No
/// locking is needed because no handler writes to shared state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Process start instant, captured at construction.
    started_at: Instant,
    /// Configuration snapshot.
    config: Arc<Config>,
}

impl AppState {
    /// Create new app state, capturing the start instant.
    pub fn new(config: Config) -> Self {
        Self {
            started_at: Instant::now(),
            config: Arc::new(config),
        }
    }

    /// Seconds elapsed since startup, rounded to two decimal places.
    ///
    /// Backed by a monotonic clock, so repeated calls never decrease within
    /// one process lifetime.
    pub fn uptime_seconds(&self) -> f64 {
        round2(self.started_at.elapsed().as_secs_f64())
    }

    /// The configured version string.
    pub fn version(&self) -> &str {
        &self.config.app_version
    }

    /// The configured environment name.
    pub fn environment(&self) -> &str {
        &self.config.environment
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Root response: service banner with version metadata.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Status: "success".
    pub status: &'static str,
    /// Fixed banner message.
    pub message: &'static str,
    /// Deployed application version.
    pub version: String,
    /// Deployment environment name.
    pub environment: String,
}

/// Liveness probe response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
    /// Seconds since process start, two decimal places.
    pub uptime_seconds: f64,
    /// Deployed application version.
    pub version: String,
}

/// Readiness probe response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    /// Status: "ready".
    pub status: &'static str,
}

/// Project metadata response.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    /// Project name.
    pub project: &'static str,
    /// Project author.
    pub author: &'static str,
    /// Technology stack, primary technology first.
    pub stack: Vec<&'static str>,
    /// Release strategy.
    pub deployment_strategy: &'static str,
    /// CI/CD pipeline stages in execution order.
    pub pipeline_stages: Vec<&'static str>,
}

/// Root handler - service banner with version and environment.
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(RootResponse {
        status: "success",
        message: "Akif's Zero-Downtime CI/CD Pipeline is LIVE! 🚀",
        version: state.version().to_string(),
        environment: state.environment().to_string(),
    })
}

/// Liveness probe - always returns 200 while the process can execute code.
///
/// Polled by the load balancer during blue/green cutover. Must never gain
/// external dependency checks; a stalled database must not get this instance
/// restarted.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        uptime_seconds: state.uptime_seconds(),
        version: state.version().to_string(),
    })
}

/// Readiness probe - should traffic be routed to this instance.
///
/// Unconditionally ready in this demo. Downstream dependency checks (database
/// connectivity etc.) belong here, never in [`health`].
pub async fn ready() -> impl IntoResponse {
    Json(ReadyResponse { status: "ready" })
}

/// Project info handler - static pipeline metadata.
pub async fn info() -> impl IntoResponse {
    Json(InfoResponse {
        project: "Zero-Downtime CI/CD Pipeline",
        author: "Akif",
        stack: vec![
            "Rust",
            "Axum",
            "Docker",
            "Terraform",
            "GitHub Actions",
            "AWS",
        ],
        deployment_strategy: "Blue/Green",
        pipeline_stages: vec!["Lint", "Test", "Build", "Push to ECR", "Deploy to EC2"],
    })
}
