//! Zero-downtime CI/CD pipeline demo service.
//!
//! A small HTTP service exposing four read-only informational endpoints used
//! to showcase a blue/green deployment pipeline:
//!
//! - `GET /` — service banner with version and environment
//! - `GET /health` — liveness probe with process uptime
//! - `GET /ready` — readiness probe
//! - `GET /info` — static project and pipeline metadata
//!
//! The liveness/readiness split is the contract that matters here: `/health`
//! answers "is the process alive" and must return 200 for as long as the
//! process can execute code, while `/ready` answers "should traffic be routed
//! here". Dependency checks (databases, downstream services) belong in
//! `/ready` only, never in `/health`.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP handlers and router
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
