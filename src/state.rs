//! Application state for Axum web framework.
//!
//! Contains shared services that are accessible across all request handlers.

use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services.
///
/// Cloning is cheap since services hold their repositories behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Version reported by the health endpoints
    pub version: String,
}

impl AppState {
    /// Creates an AppState from already built repositories.
    pub fn new(repos: Repositories, version: impl Into<String>) -> Self {
        Self {
            services: Services::new(repos),
            version: version.into(),
        }
    }

    /// Creates an AppState backed by the in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Repositories::in_memory(), crate::pkg_version())
    }
}
