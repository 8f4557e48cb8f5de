//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod game_service;

pub use game_service::GameService;

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since repositories sit behind `Arc`.
#[derive(Clone)]
pub struct Services {
    pub games: GameService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            games: GameService::new(repos.games),
        }
    }
}
