//! Repository layer for data access operations.
//!
//! `GameRepository` is the persistence contract the service layer depends on.
//! Two backends implement it: PostgreSQL through diesel_async, and a
//! process-local store used for development and tests.

mod game_repo;
mod memory_repo;

pub use game_repo::PgGameRepository;
pub use memory_repo::InMemoryGameRepository;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::models::Game;

/// Persistence contract for the game catalog.
///
/// Implementations acquire storage resources per call and release them before
/// returning, so a repository value can be shared freely across requests.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Returns one page of games ordered by name, producer and id.
    ///
    /// `page` is 1-based; the slice starts at `(page - 1) * quantity`.
    async fn get_page(&self, page: u32, quantity: u32) -> AppResult<Vec<Game>>;

    /// Finds a game by its identity.
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Game>>;

    /// Finds games whose name and producer both match exactly.
    async fn get_by_name_and_producer(&self, name: &str, producer: &str) -> AppResult<Vec<Game>>;

    /// Inserts a new game.
    async fn add_game(&self, game: Game) -> AppResult<()>;

    /// Overwrites every mutable column of an existing game.
    async fn update_game(&self, game: Game) -> AppResult<()>;

    /// Deletes a game by its identity.
    async fn remove_game(&self, id: Uuid) -> AppResult<()>;

    /// Cheap connectivity probe used by the health endpoints.
    async fn ping(&self) -> AppResult<()>;
}

/// Computes the row offset of a 1-based page.
pub(crate) fn page_offset(page: u32, quantity: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(quantity)
}

/// Aggregates all repositories for convenient access.
///
/// Cloning is cheap since every repository sits behind an `Arc`.
#[derive(Clone)]
pub struct Repositories {
    pub games: Arc<dyn GameRepository>,
}

impl Repositories {
    /// Creates repositories backed by PostgreSQL.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            games: Arc::new(PgGameRepository::new(pool)),
        }
    }

    /// Creates repositories backed by the in-memory store.
    pub fn in_memory() -> Self {
        Self {
            games: Arc::new(InMemoryGameRepository::new()),
        }
    }
}
