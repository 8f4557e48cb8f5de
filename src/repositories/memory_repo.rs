//! Process-local game repository.
//!
//! Backs the `memory` storage backend. Enforces the same (name, producer)
//! uniqueness and page ordering as the PostgreSQL schema so both backends
//! are interchangeable behind `GameRepository`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{GameRepository, page_offset};
use crate::error::{AppError, AppResult};
use crate::models::Game;

/// In-memory game store keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryGameRepository {
    games: RwLock<BTreeMap<Uuid, Game>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn conflicts(store: &BTreeMap<Uuid, Game>, game: &Game) -> bool {
        store
            .values()
            .any(|g| g.id != game.id && g.name == game.name && g.producer == game.producer)
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn get_page(&self, page: u32, quantity: u32) -> AppResult<Vec<Game>> {
        let store = self.games.read().await;

        let mut ordered: Vec<&Game> = store.values().collect();
        ordered.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.producer.cmp(&b.producer))
                .then_with(|| a.id.cmp(&b.id))
        });

        let skip = usize::try_from(page_offset(page, quantity)).unwrap_or(usize::MAX);
        Ok(ordered
            .into_iter()
            .skip(skip)
            .take(quantity as usize)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Game>> {
        Ok(self.games.read().await.get(&id).cloned())
    }

    async fn get_by_name_and_producer(&self, name: &str, producer: &str) -> AppResult<Vec<Game>> {
        Ok(self
            .games
            .read()
            .await
            .values()
            .filter(|g| g.name == name && g.producer == producer)
            .cloned()
            .collect())
    }

    async fn add_game(&self, game: Game) -> AppResult<()> {
        let mut store = self.games.write().await;
        if store.contains_key(&game.id) {
            return Err(AppError::Database {
                operation: "insert game".to_string(),
                source: anyhow::anyhow!("duplicate primary key {}", game.id),
            });
        }
        if Self::conflicts(&store, &game) {
            return Err(AppError::GameAlreadyRegistered);
        }
        store.insert(game.id, game);
        Ok(())
    }

    async fn update_game(&self, game: Game) -> AppResult<()> {
        let mut store = self.games.write().await;
        if Self::conflicts(&store, &game) {
            return Err(AppError::GameAlreadyRegistered);
        }
        // UPDATE ... WHERE id = ? touches zero rows for an unknown id
        if let Some(existing) = store.get_mut(&game.id) {
            *existing = game;
        }
        Ok(())
    }

    async fn remove_game(&self, id: Uuid) -> AppResult<()> {
        self.games.write().await.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
