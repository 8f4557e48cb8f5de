//! Game service for catalog business rules.
//!
//! Enforces (name, producer) uniqueness on create and existence on every
//! mutation, and projects stored games into view models.

use std::sync::Arc;

use uuid::Uuid;

use crate::api::dto::{GameInputModel, GameViewModel};
use crate::error::{AppError, AppResult};
use crate::models::Game;
use crate::repositories::GameRepository;

/// Game service wrapping a `GameRepository` trait object.
#[derive(Clone)]
pub struct GameService {
    repo: Arc<dyn GameRepository>,
}

impl GameService {
    /// Creates a new GameService with the given repository.
    pub fn new(repo: Arc<dyn GameRepository>) -> Self {
        Self { repo }
    }

    /// Lists one page of games. An empty page is not an error.
    pub async fn get_page(&self, page: u32, quantity: u32) -> AppResult<Vec<GameViewModel>> {
        let games = self.repo.get_page(page, quantity).await?;
        Ok(games.into_iter().map(GameViewModel::from).collect())
    }

    /// Gets a game by id, `None` when it does not exist.
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Option<GameViewModel>> {
        Ok(self.repo.get_by_id(id).await?.map(GameViewModel::from))
    }

    /// Registers a new game.
    ///
    /// # Errors
    /// `GameAlreadyRegistered` when a game with the same name and producer
    /// exists; nothing is written in that case.
    pub async fn add_game(&self, input: GameInputModel) -> AppResult<GameViewModel> {
        let existing = self
            .repo
            .get_by_name_and_producer(&input.name, &input.producer)
            .await?;

        if !existing.is_empty() {
            tracing::info!(
                name = %input.name,
                producer = %input.producer,
                "Rejected duplicate game"
            );
            return Err(AppError::GameAlreadyRegistered);
        }

        let game = Game::new(input.name, input.producer, input.price);
        self.repo.add_game(game.clone()).await?;

        tracing::info!(game_id = %game.id, name = %game.name, producer = %game.producer, "Game registered");
        Ok(GameViewModel::from(game))
    }

    /// Replaces name, producer and price of an existing game.
    pub async fn update_game(&self, id: Uuid, input: GameInputModel) -> AppResult<()> {
        let mut game = self.require(id).await?;

        game.name = input.name;
        game.producer = input.producer;
        game.price = input.price;

        self.repo.update_game(game).await?;
        tracing::info!(game_id = %id, "Game updated");
        Ok(())
    }

    /// Changes only the price of an existing game.
    pub async fn update_price(&self, id: Uuid, price: f64) -> AppResult<()> {
        let mut game = self.require(id).await?;
        game.price = price;

        self.repo.update_game(game).await?;
        tracing::info!(game_id = %id, price, "Game price updated");
        Ok(())
    }

    /// Deletes an existing game.
    pub async fn remove_game(&self, id: Uuid) -> AppResult<()> {
        self.require(id).await?;

        self.repo.remove_game(id).await?;
        tracing::info!(game_id = %id, "Game removed");
        Ok(())
    }

    /// Reports whether the underlying storage answers.
    pub async fn storage_ready(&self) -> AppResult<()> {
        self.repo.ping().await
    }

    async fn require(&self, id: Uuid) -> AppResult<Game> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(AppError::GameNotRegistered { id })
    }
}
