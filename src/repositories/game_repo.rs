//! Game repository for async database operations.
//!
//! Provides CRUD operations for the games table using diesel_async.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use super::{GameRepository, page_offset};
use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult, DatabaseErrorConverter};
use crate::models::Game;

/// PostgreSQL game repository holding an async connection pool.
///
/// Each call checks a connection out of the pool and returns it on drop.
/// Since `AsyncDbPool` (bb8::Pool) uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct PgGameRepository {
    pool: AsyncDbPool,
}

impl PgGameRepository {
    /// Creates a new PgGameRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameRepository for PgGameRepository {
    async fn get_page(&self, page: u32, quantity: u32) -> AppResult<Vec<Game>> {
        use crate::schema::games::dsl::*;
        let mut conn = self.pool.get().await?;

        let offset = i64::try_from(page_offset(page, quantity)).unwrap_or(i64::MAX);

        games
            .order((name.asc(), producer.asc(), id.asc()))
            .offset(offset)
            .limit(i64::from(quantity))
            .select(Game::as_select())
            .load(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "list games"))
    }

    async fn get_by_id(&self, game_id: Uuid) -> AppResult<Option<Game>> {
        use crate::schema::games::dsl::*;
        let mut conn = self.pool.get().await?;

        games
            .filter(id.eq(game_id))
            .select(Game::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "find game by id"))
    }

    async fn get_by_name_and_producer(
        &self,
        game_name: &str,
        game_producer: &str,
    ) -> AppResult<Vec<Game>> {
        use crate::schema::games::dsl::*;
        let mut conn = self.pool.get().await?;

        games
            .filter(name.eq(game_name))
            .filter(producer.eq(game_producer))
            .select(Game::as_select())
            .load(&mut conn)
            .await
            .map_err(|e| {
                DatabaseErrorConverter::convert_diesel_error(e, "find game by name and producer")
            })
    }

    async fn add_game(&self, game: Game) -> AppResult<()> {
        use crate::schema::games::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(games)
            .values(&game)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "insert game"))
    }

    async fn update_game(&self, game: Game) -> AppResult<()> {
        use crate::schema::games::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(games.filter(id.eq(game.id)))
            .set(&game)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "update game"))
    }

    async fn remove_game(&self, game_id: Uuid) -> AppResult<()> {
        use crate::schema::games::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(games.filter(id.eq(game_id)))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "delete game"))
    }

    async fn ping(&self) -> AppResult<()> {
        let mut conn = self.pool.get().await?;

        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| AppError::Database {
                operation: "ping".to_string(),
                source: anyhow::Error::from(e),
            })
    }
}
