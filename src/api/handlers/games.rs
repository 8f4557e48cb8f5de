//! Game catalog request handlers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use uuid::Uuid;

use crate::api::doc::GAME_TAG;
use crate::api::dto::{
    ErrorResponse, GameIdParams, GameInputModel, GameViewModel, PaginationParams,
    PriceUpdateParams,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::{ValidatedJson, ValidatedPath, ValidatedQuery};

/// Creates game catalog routes.
pub fn game_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_games, add_game))
        .routes(routes!(get_game, update_game, remove_game))
        .routes(routes!(update_game_price))
}

/// List games page by page
///
/// Games cannot be listed without pagination.
#[utoipa::path(
    get,
    path = "/",
    tag = GAME_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Games on the requested page", body = Vec<GameViewModel>),
        (status = 204, description = "No game on the requested page"),
        (status = 400, description = "Invalid page or quantity")
    )
)]
async fn list_games(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> AppResult<Response> {
    let games = state
        .services
        .games
        .get_page(params.page, params.quantity)
        .await?;

    if games.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(games).into_response())
}

/// Get a game by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = GAME_TAG,
    params(
        ("id" = Uuid, Path, description = "Game id")
    ),
    responses(
        (status = 200, description = "Game found", body = GameViewModel),
        (status = 204, description = "Game not found"),
        (status = 400, description = "Malformed id", body = ErrorResponse)
    )
)]
async fn get_game(
    State(state): State<AppState>,
    ValidatedPath(GameIdParams { id }): ValidatedPath<GameIdParams>,
) -> AppResult<Response> {
    match state.services.games.get_by_id(id).await? {
        Some(game) => Ok(Json(game).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// Add a game to the catalog
#[utoipa::path(
    post,
    path = "/",
    tag = GAME_TAG,
    request_body = GameInputModel,
    responses(
        (status = 200, description = "Game registered", body = GameViewModel),
        (status = 400, description = "Invalid game data"),
        (status = 422, description = "A game with this name is already registered for this producer", body = String, content_type = "text/plain")
    )
)]
async fn add_game(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<GameInputModel>,
) -> AppResult<Json<GameViewModel>> {
    let game = state.services.games.add_game(input).await?;
    Ok(Json(game))
}

/// Replace every field of a game
#[utoipa::path(
    put,
    path = "/{id}",
    tag = GAME_TAG,
    params(
        ("id" = Uuid, Path, description = "Game id")
    ),
    request_body = GameInputModel,
    responses(
        (status = 200, description = "Game updated"),
        (status = 400, description = "Invalid game data"),
        (status = 404, description = "Game not found", body = String, content_type = "text/plain")
    )
)]
async fn update_game(
    State(state): State<AppState>,
    ValidatedPath(GameIdParams { id }): ValidatedPath<GameIdParams>,
    ValidatedJson(input): ValidatedJson<GameInputModel>,
) -> AppResult<StatusCode> {
    state.services.games.update_game(id, input).await?;
    Ok(StatusCode::OK)
}

/// Change the price of a game
#[utoipa::path(
    patch,
    path = "/{id}/price/{price}",
    tag = GAME_TAG,
    params(
        ("id" = Uuid, Path, description = "Game id"),
        ("price" = f64, Path, description = "New price, between 1 and 1000")
    ),
    responses(
        (status = 200, description = "Price updated"),
        (status = 400, description = "Invalid price"),
        (status = 404, description = "Game not found", body = String, content_type = "text/plain")
    )
)]
async fn update_game_price(
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<PriceUpdateParams>,
) -> AppResult<StatusCode> {
    state
        .services
        .games
        .update_price(params.id, params.price)
        .await?;
    Ok(StatusCode::OK)
}

/// Remove a game from the catalog
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = GAME_TAG,
    params(
        ("id" = Uuid, Path, description = "Game id")
    ),
    responses(
        (status = 200, description = "Game removed"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Game not found", body = String, content_type = "text/plain")
    )
)]
async fn remove_game(
    State(state): State<AppState>,
    ValidatedPath(GameIdParams { id }): ValidatedPath<GameIdParams>,
) -> AppResult<StatusCode> {
    state.services.games.remove_game(id).await?;
    Ok(StatusCode::OK)
}
