use utoipa::OpenApi;

pub const GAME_TAG: &str = "Games";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Game Catalog",
        description = "Catalog of games with their producer and price",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = GAME_TAG, description = "Game catalog endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
