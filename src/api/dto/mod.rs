//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `game` - Game input and view models
//! - `error` - Common error response DTOs
//! - `pagination` - Pagination query parameters

mod error;
mod game;
mod pagination;

pub use error::{ErrorResponse, FieldErrorDetail};
pub use game::{GameIdParams, GameInputModel, GameViewModel, PriceUpdateParams};
pub use pagination::PaginationParams;
