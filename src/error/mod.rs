mod app_error;
mod database_converter;

pub use app_error::{AppError, AppResult, ValidationFieldError};
pub use database_converter::{DatabaseErrorConverter, GAME_NAME_PRODUCER_CONSTRAINT};
