//! Pagination query parameters.

use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

/// Query parameters for paged listings.
///
/// Both values default to 1 when omitted.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams, Validate)]
pub struct PaginationParams {
    /// Page number (1-based)
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    #[param(minimum = 1, example = 1)]
    pub page: u32,

    /// Number of games per page
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[param(minimum = 1, example = 10)]
    pub quantity: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            quantity: default_quantity(),
        }
    }
}

fn default_page() -> u32 {
    1
}

fn default_quantity() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params: PaginationParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.quantity, 1);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_zero_is_rejected() {
        let params = PaginationParams { page: 0, quantity: 5 };
        assert!(params.validate().is_err());
        let params = PaginationParams { page: 2, quantity: 0 };
        assert!(params.validate().is_err());
    }
}
