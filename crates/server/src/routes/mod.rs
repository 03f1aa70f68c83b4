pub mod book;
pub mod health;
pub mod search;

use crate::error::ServiceError;

/// Fallback for unknown paths
pub async fn not_found() -> ServiceError {
    ServiceError::NotFound
}
