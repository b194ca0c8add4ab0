// src/handlers/mod.rs

pub mod company;
pub mod industry;
pub mod invoice;

use crate::error::AppError;

/// Fallback for requests that match no route.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}
