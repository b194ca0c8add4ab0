// src/state.rs

use axum::extract::FromRef;
use sqlx::PgPool;

/// Shared handles injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}
