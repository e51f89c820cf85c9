mod reorder;
mod route;
mod validate;

pub use reorder::*;
pub use route::*;
pub use validate::*;

use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
    cached_routes: usize,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<Health> {
    Json(Health {
        status: "ok",
        cached_routes: state.oracle.len().await,
    })
}
