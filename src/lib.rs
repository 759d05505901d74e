pub mod config;
pub mod db;
pub mod dto;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;
pub mod security;
pub mod services;
pub mod state;

use axum::{Router, routing::get};

use crate::{
    routes::{create_api_router, doc::scalar_docs, health},
    state::AppState,
};

/// Full application router with state bound, without transport layers.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(scalar_docs())
        .with_state(state)
}
