// src/app.rs

use crate::config::Config;
use crate::handlers;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

pub fn router(config: Config) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };
    Router::new()
        .route("/", get(handlers::list_channels))
        .route("/login", get(handlers::login))
        .route("/logout", get(handlers::logout))
        .route("/{name}/", get(handlers::channel_index))
        .route("/{name}/bookmarks/", get(handlers::bookmark_index))
        .route("/{name}/bookmarks/{path}", get(handlers::bookmark_show))
        .route("/{name}/{year}/{month}/{day}/", get(handlers::show_log))
        .with_state(state)
}
