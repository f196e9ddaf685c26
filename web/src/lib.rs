/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod endpoints;
pub mod error;

use axum::routing::{get, post, put};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use folio_core::types::ServerState;
use std::sync::Arc;

pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route(
            "/api/profile",
            post(endpoints::profile::post)
                .get(endpoints::profile::get)
                .put(endpoints::profile::put)
                .delete(endpoints::profile::delete),
        )
        .route(
            "/api/skills",
            post(endpoints::skills::post).get(endpoints::skills::get),
        )
        .route("/api/skills/top", get(endpoints::skills::get_top))
        .route(
            "/api/skills/{skill}",
            put(endpoints::skills::put).delete(endpoints::skills::delete),
        )
        .route(
            "/api/projects",
            post(endpoints::projects::post).get(endpoints::projects::get),
        )
        .route(
            "/api/projects/{project}",
            get(endpoints::projects::get_project)
                .put(endpoints::projects::put)
                .delete(endpoints::projects::delete),
        )
        .route(
            "/api/work",
            post(endpoints::work::post).get(endpoints::work::get),
        )
        .route(
            "/api/work/{work}",
            get(endpoints::work::get_work)
                .put(endpoints::work::put)
                .delete(endpoints::work::delete),
        )
        .route(
            "/api/links",
            post(endpoints::links::post)
                .get(endpoints::links::get)
                .put(endpoints::links::put)
                .delete(endpoints::links::delete),
        )
        .route("/api/search", get(endpoints::search::get))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            auth::authorize,
        ))
        .route("/api/auth/register", post(endpoints::auth::post_register))
        .route("/api/auth/login", post(endpoints::auth::post_login))
        .route("/api/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    axum::serve(listener, app).await
}
