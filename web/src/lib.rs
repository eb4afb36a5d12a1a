/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod endpoints;
pub mod error;
mod pages;

pub use endpoints::factories::{
    FactoryResponse, MakeColorDepthRequest, MakeFactoryRequest, MakeScreenSizeRequest,
};

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use common::query_log::QueryLog;
use common::types::ServerState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Gives every request its own query log so the debug footer only lists the
/// statements of that request.
async fn collect_queries(
    State(state): State<Arc<ServerState>>,
    req: Request,
    next: Next,
) -> Response {
    if !state.cli.debug {
        return next.run(req).await;
    }

    let path = req.uri().path().to_string();
    let log = QueryLog::new();
    let response = log.clone().scope(next.run(req)).await;

    tracing::debug!(path = %path, queries = log.len(), "Request finished");
    response
}

pub fn create_router(state: Arc<ServerState>) -> Router {
    let mut app = Router::new()
        .route(
            "/api/factories",
            get(endpoints::factories::get).post(endpoints::factories::post),
        )
        .route(
            "/api/factories/{factory}",
            get(endpoints::factories::get_factory).delete(endpoints::factories::delete_factory),
        )
        .route(
            "/api/factories/{factory}/screen-sizes",
            get(endpoints::factories::get_screen_sizes)
                .post(endpoints::factories::post_screen_sizes),
        )
        .route(
            "/api/factories/{factory}/color-depths",
            get(endpoints::factories::get_color_depths)
                .post(endpoints::factories::post_color_depths),
        )
        .route("/factories/{factory}", get(pages::get_factory))
        .route("/api/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            collect_queries,
        ))
        .layer(TraceLayer::new_for_http());

    if state.cli.debug {
        app = app.layer(CorsLayer::permissive());
    }

    app.with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);

    axum::serve(listener, app).await
}
