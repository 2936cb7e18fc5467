//! Preview server
//!
//! Post pages are rendered on request from the content directory, so edits to
//! a post record show up on the next reload. Everything else is served from
//! the public directory.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::{ContentSource, FileSource};
use crate::page::{PageRenderer, CODE_CSS_PATH, INDEX_CSS_PATH};
use crate::Blog;

/// Server state
struct ServerState {
    source: FileSource,
    pages: PageRenderer,
    more_posts: usize,
}

/// Build the application router
fn router(blog: &Blog) -> Router {
    let state = Arc::new(ServerState {
        source: blog.source(),
        pages: PageRenderer::new(&blog.config),
        more_posts: blog.config.more_posts,
    });

    Router::new()
        .route("/posts/:slug", get(post_handler))
        .route("/posts/:slug/", get(post_handler))
        .route(&format!("/{}", CODE_CSS_PATH), get(code_css_handler))
        .route(&format!("/{}", INDEX_CSS_PATH), get(index_css_handler))
        .fallback_service(ServeDir::new(&blog.public_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the preview server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let app = router(blog);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Render a post page on request
async fn post_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    match render_post(&state, &slug) {
        Ok(Some(html)) => Html(html).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Post not found").into_response(),
        Err(e) => {
            tracing::error!("Failed to render post {}: {:#}", slug, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render post").into_response()
        }
    }
}

fn render_post(state: &ServerState, slug: &str) -> Result<Option<String>> {
    let Some(post) = state.source.post_by_slug(slug)? else {
        return Ok(None);
    };
    let more = state.source.more_posts(slug, state.more_posts)?;
    Ok(Some(state.pages.render_post(&post, &more)?))
}

/// Code stylesheet generated from the colour table
async fn code_css_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        state.pages.code_css(),
    )
}

/// Site-wide stylesheet
async fn index_css_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        state.pages.index_css(),
    )
}
