//! HTTP server - content routes, comment actions and static assets

use anyhow::Result;
use axum::{
    extract::{rejection::FormRejection, Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::path::Path as FsPath;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::ContentApi;
use crate::document::{Document, Rendered};
use crate::routes::{load_node, submit_comment, ContentRoute};
use crate::Site;

/// Comment form body; a malformed body is logged and the page re-renders
type CommentForm = Result<Form<Vec<(String, String)>>, FormRejection>;

/// Server state
pub struct AppState {
    api: Arc<dyn ContentApi>,
    document: Document,
}

impl AppState {
    pub fn new(api: Arc<dyn ContentApi>, document: Document) -> Self {
        Self { api, document }
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>, static_dir: &FsPath) -> Router {
    Router::new()
        .route("/", get(front_page).post(front_page_action))
        .route("/posts/:slug", get(post_page).post(post_action))
        .route("/posts/:slug/", get(post_page).post(post_action))
        .route("/*uri", get(node_page).post(node_action))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(
    site: &Site,
    api: Arc<dyn ContentApi>,
    ip: &str,
    port: u16,
    open: bool,
) -> Result<()> {
    let document = Document::new(site.settings())?;
    let state = Arc::new(AppState::new(api, document));
    let app = router(state, &site.static_dir);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn front_page(State(state): State<Arc<AppState>>) -> Response {
    render(&state, ContentRoute::Node, "/").await
}

async fn front_page_action(
    State(state): State<Arc<AppState>>,
    form: CommentForm,
) -> Response {
    act(&state, form).await;
    render(&state, ContentRoute::Node, "/").await
}

async fn node_page(State(state): State<Arc<AppState>>, Path(uri): Path<String>) -> Response {
    render(&state, ContentRoute::Node, &uri).await
}

async fn node_action(
    State(state): State<Arc<AppState>>,
    Path(uri): Path<String>,
    form: CommentForm,
) -> Response {
    act(&state, form).await;
    render(&state, ContentRoute::Node, &uri).await
}

async fn post_page(State(state): State<Arc<AppState>>, Path(slug): Path<String>) -> Response {
    render(&state, ContentRoute::Post, &slug).await
}

async fn post_action(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    form: CommentForm,
) -> Response {
    act(&state, form).await;
    render(&state, ContentRoute::Post, &slug).await
}

/// Run the loader and render the page or its boundary
async fn render(state: &AppState, route: ContentRoute, uri: &str) -> Response {
    let loaded = load_node(state.api.as_ref(), uri).await;
    let rendered = state
        .document
        .respond(loaded, |node, cx| route.view(node, cx));
    into_response(rendered)
}

/// Submit a comment; the page re-renders whatever the outcome
async fn act(state: &AppState, form: CommentForm) {
    let pairs = match form {
        Ok(Form(pairs)) => pairs,
        Err(rejection) => {
            tracing::warn!("Comment form rejected: {}", rejection);
            return;
        }
    };
    match submit_comment(state.api.as_ref(), pairs).await {
        Ok(result) if result.success => tracing::info!("Comment submitted"),
        Ok(_) => tracing::warn!("Comment submission was not accepted"),
        Err(e) => tracing::warn!("Comment submission failed: {}", e),
    }
}

fn into_response(rendered: Rendered) -> Response {
    let status = StatusCode::from_u16(rendered.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Html(rendered.html)).into_response()
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
