//! # notekeeper-api
//!
//! HTTP API server for notekeeper.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/api/notes` | [`handlers::list_notes`] |
//! | POST | `/api/notes` | [`handlers::create_note`] |
//! | DELETE | `/api/notes/:id` | [`handlers::delete_note`] |
//! | GET | `/health` | [`handlers::health_check`] |
//! | GET | `/notes` | `notes.html` from the public directory |
//! | * | anything else | static file, or `index.html` when none matches |

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;

use std::path::Path;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, get_service},
    Router,
};
use notekeeper_core::defaults::BODY_LIMIT_BYTES;
use notekeeper_core::NoteStore;
use notekeeper_store::{JsonFileStore, MemoryStore};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{info, warn};
use uuid::Uuid;

pub use config::{ApiConfig, ConfigError, LogFormat, StoreKind};
pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn NoteStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }
}

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Open the store selected by the configuration.
///
/// The file store is created as an empty collection if its document does
/// not exist yet.
pub async fn build_store(config: &ApiConfig) -> notekeeper_core::Result<Arc<dyn NoteStore>> {
    match config.store {
        StoreKind::File => {
            let store = JsonFileStore::new(&config.db_path);
            store.ensure_exists().await?;
            info!(path = %config.db_path.display(), "Using JSON file store");
            Ok(Arc::new(store))
        }
        StoreKind::Memory => {
            warn!("Using in-memory store; notes will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("Invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Build the full application router.
///
/// `GET` on any path without a handler, including `/api/notes/:id`, serves
/// `index.html`.
pub fn router(state: AppState, public_dir: &Path, allowed_origins: &[String]) -> Router {
    let index = ServeFile::new(public_dir.join("index.html"));
    let static_files = ServeDir::new(public_dir).fallback(index.clone());

    Router::new()
        .route(
            "/api/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            "/api/notes/:id",
            delete(handlers::delete_note).fallback_service(index),
        )
        .route("/health", get(handlers::health_check))
        .route(
            "/notes",
            get_service(ServeFile::new(public_dir.join("notes.html"))),
        )
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(allowed_origins)),
        )
        // Outermost, so CORS never sees the limited body type.
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .with_state(state)
}
