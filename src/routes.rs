use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{protected, public};
use crate::middleware::require_identity;
use crate::state::AppState;

/// Assemble the full application router.
///
/// The four resource routers go behind the authentication gate as one
/// subtree. Registration and login stay outside it, they are how callers
/// obtain a token in the first place.
pub fn app(state: AppState) -> Router {
    let protected_api = Router::new()
        .merge(protected::authors::router())
        .merge(protected::files::router())
        .merge(protected::purchases::router())
        .merge(protected::comments::router())
        .layer(from_fn_with_state(state.clone(), require_identity));

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public::users::router())
        // Protected API
        .merge(protected_api)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "name": "Papyrus API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "registration": "POST /user/registration (public)",
            "login": "POST /user/login (public)",
            "authors": "/author/api (protected)",
            "files": "/file/api (protected)",
            "purchases": "/purchase/api (protected)",
            "comments": "/comment/api (protected)",
        }
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}
