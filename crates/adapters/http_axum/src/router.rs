//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use z407_app::ports::SpeakerRemote;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// API routes live at the root, next to `/health`. When `static_dir` is
/// set, any other path is served from it, so the browser panel and the API
/// share an origin. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>, static_dir: Option<&Path>) -> Router
where
    R: SpeakerRemote + 'static,
{
    let mut router = Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes());

    if let Some(dir) = static_dir {
        tracing::debug!(dir = %dir.display(), "serving panel assets");
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
