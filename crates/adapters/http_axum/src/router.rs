//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use advert_app::ports::{AdvertRepository, ConfirmationPublisher};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the advert API under `/api/v1/Adverts` and exposes a `/health`
/// probe. Includes a [`TraceLayer`] that logs each HTTP request/response at
/// the `DEBUG` level using the `tracing` ecosystem.
pub fn build<R, P>(state: AppState<R, P>) -> Router
where
    R: AdvertRepository + Send + Sync + 'static,
    P: ConfirmationPublisher + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1/Adverts", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
