//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod adverts;

use axum::Router;
use axum::routing::{post, put};

use advert_app::ports::{AdvertRepository, ConfirmationPublisher};

use crate::state::AppState;

/// Build the `api/v1/Adverts` sub-router.
pub fn routes<R, P>() -> Router<AppState<R, P>>
where
    R: AdvertRepository + Send + Sync + 'static,
    P: ConfirmationPublisher + Send + Sync + 'static,
{
    Router::new()
        .route("/Create", post(adverts::create::<R, P>))
        .route("/Confirm", put(adverts::confirm::<R, P>))
}
