//! Shared application state for axum handlers.

use std::sync::Arc;

use advert_app::ports::{AdvertRepository, ConfirmationPublisher};
use advert_app::services::advert_service::AdvertService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and publisher types to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R, P> {
    /// The gateway use-case service.
    pub advert_service: Arc<AdvertService<R, P>>,
}

impl<R, P> Clone for AppState<R, P> {
    fn clone(&self) -> Self {
        Self {
            advert_service: Arc::clone(&self.advert_service),
        }
    }
}

impl<R, P> AppState<R, P>
where
    R: AdvertRepository + Send + Sync + 'static,
    P: ConfirmationPublisher + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(advert_service: AdvertService<R, P>) -> Self {
        Self {
            advert_service: Arc::new(advert_service),
        }
    }
}
