//! Storage port — persistence operations for adverts.

use std::future::Future;

use advert_domain::advert::{Advert, AdvertDraft};
use advert_domain::error::AdvertError;
use advert_domain::id::AdvertId;

/// Persistence operations the gateway delegates to.
///
/// Implementations own identifier assignment and whatever structural
/// validation the storage layer requires; the service forwards drafts as-is.
pub trait AdvertRepository {
    /// Persist a new advert from a draft and return its assigned identifier.
    fn add(&self, draft: AdvertDraft) -> impl Future<Output = Result<AdvertId, AdvertError>> + Send;

    /// Mark an existing advert as confirmed.
    ///
    /// Fails with [`AdvertError::NotFound`] when no advert with `id` exists.
    fn confirm(&self, id: AdvertId) -> impl Future<Output = Result<(), AdvertError>> + Send;

    /// Fetch an advert by id, `None` when it does not exist.
    fn get_by_id(
        &self,
        id: AdvertId,
    ) -> impl Future<Output = Result<Option<Advert>, AdvertError>> + Send;
}

impl<T: AdvertRepository + Send + Sync> AdvertRepository for std::sync::Arc<T> {
    fn add(&self, draft: AdvertDraft) -> impl Future<Output = Result<AdvertId, AdvertError>> + Send {
        (**self).add(draft)
    }

    fn confirm(&self, id: AdvertId) -> impl Future<Output = Result<(), AdvertError>> + Send {
        (**self).confirm(id)
    }

    fn get_by_id(
        &self,
        id: AdvertId,
    ) -> impl Future<Output = Result<Option<Advert>, AdvertError>> + Send {
        (**self).get_by_id(id)
    }
}
