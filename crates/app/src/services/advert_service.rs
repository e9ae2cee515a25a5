//! Advert service — the gateway use-cases: create and confirm-then-publish.

use advert_domain::advert::AdvertDraft;
use advert_domain::error::{AdvertError, NotFoundError};
use advert_domain::event::AdvertConfirmed;
use advert_domain::id::AdvertId;

use crate::ports::{AdvertRepository, ConfirmationPublisher};

/// Application service orchestrating storage and the notifier.
///
/// Holds no mutable state of its own; every call is independent, so a single
/// instance can be shared freely across concurrent requests.
pub struct AdvertService<R, P> {
    repo: R,
    publisher: P,
}

impl<R: AdvertRepository, P: ConfirmationPublisher> AdvertService<R, P> {
    /// Create a new service backed by the given repository and publisher.
    pub fn new(repo: R, publisher: P) -> Self {
        Self { repo, publisher }
    }

    /// Create a new advert and return its storage-assigned identifier.
    ///
    /// The draft is forwarded to storage as-is; structural validation is the
    /// repository's responsibility. No event is published on create.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::NotFound`] when storage reports a missing
    /// related record (passed through unlogged, matching the original API),
    /// or any other storage error, logged once before propagation.
    pub async fn create_advert(&self, draft: AdvertDraft) -> Result<AdvertId, AdvertError> {
        match self.repo.add(draft).await {
            Ok(id) => Ok(id),
            Err(err @ AdvertError::NotFound(_)) => Err(err),
            Err(err) => {
                tracing::error!(error = %err, "failed to create advert");
                Err(err)
            }
        }
    }

    /// Confirm an advert, then publish an [`AdvertConfirmed`] event.
    ///
    /// The confirmation is committed by storage before the record is re-read
    /// and the event published. A failure after the commit (re-read or
    /// publish) leaves the confirmation in place and surfaces as an error —
    /// an accepted inconsistency window rather than a rollback.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::NotFound`] when the advert does not exist, a
    /// storage error from either storage call, or [`AdvertError::Publish`]
    /// when the notifier fails. Every failure on this path is logged once.
    pub async fn confirm_advert(&self, id: AdvertId) -> Result<(), AdvertError> {
        match self.confirm_and_publish(id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::error!(error = %err, advert_id = %id, "failed to confirm advert");
                Err(err)
            }
        }
    }

    async fn confirm_and_publish(&self, id: AdvertId) -> Result<(), AdvertError> {
        self.repo.confirm(id).await?;

        // The mutation is durable from here on; nothing below rolls it back.
        let advert = self.repo.get_by_id(id).await?.ok_or_else(|| NotFoundError {
            entity: "Advert",
            id: id.to_string(),
        })?;

        self.publisher.publish(AdvertConfirmed::from(&advert)).await
    }
}
