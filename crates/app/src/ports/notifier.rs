//! Notifier port — publish confirmation events to a topic.

use std::future::Future;

use advert_domain::error::AdvertError;
use advert_domain::event::AdvertConfirmed;

/// Publishes confirmation events to interested subscribers.
pub trait ConfirmationPublisher {
    /// Publish a confirmation event to the configured topic.
    fn publish(
        &self,
        event: AdvertConfirmed,
    ) -> impl Future<Output = Result<(), AdvertError>> + Send;
}

impl<T: ConfirmationPublisher + Send + Sync> ConfirmationPublisher for std::sync::Arc<T> {
    fn publish(
        &self,
        event: AdvertConfirmed,
    ) -> impl Future<Output = Result<(), AdvertError>> + Send {
        (**self).publish(event)
    }
}
