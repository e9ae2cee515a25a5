//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`AdvertError`]
//! at the port boundary. Adapters wrap their transport errors in the
//! `Storage` / `Publish` variants so the application layer never depends on
//! sqlx or MQTT types.

/// Top-level error for all gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum AdvertError {
    /// A domain invariant was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced advert does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The storage layer failed for a reason other than a missing record.
    #[error("storage failure: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Publishing the confirmation event failed.
    #[error("publish failure: {0}")]
    Publish(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant failed.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An advert must carry a non-empty title.
    #[error("advert title must not be empty")]
    EmptyTitle,

    /// The supplied identifier is not a valid UUID.
    #[error("malformed advert id")]
    MalformedId,
}

/// A lookup failed because the record does not exist.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Human-readable entity kind (e.g. `"Advert"`).
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Advert",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Advert abc not found");
    }

    #[test]
    fn should_propagate_validation_message_transparently() {
        let err: AdvertError = ValidationError::EmptyTitle.into();
        assert_eq!(err.to_string(), "advert title must not be empty");
    }

    #[test]
    fn should_include_source_message_in_storage_display() {
        let inner = std::io::Error::other("disk on fire");
        let err = AdvertError::Storage(Box::new(inner));
        assert_eq!(err.to_string(), "storage failure: disk on fire");
    }
}
