//! Advert — the entity being created and, later, confirmed.

use serde::{Deserialize, Serialize};

use crate::error::{AdvertError, ValidationError};
use crate::id::AdvertId;
use crate::time::Timestamp;

/// What a caller submits to create an advert.
///
/// Transient — owned by the caller until storage accepts it and assigns an
/// [`AdvertId`]. The PascalCase wire names keep the JSON shape of the
/// original public API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdvertDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AdvertDraft {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Validation`] when `title` is empty.
    pub fn validate(&self) -> Result<(), AdvertError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        Ok(())
    }
}

/// Lifecycle state of a stored advert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvertStatus {
    Pending,
    Confirmed,
}

impl AdvertStatus {
    /// Stable string form used by the storage layer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
        }
    }
}

/// A persisted advert record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advert {
    pub id: AdvertId,
    pub title: String,
    pub description: Option<String>,
    pub status: AdvertStatus,
    pub created_at: Timestamp,
}

impl Advert {
    /// Create a builder for constructing an [`Advert`].
    #[must_use]
    pub fn builder() -> AdvertBuilder {
        AdvertBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Validation`] when `title` is empty.
    pub fn validate(&self) -> Result<(), AdvertError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Advert`].
#[derive(Debug, Default)]
pub struct AdvertBuilder {
    id: Option<AdvertId>,
    title: Option<String>,
    description: Option<String>,
    status: Option<AdvertStatus>,
    created_at: Option<Timestamp>,
}

impl AdvertBuilder {
    #[must_use]
    pub fn id(mut self, id: AdvertId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: AdvertStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, validate, and return an [`Advert`].
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Validation`] if `title` is missing or empty.
    pub fn build(self) -> Result<Advert, AdvertError> {
        let advert = Advert {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            description: self.description,
            status: self.status.unwrap_or(AdvertStatus::Pending),
            created_at: self.created_at.unwrap_or_else(crate::time::now),
        };
        advert.validate()?;
        Ok(advert)
    }
}
