//! Confirmation event — the message emitted after a successful confirmation.

use serde::{Deserialize, Serialize};

use crate::advert::Advert;
use crate::id::AdvertId;

/// Read-only projection of an [`Advert`] published after confirmation.
///
/// Serialized with PascalCase keys (`{"Id": ..., "Title": ...}`) so that
/// downstream consumers of the original topic keep working unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdvertConfirmed {
    pub id: AdvertId,
    pub title: String,
}

impl From<&Advert> for AdvertConfirmed {
    fn from(advert: &Advert) -> Self {
        Self {
            id: advert.id,
            title: advert.title.clone(),
        }
    }
}
