//! # advert-domain
//!
//! Pure domain model for the advert gateway.
//!
//! ## Responsibilities
//! - Foundational types: typed identifier, error conventions, timestamps
//! - Define the **Advert** entity and its lifecycle (`Pending` → `Confirmed`)
//! - Define **`AdvertDraft`** (what a caller submits) and
//!   **`AdvertConfirmed`** (the event emitted after confirmation)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod advert;
pub mod error;
pub mod event;
pub mod id;
pub mod time;
