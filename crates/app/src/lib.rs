//! # advert-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `AdvertRepository` — add, confirm, and fetch adverts
//!   - `ConfirmationPublisher` — publish confirmation events to a topic
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `AdvertService` — create an advert, confirm it and publish the event
//! - Orchestrate domain objects without knowing *how* persistence or
//!   messaging works
//!
//! ## Dependency rule
//! Depends on `advert-domain` only. Never imports adapter crates. Adapters
//! depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
