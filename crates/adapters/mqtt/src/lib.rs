//! # advert-adapter-mqtt
//!
//! MQTT notifier adapter — publishes confirmation events to a broker topic.
//!
//! ## Responsibilities
//! - Implement the [`ConfirmationPublisher`](advert_app::ports::ConfirmationPublisher)
//!   port defined in `advert-app`
//! - Serialize [`AdvertConfirmed`](advert_domain::event::AdvertConfirmed)
//!   events as JSON payloads
//! - Connect, publish with QoS 1, await the broker ack, and disconnect —
//!   one client per call, released on every exit path
//!
//! ## Dependency rule
//! Same as other adapters: depends on `advert-app` and `advert-domain`.

pub mod config;
pub mod error;
pub mod publisher;

pub use config::MqttConfig;
pub use publisher::MqttConfirmationPublisher;
