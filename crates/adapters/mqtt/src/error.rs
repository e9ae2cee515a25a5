//! MQTT adapter error types.

use advert_domain::error::AdvertError;

/// Errors specific to the MQTT notifier.
#[derive(Debug, thiserror::Error)]
pub enum MqttError {
    /// The rumqttc client rejected the request.
    #[error("MQTT client error: {0}")]
    Client(#[source] rumqttc::ClientError),

    /// The connection to the broker failed while awaiting the ack.
    #[error("MQTT connection error: {0}")]
    Connection(#[source] rumqttc::ConnectionError),

    /// Failed to serialize the event payload as JSON.
    #[error("failed to serialize event payload")]
    Serialize(#[source] serde_json::Error),

    /// The broker did not ack the publish within the configured timeout.
    #[error("publish timed out")]
    Timeout,
}

impl From<MqttError> for AdvertError {
    fn from(err: MqttError) -> Self {
        Self::Publish(Box::new(err))
    }
}
