//! MQTT implementation of [`ConfirmationPublisher`].

use std::future::Future;
use std::time::Duration;

use rumqttc::{AsyncClient, Event, MqttOptions, Packet, QoS};

use advert_app::ports::ConfirmationPublisher;
use advert_domain::error::AdvertError;
use advert_domain::event::AdvertConfirmed;

use crate::config::MqttConfig;
use crate::error::MqttError;

/// Publishes confirmation events to an MQTT topic.
///
/// A fresh client is created for each publish and disconnected before the
/// call returns, so the connection is released on every exit path. This
/// trades connection reuse for a deterministic lifetime per call.
pub struct MqttConfirmationPublisher {
    config: MqttConfig,
}

impl MqttConfirmationPublisher {
    /// Create a publisher from the given configuration.
    #[must_use]
    pub fn new(config: MqttConfig) -> Self {
        Self { config }
    }

    /// Connect, publish with QoS 1, and wait for the broker ack.
    async fn deliver(&self, payload: Vec<u8>) -> Result<(), MqttError> {
        let mut options = MqttOptions::new(
            &self.config.client_id,
            &self.config.broker_host,
            self.config.broker_port,
        );
        options.set_keep_alive(Duration::from_secs(u64::from(self.config.keep_alive_secs)));

        let (client, mut eventloop) = AsyncClient::new(options, 10);

        client
            .publish(&self.config.topic, QoS::AtLeastOnce, false, payload)
            .await
            .map_err(MqttError::Client)?;

        // Drive the event loop until the broker acks the publish.
        loop {
            match eventloop.poll().await {
                Ok(Event::Incoming(Packet::PubAck(_))) => break,
                Ok(_) => {}
                Err(err) => return Err(MqttError::Connection(err)),
            }
        }

        client.disconnect().await.map_err(MqttError::Client)?;

        tracing::debug!(topic = %self.config.topic, "published confirmation event");
        Ok(())
    }
}

impl ConfirmationPublisher for MqttConfirmationPublisher {
    fn publish(
        &self,
        event: AdvertConfirmed,
    ) -> impl Future<Output = Result<(), AdvertError>> + Send {
        async move {
            let payload = serde_json::to_vec(&event).map_err(MqttError::Serialize)?;

            let timeout = Duration::from_secs(u64::from(self.config.publish_timeout_secs));
            tokio::time::timeout(timeout, self.deliver(payload))
                .await
                .map_err(|_| MqttError::Timeout)??;

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advert_domain::id::AdvertId;

    #[tokio::test]
    async fn should_time_out_when_broker_is_unreachable() {
        let config = MqttConfig {
            // Reserved documentation address, nothing listens there.
            broker_host: "192.0.2.1".to_string(),
            topic: "adverts/confirmed".to_string(),
            publish_timeout_secs: 1,
            ..MqttConfig::default()
        };
        let publisher = MqttConfirmationPublisher::new(config);
        let event = AdvertConfirmed {
            id: AdvertId::new(),
            title: "Vintage bicycle".to_string(),
        };

        let result = publisher.publish(event).await;
        assert!(matches!(result, Err(AdvertError::Publish(_))));
    }
}
