//! MQTT notifier configuration.

use serde::Deserialize;

/// Configuration for the MQTT notifier.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MqttConfig {
    /// MQTT broker hostname or IP address.
    pub broker_host: String,
    /// MQTT broker port.
    pub broker_port: u16,
    /// MQTT client identifier.
    pub client_id: String,
    /// Topic the confirmation events are published to. Has no default —
    /// deployments must configure it explicitly.
    pub topic: String,
    /// Keep-alive interval in seconds.
    pub keep_alive_secs: u16,
    /// How long to wait for the broker to ack a publish, in seconds.
    pub publish_timeout_secs: u16,
}

impl Default for MqttConfig {
    fn default() -> Self {
        Self {
            broker_host: "localhost".to_string(),
            broker_port: 1883,
            client_id: "advertd".to_string(),
            topic: String::new(),
            keep_alive_secs: 30,
            publish_timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = MqttConfig::default();
        assert_eq!(config.broker_host, "localhost");
        assert_eq!(config.broker_port, 1883);
        assert_eq!(config.client_id, "advertd");
        assert!(config.topic.is_empty());
        assert_eq!(config.keep_alive_secs, 30);
        assert_eq!(config.publish_timeout_secs, 10);
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            broker_host = "mqtt.example.com"
            broker_port = 8883
            client_id = "advert-gateway"
            topic = "adverts/confirmed"
            keep_alive_secs = 60
            publish_timeout_secs = 5
        "#;
        let config: MqttConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.broker_host, "mqtt.example.com");
        assert_eq!(config.broker_port, 8883);
        assert_eq!(config.client_id, "advert-gateway");
        assert_eq!(config.topic, "adverts/confirmed");
        assert_eq!(config.keep_alive_secs, 60);
        assert_eq!(config.publish_timeout_secs, 5);
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let toml = r#"topic = "adverts/confirmed""#;
        let config: MqttConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.broker_host, "localhost");
        assert_eq!(config.broker_port, 1883);
        assert_eq!(config.topic, "adverts/confirmed");
    }
}
