use serde::{Deserialize, Serialize};
use tunesearch_core::config::Endpoint;

use crate::style::Style;

/// Startup configuration. Read once and handed to the shell; nothing mutates
/// it while the app runs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub endpoint: Endpoint,
    #[serde(default)]
    pub style: Style,
}
impl Config {
    pub const FILENAME: &str = "tunesearch-tui.toml";

    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILENAME) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => panic!("Failed to parse {}: {e}", Self::FILENAME),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no config file found, using defaults");
                Config::default()
            }
            Err(e) => {
                panic!("Failed to read {}: {e}", Self::FILENAME)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct General {
    pub tick_rate_ms: u64,
}
impl Default for General {
    fn default() -> Self {
        Self { tick_rate_ms: 100 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), config);
    }

    #[test]
    fn test_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [endpoint]
            relay_host = "relay.example.com"
            timeout_secs = 3.0
            "#,
        )
        .unwrap();
        assert_eq!(config.endpoint.relay_host, "relay.example.com");
        assert_eq!(
            config.endpoint.search_url,
            Endpoint::default().search_url
        );
        assert_eq!(config.general, General::default());
    }
}
