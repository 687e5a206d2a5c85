use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ti;

/// Where and how searches are sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Endpoint {
    /// The CORS relay requests are routed through.
    pub relay_host: String,
    /// The search endpoint the relay forwards to.
    pub search_url: String,
    /// Upper bound on a single search, in seconds.
    pub timeout_secs: f32,
}
impl Endpoint {
    /// The request timeout. Anything but a positive finite number of seconds
    /// falls back to the default.
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f32(self.timeout_secs)
            .ok()
            .filter(|timeout| !timeout.is_zero())
            .unwrap_or(ti::Client::DEFAULT_TIMEOUT)
    }
}
impl Default for Endpoint {
    fn default() -> Self {
        Self {
            relay_host: ti::Client::DEFAULT_RELAY_HOST.to_string(),
            search_url: ti::Client::DEFAULT_SEARCH_URL.to_string(),
            timeout_secs: ti::Client::DEFAULT_TIMEOUT.as_secs_f32(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_timeout() {
        let mut endpoint = Endpoint::default();
        assert_eq!(endpoint.timeout(), Duration::from_secs(10));

        endpoint.timeout_secs = 2.5;
        assert_eq!(endpoint.timeout(), Duration::from_millis(2500));

        endpoint.timeout_secs = -1.0;
        assert_eq!(endpoint.timeout(), ti::Client::DEFAULT_TIMEOUT);

        endpoint.timeout_secs = 0.0;
        assert_eq!(endpoint.timeout(), ti::Client::DEFAULT_TIMEOUT);

        endpoint.timeout_secs = f32::NAN;
        assert_eq!(endpoint.timeout(), ti::Client::DEFAULT_TIMEOUT);
    }
}
