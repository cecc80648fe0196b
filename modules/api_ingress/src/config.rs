use runtime::ServerConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP host settings, derived from the `server` section of the app config.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiIngressConfig {
    pub bind_addr: String,
    #[serde(default)]
    pub cors_enabled: bool,
    /// 0 disables the timeout layer.
    #[serde(default)]
    pub request_timeout_secs: u64,
    pub body_limit_bytes: usize,
}

impl Default for ApiIngressConfig {
    fn default() -> Self {
        Self::from(&ServerConfig::default())
    }
}

impl From<&ServerConfig> for ApiIngressConfig {
    fn from(server: &ServerConfig) -> Self {
        Self {
            bind_addr: server.bind_addr(),
            cors_enabled: server.cors_enabled,
            request_timeout_secs: server.timeout_sec,
            body_limit_bytes: server.body_limit_bytes,
        }
    }
}

impl ApiIngressConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}
