use std::env;
use tracing::warn;

pub const HOST_ENV: &str = "FUSION_HOST";
pub const PORT_ENV: &str = "FUSION_PORT";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Where the HTTP service listens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_string(), port: DEFAULT_PORT }
    }
}

impl ServiceConfig {
    /// Reads `FUSION_HOST` / `FUSION_PORT`; an unparsable port is logged and
    /// replaced by the default.
    pub fn from_environment() -> Self {
        let host = env::var(HOST_ENV).unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var(PORT_ENV) {
            Ok(raw) => raw.parse::<u16>().unwrap_or_else(|e| {
                warn!(value = %raw, error = %e, "Ignoring invalid {PORT_ENV}");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };
        Self { host, port }
    }

    /// Command line values win over the environment
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
