//! Server configuration.

use std::net::SocketAddr;

use todolist_service::ServiceConfig;

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:5080";

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,
    /// Application service configuration
    pub service: ServiceConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5080)),
            service: ServiceConfig::default(),
        }
    }
}
