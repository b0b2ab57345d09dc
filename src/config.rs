//! Configuration for bookstock
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;
use std::time::Duration;

/// Main configuration shared by the server and the client binaries
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// JSON file the catalog is loaded from and synced to
    pub catalog_path: PathBuf,

    /// Write the catalog back to `catalog_path` when the server stops
    pub sync_on_shutdown: bool,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address (server) or target address (client)
    pub listen_addr: String,

    /// Client request timeout (milliseconds, 0 = no timeout)
    pub client_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("./catalog.json"),
            sync_on_shutdown: true,
            listen_addr: "127.0.0.1:3000".to_string(),
            client_timeout_ms: 5000,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Client timeout as a `Duration`, `None` when disabled
    pub fn client_timeout(&self) -> Option<Duration> {
        if self.client_timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.client_timeout_ms))
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the catalog file path
    pub fn catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.catalog_path = path.into();
        self
    }

    /// Enable or disable syncing the catalog on shutdown
    pub fn sync_on_shutdown(mut self, enabled: bool) -> Self {
        self.config.sync_on_shutdown = enabled;
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the client timeout (in milliseconds)
    pub fn client_timeout_ms(mut self, ms: u64) -> Self {
        self.config.client_timeout_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
