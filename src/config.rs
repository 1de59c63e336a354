//! Configuration for Agora
//!
//! Centralized configuration with sensible defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AgoraError, Result};

/// Main configuration for an Agora instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Dispatch Configuration
    // -------------------------------------------------------------------------
    /// Bounded wait for a single manager request (milliseconds)
    pub request_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Manager Configuration
    // -------------------------------------------------------------------------
    /// What happens to the replies of a removed comment
    pub comment_removal: CommentRemoval,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP listen address
    pub listen_addr: String,

    /// Max concurrent client connections
    pub max_connections: usize,

    /// Connection read timeout (milliseconds)
    pub read_timeout_ms: u64,

    /// Connection write timeout (milliseconds)
    pub write_timeout_ms: u64,
}

/// Comment removal policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CommentRemoval {
    /// Remove only the comment; its replies stay fetchable by id but are
    /// no longer reachable from the tree
    #[default]
    Orphan,

    /// Remove the comment together with its whole reply subtree
    Cascade,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_timeout_ms: 5000,
            comment_removal: CommentRemoval::Orphan,
            listen_addr: "127.0.0.1:7878".to_string(),
            max_connections: 1024,
            read_timeout_ms: 5000,
            write_timeout_ms: 5000,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Reject settings no server can run with
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_ms == 0 {
            return Err(AgoraError::Config(
                "request_timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.max_connections == 0 {
            return Err(AgoraError::Config(
                "max_connections must be greater than zero".to_string(),
            ));
        }
        if self.listen_addr.trim().is_empty() {
            return Err(AgoraError::Config("listen_addr must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the per-request timeout (in milliseconds)
    pub fn request_timeout_ms(mut self, ms: u64) -> Self {
        self.config.request_timeout_ms = ms;
        self
    }

    /// Set the comment removal policy
    pub fn comment_removal(mut self, policy: CommentRemoval) -> Self {
        self.config.comment_removal = policy;
        self
    }

    /// Set the TCP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the maximum number of concurrent connections
    pub fn max_connections(mut self, count: usize) -> Self {
        self.config.max_connections = count;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
