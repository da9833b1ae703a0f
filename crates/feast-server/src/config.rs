use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_address: SocketAddr,

    /// Path to RocksDB database
    pub database_path: PathBuf,

    /// PEM-encoded RSA private key used to sign session tokens
    pub jwt_private_key_path: PathBuf,

    /// PEM-encoded RSA public key used to verify session tokens
    pub jwt_public_key_path: PathBuf,

    /// Login-failure events buffered per WebSocket observer
    pub event_bus_capacity: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| "127.0.0.1:8080".to_string())
            .parse()
            .context("BIND_ADDRESS must be a socket address like 127.0.0.1:8080")?;

        let database_path = lookup("DATABASE_PATH")
            .unwrap_or_else(|| "./data/gorilla-feast.db".to_string())
            .into();

        let jwt_private_key_path = lookup("JWT_PRIVATE_KEY_PATH")
            .context("JWT_PRIVATE_KEY_PATH environment variable required")?
            .into();

        let jwt_public_key_path = lookup("JWT_PUBLIC_KEY_PATH")
            .context("JWT_PUBLIC_KEY_PATH environment variable required")?
            .into();

        let event_bus_capacity = lookup("EVENT_BUS_CAPACITY")
            .unwrap_or_else(|| "16".to_string())
            .parse()
            .context("EVENT_BUS_CAPACITY must be a positive integer")?;

        if event_bus_capacity == 0 {
            anyhow::bail!("EVENT_BUS_CAPACITY must be a positive integer");
        }

        Ok(Config {
            bind_address,
            database_path,
            jwt_private_key_path,
            jwt_public_key_path,
            event_bus_capacity,
        })
    }
}
