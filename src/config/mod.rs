//! Application configuration management

use std::env;

use anyhow::{Context, Result};

/// Log output format for the console subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host (for generating URLs)
    pub host: String,

    /// Server port
    pub port: u16,

    /// Load the built-in books and authors at startup
    pub seed_data: bool,

    /// Console log format
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => anyhow::bail!("Invalid LOG_FORMAT: {other}"),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "localhost".to_string()),

            port: lookup("PORT")
                .unwrap_or_else(|| "4000".to_string())
                .parse()
                .context("Invalid PORT")?,

            seed_data: lookup("SEED_DATA")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),

            log_format,
        })
    }

    /// Public URL of the GraphQL endpoint
    pub fn graphql_url(&self) -> String {
        format!("http://{}:{}/graphql", self.host, self.port)
    }
}
