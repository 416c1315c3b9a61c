use std::env;

pub const DEFAULT_INDEXER_URL: &str = "https://testnet-idx.algonode.cloud";

#[derive(Debug, Clone)]
pub struct Config {
    pub indexer_url: String,
    pub http_bind_addr: String,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("ALGO_INDEXER_URL is set but empty")]
    EmptyIndexerUrl,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let indexer_url =
            env::var("ALGO_INDEXER_URL").unwrap_or_else(|_| DEFAULT_INDEXER_URL.to_string());
        if indexer_url.trim().is_empty() {
            return Err(ConfigError::EmptyIndexerUrl);
        }
        let http_bind_addr = env::var("HTTP_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        Ok(Self {
            indexer_url,
            http_bind_addr,
        })
    }
}
