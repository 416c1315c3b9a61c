use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use url::Url;

use crate::lookup_stats::{LookupKind, LOOKUP_STATS};
use crate::models::{AssetResponse, Block, TransactionList, TransactionResponse};

/// Largest `limit` forwarded to the indexer for recent-transaction queries.
pub const MAX_RECENT_LIMIT: u64 = 100;

#[derive(thiserror::Error, Debug)]
pub enum IndexerError {
    #[error("not found")]
    NotFound,
    #[error("indexer returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("indexer request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid request path: {0}")]
    Path(#[from] url::ParseError),
}

/// Read-only client for an Algorand indexer's v2 REST API.
#[derive(Clone)]
pub struct IndexerClient {
    client: reqwest::Client,
    base_url: Url,
}

impl IndexerClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("failed to build reqwest client")?;
        // Trailing slash so Url::join keeps any path prefix in the base.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized).context("invalid ALGO_INDEXER_URL")?;
        Ok(Self { client, base_url })
    }

    pub async fn get_transaction(&self, txid: &str) -> Result<TransactionResponse, IndexerError> {
        let res = self.get_json(&format!("v2/transactions/{}", txid)).await?;
        LOOKUP_STATS.record(LookupKind::Transaction);
        Ok(res)
    }

    pub async fn get_recent_transactions(
        &self,
        limit: u64,
    ) -> Result<TransactionList, IndexerError> {
        let limit = limit.min(MAX_RECENT_LIMIT);
        let res = self
            .get_json(&format!("v2/transactions?limit={}", limit))
            .await?;
        LOOKUP_STATS.record(LookupKind::Transaction);
        Ok(res)
    }

    pub async fn get_asset(&self, asset_id: u64) -> Result<AssetResponse, IndexerError> {
        let res = self.get_json(&format!("v2/assets/{}", asset_id)).await?;
        LOOKUP_STATS.record(LookupKind::Asset);
        Ok(res)
    }

    pub async fn get_block(&self, round: u64) -> Result<Block, IndexerError> {
        let res = self.get_json(&format!("v2/blocks/{}", round)).await?;
        LOOKUP_STATS.record(LookupKind::Block);
        Ok(res)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, IndexerError> {
        let url = self.base_url.join(path)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(IndexerError::NotFound);
        }
        if !status.is_success() {
            return Err(IndexerError::Status(status));
        }
        Ok(response.json::<T>().await?)
    }
}
