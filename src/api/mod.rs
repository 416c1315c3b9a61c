use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze_transactions, BlockAnalysis};
use crate::indexer::{IndexerClient, IndexerError};
use crate::lookup_stats::{LookupSnapshot, LOOKUP_STATS};
use crate::models::{AssetResponse, Block, TransactionList, TransactionResponse};

#[derive(Clone)]
pub struct AppState {
    pub indexer: IndexerClient,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Upstream failures surface as a generic fetch error; only a definite
/// indexer 404 becomes a 404 here.
struct ApiError(IndexerError);

impl From<IndexerError> for ApiError {
    fn from(err: IndexerError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            IndexerError::NotFound => (StatusCode::NOT_FOUND, "not found".to_string()),
            err => {
                tracing::warn!("indexer fetch failed: {}", err);
                (StatusCode::BAD_GATEWAY, "fetch failed".to_string())
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn get_block(
    State(state): State<AppState>,
    Path(round): Path<u64>,
) -> Result<Json<Block>, ApiError> {
    Ok(Json(state.indexer.get_block(round).await?))
}

async fn get_block_analysis(
    State(state): State<AppState>,
    Path(round): Path<u64>,
) -> Result<Json<BlockAnalysis>, ApiError> {
    let block = state.indexer.get_block(round).await?;
    Ok(Json(analyze_transactions(&block.transactions)))
}

async fn get_transaction(
    State(state): State<AppState>,
    Path(txid): Path<String>,
) -> Result<Json<TransactionResponse>, ApiError> {
    Ok(Json(state.indexer.get_transaction(&txid).await?))
}

#[derive(Deserialize)]
struct RecentQuery {
    limit: Option<u64>,
}

async fn get_recent_transactions(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Result<Json<TransactionList>, ApiError> {
    let limit = query.limit.unwrap_or(10);
    Ok(Json(state.indexer.get_recent_transactions(limit).await?))
}

async fn get_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<u64>,
) -> Result<Json<AssetResponse>, ApiError> {
    Ok(Json(state.indexer.get_asset(asset_id).await?))
}

async fn lookup_stats() -> Json<LookupSnapshot> {
    Json(LOOKUP_STATS.snapshot())
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/block/:round", get(get_block))
        .route("/block/:round/analysis", get(get_block_analysis))
        .route("/tx/recent", get(get_recent_transactions))
        .route("/tx/:txid", get(get_transaction))
        .route("/asset/:asset_id", get(get_asset))
        .route("/stats/lookups", get(lookup_stats))
        .with_state(state)
}

pub async fn run_http_server(addr: &str, state: AppState) -> Result<()> {
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
