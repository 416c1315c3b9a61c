pub mod analysis;
pub mod api;
pub mod config;
pub mod indexer;
pub mod lookup_stats;
pub mod models;
