//! Movie data providers.
//!
//! The quiz only needs two things from a movie database: a prefix search that
//! returns lightweight handles, and a details lookup for a single handle.
//! `TmdbClient` implements both against The Movie Database.

mod tmdb;
mod types;

pub use tmdb::{TmdbClient, TmdbConfig};
pub use types::*;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when talking to a movie data provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP request failed.
    #[error("HTTP request failed")]
    HttpError(#[from] reqwest::Error),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded, please wait before retrying")]
    RateLimitExceeded,

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client not configured (missing API key, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// A source of movie data.
#[async_trait]
pub trait MovieProvider: Send + Sync {
    /// Search for titles matching a prefix.
    async fn search(&self, prefix: &str) -> Result<Vec<MovieRef>, ProviderError>;

    /// Fetch the full record of a single movie.
    async fn details(&self, id: u32) -> Result<MovieRecord, ProviderError>;
}

#[async_trait]
impl<T: MovieProvider + ?Sized> MovieProvider for Arc<T> {
    async fn search(&self, prefix: &str) -> Result<Vec<MovieRef>, ProviderError> {
        (**self).search(prefix).await
    }

    async fn details(&self, id: u32) -> Result<MovieRecord, ProviderError> {
        (**self).details(id).await
    }
}
