//! TMDB (The Movie Database) API client.
//!
//! TMDB requires an API key for access.
//! Rate limits are generous (around 40 requests per second).

use std::time::Duration;

use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{first_paragraph, year_from_date, MovieKind, MovieRecord, MovieRef};
use super::{MovieProvider, ProviderError};

/// TMDB API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TmdbConfig {
    /// TMDB API key (required).
    #[serde(default)]
    pub api_key: String,
    /// Base URL (default: https://api.themoviedb.org/3).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Response language, e.g. "en-US". TMDB's default when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: None,
            language: None,
            timeout_secs: default_timeout(),
        }
    }
}

/// TMDB API client.
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    language: Option<String>,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig) -> Result<Self, ProviderError> {
        if config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "TMDB API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let base_url = config
            .base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| "https://api.themoviedb.org/3".to_string());

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
            language: config.language,
        })
    }

    /// Base query parameters sent with every request.
    fn base_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("api_key", self.api_key.clone())];
        if let Some(language) = &self.language {
            query.push(("language", language.clone()));
        }
        query
    }

    /// Search across movies, TV and people by query.
    pub async fn search_multi(&self, query: &str) -> Result<Vec<MovieRef>, ProviderError> {
        let url = format!("{}/search/multi", self.base_url);

        debug!("TMDB multi search: query='{}'", query);

        let response = self
            .client
            .get(&url)
            .query(&self.base_query())
            .query(&[("query", query), ("page", "1")])
            .send()
            .await?;

        let response = check_status(response, || format!("search '{}'", query)).await?;

        let search_result: TmdbSearchResponse = response.json().await.map_err(|e| {
            ProviderError::ParseError(format!("Failed to parse multi search response: {}", e))
        })?;

        Ok(search_result
            .results
            .into_iter()
            .map(MovieRef::from)
            .collect())
    }

    /// Get a movie with its credits by TMDB ID.
    pub async fn get_movie(&self, tmdb_id: u32) -> Result<MovieRecord, ProviderError> {
        let url = format!("{}/movie/{}", self.base_url, tmdb_id);

        debug!("TMDB get movie: id={}", tmdb_id);

        let response = self
            .client
            .get(&url)
            .query(&self.base_query())
            .query(&[("append_to_response", "credits")])
            .send()
            .await?;

        let response = check_status(response, || format!("Movie ID {}", tmdb_id)).await?;

        let movie: TmdbMovieDetails = response.json().await.map_err(|e| {
            ProviderError::ParseError(format!("Failed to parse movie response: {}", e))
        })?;

        Ok(movie.into())
    }
}

#[async_trait::async_trait]
impl MovieProvider for TmdbClient {
    async fn search(&self, prefix: &str) -> Result<Vec<MovieRef>, ProviderError> {
        self.search_multi(prefix).await
    }

    async fn details(&self, id: u32) -> Result<MovieRecord, ProviderError> {
        self.get_movie(id).await
    }
}

/// Map non-success statuses to provider errors.
async fn check_status(
    response: Response,
    resource: impl FnOnce() -> String,
) -> Result<Response, ProviderError> {
    let status = response.status();
    if status == 401 {
        return Err(ProviderError::NotConfigured(
            "Invalid TMDB API key".to_string(),
        ));
    }
    if status == 404 {
        return Err(ProviderError::NotFound(resource()));
    }
    if status == 429 {
        return Err(ProviderError::RateLimitExceeded);
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::ApiError {
            status: status.as_u16(),
            message: body,
        });
    }
    Ok(response)
}

// ============================================================================
// TMDB API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct TmdbSearchResponse {
    #[serde(default)]
    results: Vec<TmdbMultiResult>,
}

#[derive(Debug, Deserialize)]
struct TmdbMultiResult {
    id: u32,
    #[serde(default)]
    media_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbMovieDetails {
    id: u32,
    title: String,
    release_date: Option<String>,
    overview: Option<String>,
    #[serde(default)]
    credits: Option<TmdbCredits>,
}

#[derive(Debug, Deserialize)]
struct TmdbCredits {
    #[serde(default)]
    crew: Vec<TmdbCrewMember>,
}

#[derive(Debug, Deserialize)]
struct TmdbCrewMember {
    name: String,
    #[serde(default)]
    job: Option<String>,
}

// ============================================================================
// Conversions
// ============================================================================

impl From<TmdbMultiResult> for MovieRef {
    fn from(r: TmdbMultiResult) -> Self {
        Self {
            id: r.id,
            kind: r
                .media_type
                .as_deref()
                .map(MovieKind::from_media_type)
                .unwrap_or(MovieKind::Other),
        }
    }
}

impl From<TmdbMovieDetails> for MovieRecord {
    fn from(d: TmdbMovieDetails) -> Self {
        let mut directors: Vec<String> = Vec::new();
        for member in d.credits.map(|c| c.crew).unwrap_or_default() {
            // Crew lists can repeat a person for different departments
            if member.job.as_deref() == Some("Director") && !directors.contains(&member.name) {
                directors.push(member.name);
            }
        }

        Self {
            id: d.id,
            title: d.title,
            year: d.release_date.as_deref().and_then(year_from_date),
            plot: d.overview.as_deref().and_then(first_paragraph),
            directors,
        }
    }
}
