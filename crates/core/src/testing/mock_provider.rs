//! Mock movie provider for testing.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::provider::{MovieProvider, MovieRecord, MovieRef, ProviderError};

/// A recorded provider query for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedProviderQuery {
    Search { prefix: String },
    Details { id: u32 },
}

/// Mock implementation of the MovieProvider trait.
///
/// Provides controllable behavior for testing:
/// - Serve configurable movie records
/// - Track queries for assertions
/// - Fail a scripted number of calls
///
/// Unless explicit search results are set, every search returns all known
/// movies in id order, whatever the prefix.
///
/// # Example
///
/// ```rust,ignore
/// use cinequiz_core::testing::{MockMovieProvider, fixtures};
///
/// let provider = MockMovieProvider::new();
/// provider.set_movies(fixtures::catalog(10)).await;
///
/// // The next two calls fail, the third succeeds
/// provider.push_error(ProviderError::RateLimitExceeded).await;
/// provider.push_error(ProviderError::RateLimitExceeded).await;
/// ```
#[derive(Debug)]
pub struct MockMovieProvider {
    /// Movie records by ID.
    movies: Arc<RwLock<HashMap<u32, MovieRecord>>>,
    /// Explicit search results, overriding the catalog listing.
    search_results: Arc<RwLock<Option<Vec<MovieRef>>>>,
    /// Recorded queries.
    queries: Arc<RwLock<Vec<RecordedProviderQuery>>>,
    /// Errors returned by the next calls, in order.
    errors: Arc<RwLock<VecDeque<ProviderError>>>,
}

impl Default for MockMovieProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMovieProvider {
    /// Create a new empty mock provider.
    pub fn new() -> Self {
        Self {
            movies: Arc::new(RwLock::new(HashMap::new())),
            search_results: Arc::new(RwLock::new(None)),
            queries: Arc::new(RwLock::new(Vec::new())),
            errors: Arc::new(RwLock::new(VecDeque::new())),
        }
    }

    // =========================================================================
    // Catalog Configuration
    // =========================================================================

    /// Add a movie record.
    pub async fn add_movie(&self, movie: MovieRecord) {
        self.movies.write().await.insert(movie.id, movie);
    }

    /// Set multiple movies at once.
    pub async fn set_movies(&self, movies: Vec<MovieRecord>) {
        let mut map = self.movies.write().await;
        map.clear();
        for movie in movies {
            map.insert(movie.id, movie);
        }
    }

    /// Return exactly these refs from every search.
    pub async fn set_search_results(&self, results: Vec<MovieRef>) {
        *self.search_results.write().await = Some(results);
    }

    // =========================================================================
    // Query Recording
    // =========================================================================

    /// Get all recorded queries.
    pub async fn recorded_queries(&self) -> Vec<RecordedProviderQuery> {
        self.queries.read().await.clone()
    }

    /// Number of searches that reached the catalog.
    pub async fn search_count(&self) -> usize {
        self.queries
            .read()
            .await
            .iter()
            .filter(|q| matches!(q, RecordedProviderQuery::Search { .. }))
            .count()
    }

    /// Number of detail lookups that reached the catalog.
    pub async fn details_count(&self) -> usize {
        self.queries
            .read()
            .await
            .iter()
            .filter(|q| matches!(q, RecordedProviderQuery::Details { .. }))
            .count()
    }

    // =========================================================================
    // Error Injection
    // =========================================================================

    /// Queue an error for the next call that has not already been assigned
    /// one.
    pub async fn push_error(&self, error: ProviderError) {
        self.errors.write().await.push_back(error);
    }

    /// Clear any pending errors.
    pub async fn clear_errors(&self) {
        self.errors.write().await.clear();
    }

    async fn take_error(&self) -> Option<ProviderError> {
        self.errors.write().await.pop_front()
    }

    async fn record(&self, query: RecordedProviderQuery) {
        self.queries.write().await.push(query);
    }
}

#[async_trait]
impl MovieProvider for MockMovieProvider {
    async fn search(&self, prefix: &str) -> Result<Vec<MovieRef>, ProviderError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedProviderQuery::Search {
            prefix: prefix.to_string(),
        })
        .await;

        if let Some(results) = self.search_results.read().await.as_ref() {
            return Ok(results.clone());
        }

        let mut ids: Vec<u32> = self.movies.read().await.keys().copied().collect();
        ids.sort_unstable();
        Ok(ids.into_iter().map(MovieRef::movie).collect())
    }

    async fn details(&self, id: u32) -> Result<MovieRecord, ProviderError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedProviderQuery::Details { id }).await;

        self.movies
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(format!("Movie {} not found", id)))
    }
}
