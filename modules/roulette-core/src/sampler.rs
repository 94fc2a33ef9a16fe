//! Uniform random selection over a paginated search.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use yelp_client::{Business, SearchPage, SearchQuery, YelpClient, YelpError};

use crate::types::SearchRequest;

/// Results requested per API call.
pub const PAGE_SIZE: u32 = 50;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("search request failed: {0}")]
    Search(#[from] YelpError),

    #[error("no businesses found matching the search criteria")]
    EmptyResult,
}

// ---------------------------------------------------------------------------
// BusinessSearcher — one page of remote results
// ---------------------------------------------------------------------------

#[async_trait]
pub trait BusinessSearcher: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> yelp_client::Result<SearchPage>;
}

#[async_trait]
impl BusinessSearcher for YelpClient {
    async fn search(&self, query: &SearchQuery) -> yelp_client::Result<SearchPage> {
        YelpClient::search(self, query).await
    }
}

#[async_trait]
impl<T: BusinessSearcher + ?Sized> BusinessSearcher for Arc<T> {
    async fn search(&self, query: &SearchQuery) -> yelp_client::Result<SearchPage> {
        (**self).search(query).await
    }
}

#[async_trait]
impl<T: BusinessSearcher + ?Sized> BusinessSearcher for Box<T> {
    async fn search(&self, query: &SearchQuery) -> yelp_client::Result<SearchPage> {
        (**self).search(query).await
    }
}

// ---------------------------------------------------------------------------
// RandomSampler
// ---------------------------------------------------------------------------

/// Builds a sample pool from successive result pages and picks one business.
///
/// The generator is shared behind a mutex so one sampler can serve
/// overlapping requests. Dropping the `random_business` future aborts any
/// in-flight page request.
pub struct RandomSampler<S, R = StdRng> {
    searcher: S,
    rng: Mutex<R>,
}

impl<S: BusinessSearcher> RandomSampler<S, StdRng> {
    /// Seed from the operating system's entropy source.
    pub fn from_os_rng(searcher: S) -> Self {
        Self::new(searcher, StdRng::from_os_rng())
    }
}

impl<S: BusinessSearcher, R: Rng + Send> RandomSampler<S, R> {
    pub fn new(searcher: S, rng: R) -> Self {
        Self {
            searcher,
            rng: Mutex::new(rng),
        }
    }

    pub fn searcher(&self) -> &S {
        &self.searcher
    }

    /// Accumulate results until the pool reaches `max_sample_size` or the API
    /// has no more to give. Always fetches at least one page.
    pub async fn collect_pool(&self, request: &SearchRequest) -> Result<Vec<Business>, SampleError> {
        let mut pool: Vec<Business> = Vec::new();

        loop {
            let offset = u32::try_from(pool.len()).unwrap_or(u32::MAX);
            let page = self
                .searcher
                .search(&request.page_query(offset, PAGE_SIZE))
                .await?;

            let fetched = page.businesses.len();
            pool.extend(page.businesses);

            let reached_bound = pool.len() >= request.max_sample_size;
            let reached_total = pool.len() >= page.total as usize;
            // An empty page before the reported total would otherwise loop forever.
            if reached_bound || reached_total || fetched == 0 {
                tracing::debug!(
                    pool = pool.len(),
                    total = page.total,
                    reached_bound,
                    reached_total,
                    "Sample pool complete"
                );
                break;
            }
        }

        Ok(pool)
    }

    pub async fn random_business(&self, request: &SearchRequest) -> Result<Business, SampleError> {
        let pool = self.collect_pool(request).await?;
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        pick(pool, &mut *rng)
    }
}

/// Take one element at a uniformly random index.
pub fn pick<R: Rng>(mut pool: Vec<Business>, rng: &mut R) -> Result<Business, SampleError> {
    if pool.is_empty() {
        return Err(SampleError::EmptyResult);
    }
    let index = rng.random_range(0..pool.len());
    tracing::debug!(index, pool = pool.len(), "Picked business");
    Ok(pool.swap_remove(index))
}
