// Test mocks for the sampler and its callers.
//
// MockSearcher (BusinessSearcher) serves slices of an in-memory catalog by
// offset/limit, the way the Yelp API pages results. It records every query so
// tests can assert on pagination and request parameters.

use std::sync::Mutex;

use async_trait::async_trait;
use yelp_client::{Business, SearchPage, SearchQuery, YelpError};

use crate::sampler::BusinessSearcher;

/// Deterministic business fixture: id `biz-{i}`, name `Business {i}`.
pub fn business(i: usize) -> Business {
    Business {
        id: format!("biz-{i}"),
        name: format!("Business {i}"),
        url: format!("https://www.yelp.com/biz/biz-{i}"),
        price: "$$".to_string(),
    }
}

pub struct MockSearcher {
    catalog: Vec<Business>,
    reported_total: Option<u32>,
    fail_on_call: Option<usize>,
    calls: Mutex<Vec<SearchQuery>>,
}

impl MockSearcher {
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            reported_total: None,
            fail_on_call: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Catalog of `count` fixtures from [`business`].
    pub fn with_businesses(count: usize) -> Self {
        Self::new().on_businesses((0..count).map(business).collect())
    }

    pub fn on_businesses(mut self, businesses: Vec<Business>) -> Self {
        self.catalog = businesses;
        self
    }

    /// Report a total other than the catalog size.
    pub fn reporting_total(mut self, total: u32) -> Self {
        self.reported_total = Some(total);
        self
    }

    /// Fail the nth call (zero-based) with a network error.
    pub fn failing_on_call(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    pub fn calls(&self) -> Vec<SearchQuery> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockSearcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BusinessSearcher for MockSearcher {
    async fn search(&self, query: &SearchQuery) -> yelp_client::Result<SearchPage> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(query.clone());
            calls.len() - 1
        };

        if self.fail_on_call == Some(call) {
            return Err(YelpError::Network("connection reset".to_string()));
        }

        let start = (query.offset as usize).min(self.catalog.len());
        let end = (start + query.limit as usize).min(self.catalog.len());

        Ok(SearchPage {
            total: self
                .reported_total
                .unwrap_or(self.catalog.len() as u32),
            businesses: self.catalog[start..end].to_vec(),
        })
    }
}
