//! Sampler behaviour against an in-memory paginated searcher.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use roulette_core::testing::{business, MockSearcher};
use roulette_core::{PriceLevel, RandomSampler, SampleError, SearchRequest, PAGE_SIZE};

fn request(max_sample_size: usize) -> SearchRequest {
    SearchRequest {
        term: "dinner".into(),
        location: "Santa Barbara, CA".into(),
        max_sample_size,
        ..Default::default()
    }
}

fn sampler(searcher: MockSearcher) -> (Arc<MockSearcher>, RandomSampler<Arc<MockSearcher>, StdRng>) {
    let searcher = Arc::new(searcher);
    let sampler = RandomSampler::new(searcher.clone(), StdRng::seed_from_u64(2024));
    (searcher, sampler)
}

#[tokio::test]
async fn stops_at_max_sample_size_before_total() {
    let (searcher, sampler) = sampler(MockSearcher::with_businesses(500));

    let pool = sampler.collect_pool(&request(100)).await.unwrap();

    assert_eq!(pool.len(), 100);
    let offsets: Vec<u32> = searcher.calls().iter().map(|q| q.offset).collect();
    assert_eq!(offsets, vec![0, 50]);
    assert!(searcher.calls().iter().all(|q| q.limit == PAGE_SIZE));
}

#[tokio::test]
async fn stops_at_reported_total_before_max_sample_size() {
    let (searcher, sampler) = sampler(MockSearcher::with_businesses(70));

    let pool = sampler.collect_pool(&request(1000)).await.unwrap();

    assert_eq!(pool.len(), 70);
    assert_eq!(searcher.calls().len(), 2);
}

#[tokio::test]
async fn pool_may_overshoot_bound_by_less_than_a_page() {
    let (_, sampler) = sampler(MockSearcher::with_businesses(500));

    let pool = sampler.collect_pool(&request(60)).await.unwrap();

    assert_eq!(pool.len(), 100);
}

#[tokio::test]
async fn zero_bound_still_fetches_one_page() {
    let (searcher, sampler) = sampler(MockSearcher::with_businesses(10));

    let pool = sampler.collect_pool(&request(0)).await.unwrap();

    assert_eq!(pool.len(), 10);
    assert_eq!(searcher.calls().len(), 1);
}

#[tokio::test]
async fn empty_page_ends_pagination_even_if_total_is_higher() {
    let (searcher, sampler) = sampler(MockSearcher::with_businesses(60).reporting_total(900));

    let pool = sampler.collect_pool(&request(1000)).await.unwrap();

    assert_eq!(pool.len(), 60);
    assert_eq!(searcher.calls().len(), 3);
}

#[tokio::test]
async fn random_business_returns_a_catalog_member() {
    let (_, sampler) = sampler(MockSearcher::with_businesses(120));

    for _ in 0..10 {
        let chosen = sampler.random_business(&request(120)).await.unwrap();
        let index: usize = chosen.id.trim_start_matches("biz-").parse().unwrap();
        assert!(index < 120);
        assert_eq!(chosen, business(index));
    }
}

#[tokio::test]
async fn same_seed_same_choice() {
    let make = || RandomSampler::new(MockSearcher::with_businesses(40), StdRng::seed_from_u64(9));

    let first = make().random_business(&request(50)).await.unwrap();
    let second = make().random_business(&request(50)).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn no_matches_is_empty_result() {
    let (_, sampler) = sampler(MockSearcher::new());

    let err = sampler.random_business(&request(50)).await.unwrap_err();

    assert!(matches!(err, SampleError::EmptyResult));
}

#[tokio::test]
async fn search_failure_aborts_without_partial_result() {
    let (searcher, sampler) = sampler(MockSearcher::with_businesses(500).failing_on_call(1));

    let err = sampler.random_business(&request(200)).await.unwrap_err();

    assert!(matches!(err, SampleError::Search(_)));
    assert_eq!(searcher.calls().len(), 2);
}

#[tokio::test]
async fn request_filters_reach_every_page_query() {
    let (searcher, sampler) = sampler(MockSearcher::with_businesses(200));
    let request = SearchRequest {
        open_now: true,
        price_levels: vec![PriceLevel::One, PriceLevel::Three],
        radius_meters: 16093,
        ..request(100)
    };

    sampler.collect_pool(&request).await.unwrap();

    for query in searcher.calls() {
        assert_eq!(query.term, "dinner");
        assert_eq!(query.location, "Santa Barbara, CA");
        assert!(query.open_now);
        assert_eq!(query.price, vec!["1".to_string(), "3".to_string()]);
        assert_eq!(query.radius, 16093);
    }
}
