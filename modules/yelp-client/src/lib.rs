pub mod error;
pub mod types;

pub use error::{Result, YelpError};
pub use types::{Business, SearchPage, SearchQuery};

use types::{GraphQlRequest, GraphQlResponse, SearchData};

pub const DEFAULT_ENDPOINT: &str = "https://api.yelp.com/v3/graphql";

const SEARCH_QUERY: &str = r#"query Search($term: String, $location: String, $limit: Int, $offset: Int, $price: String, $open_now: Boolean, $radius: Float) {
  search(term: $term, location: $location, limit: $limit, offset: $offset, price: $price, open_now: $open_now, radius: $radius) {
    total
    business {
      id
      name
      url
      price
    }
  }
}"#;

pub struct YelpClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl YelpClient {
    pub fn new(token: String) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, token)
    }

    /// Point the client at a different GraphQL endpoint (proxies, test servers).
    pub fn with_endpoint(endpoint: &str, token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Fetch one page of business search results.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        tracing::debug!(
            term = query.term.as_str(),
            location = query.location.as_str(),
            offset = query.offset,
            limit = query.limit,
            "Querying Yelp search"
        );

        let body = GraphQlRequest {
            query: SEARCH_QUERY,
            variables: query.variables(),
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(YelpError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = resp.bytes().await?;
        let gql: GraphQlResponse<SearchData> = serde_json::from_slice(&bytes)?;

        if !gql.errors.is_empty() {
            let messages: Vec<String> = gql.errors.into_iter().map(|e| e.message).collect();
            return Err(YelpError::GraphQl(messages.join("; ")));
        }

        let data = gql
            .data
            .ok_or_else(|| YelpError::Parse("response has no data".to_string()))?;

        tracing::debug!(
            total = data.search.total,
            count = data.search.businesses.len(),
            "Received Yelp search page"
        );

        Ok(data.search)
    }
}
