use serde::{Deserialize, Deserializer, Serialize};

/// Parameters for one page of the `search` query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub term: String,
    pub location: String,
    /// Price codes ("1".."4"), sent comma-joined.
    pub price: Vec<String>,
    pub open_now: bool,
    /// Search radius in meters. Zero leaves the radius to the API default.
    pub radius: u32,
    pub limit: u32,
    pub offset: u32,
}

impl SearchQuery {
    pub(crate) fn variables(&self) -> SearchVariables<'_> {
        SearchVariables {
            term: &self.term,
            location: &self.location,
            limit: self.limit,
            offset: self.offset,
            price: (!self.price.is_empty()).then(|| self.price.join(",")),
            open_now: self.open_now,
            radius: (self.radius > 0).then_some(self.radius as f64),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchVariables<'a> {
    pub term: &'a str,
    pub location: &'a str,
    pub limit: u32,
    pub offset: u32,
    pub price: Option<String>,
    pub open_now: bool,
    pub radius: Option<f64>,
}

/// GraphQL request envelope.
#[derive(Debug, Serialize)]
pub(crate) struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

/// GraphQL response envelope. `data` is absent when the query fails outright.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlErrorMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlErrorMessage {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchData {
    pub search: SearchPage,
}

/// One page of search results plus the total number of matches the API reports.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub total: u32,
    #[serde(default, rename = "business")]
    pub businesses: Vec<Business>,
}

/// A business returned by the `search` query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Business {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    /// Dollar-run price ("$".."$$$$"). Empty when Yelp has no price for the business.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub price: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
