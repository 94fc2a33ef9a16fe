use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Pool bound used when the caller does not configure one.
pub const DEFAULT_MAX_SAMPLE_SIZE: usize = 50;

/// Yelp price level, written by users as a run of one to four dollar signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceLevel {
    One,
    Two,
    Three,
    Four,
}

impl PriceLevel {
    /// Parse a dollar run ("$".."$$$$"). Anything else is not a price token.
    pub fn from_dollars(token: &str) -> Option<Self> {
        match token {
            "$" => Some(PriceLevel::One),
            "$$" => Some(PriceLevel::Two),
            "$$$" => Some(PriceLevel::Three),
            "$$$$" => Some(PriceLevel::Four),
            _ => None,
        }
    }

    /// The API filter code, "1".."4".
    pub fn code(self) -> &'static str {
        match self {
            PriceLevel::One => "1",
            PriceLevel::Two => "2",
            PriceLevel::Three => "3",
            PriceLevel::Four => "4",
        }
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid price level {0:?}: expected 1-4 or $-$$$$")]
pub struct InvalidPriceLevel(pub String);

/// Accepts either the numeric code or the dollar run.
impl FromStr for PriceLevel {
    type Err = InvalidPriceLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(PriceLevel::One),
            "2" => Ok(PriceLevel::Two),
            "3" => Ok(PriceLevel::Three),
            "4" => Ok(PriceLevel::Four),
            other => PriceLevel::from_dollars(other)
                .ok_or_else(|| InvalidPriceLevel(other.to_string())),
        }
    }
}

/// Structured search parameters, built once per message or command invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub term: String,
    pub location: String,
    pub open_now: bool,
    /// In order of appearance; duplicates are kept.
    pub price_levels: Vec<PriceLevel>,
    /// Zero means unspecified.
    pub radius_meters: u32,
    pub max_sample_size: usize,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            term: String::new(),
            location: String::new(),
            open_now: false,
            price_levels: Vec::new(),
            radius_meters: 0,
            max_sample_size: DEFAULT_MAX_SAMPLE_SIZE,
        }
    }
}

impl SearchRequest {
    /// Build the API query for one page of results.
    pub fn page_query(&self, offset: u32, limit: u32) -> yelp_client::SearchQuery {
        yelp_client::SearchQuery {
            term: self.term.clone(),
            location: self.location.clone(),
            price: self
                .price_levels
                .iter()
                .map(|p| p.code().to_string())
                .collect(),
            open_now: self.open_now,
            radius: self.radius_meters,
            limit,
            offset,
        }
    }
}
